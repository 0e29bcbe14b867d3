//! Command and event vocabulary.
//!
//! Every externally triggered mutation enters the engine as a
//! [`Command`], and every observable consequence leaves it as a
//! [`MatchEvent`]. A command that applies produces one or more events; a
//! command refused by a guard (clock disabled, match not started, timer
//! idle) produces an empty batch and changes nothing. Ticks are not
//! commands: time advances through `MatchController::tick`, which emits
//! no events.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::ColorTheme;
use crate::core::PlayerId;
use crate::counters::DisplayMode;

/// An externally triggered mutation of the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Begin the match, enabling turn passing and clock credit.
    Start,
    /// Suspend or resume main-clock ticking.
    TogglePause,
    /// Advance the active seat round-robin, releasing priority.
    PassTurn,
    /// Grant or release priority for a seat.
    TogglePriority {
        /// Seat toggling its priority claim.
        seat: PlayerId,
    },
    /// Add one life to a seat.
    IncrementLife {
        /// Seat gaining life.
        seat: PlayerId,
    },
    /// Remove one life from a seat, floor-clamped at 0.
    DecrementLife {
        /// Seat losing life.
        seat: PlayerId,
    },
    /// Advance a seat's readout to the next counter in the cycle.
    CycleDisplayMode {
        /// Seat whose readout cycles.
        seat: PlayerId,
    },
    /// Add one to whichever counter the seat's readout targets.
    IncrementDisplayed {
        /// Seat being adjusted.
        seat: PlayerId,
    },
    /// Remove one from whichever counter the seat's readout targets,
    /// floor-clamped at 0.
    DecrementDisplayed {
        /// Seat being adjusted.
        seat: PlayerId,
    },
    /// Begin judge timing for a seat, cancelling any timing in progress.
    StartCallTime {
        /// Seat being timed.
        seat: PlayerId,
    },
    /// End the current judge timing, discarding the accumulated time.
    StopCallTime,
    /// Zero the judge timer without ending the timing.
    ResetCallTime,
    /// Return the whole match to its configured starting state.
    ResetMatch,
    /// Enable or disable the chess clock subsystem.
    SetClockEnabled {
        /// New value of the option.
        enabled: bool,
    },
    /// Switch the color theme.
    SetColorTheme {
        /// New theme.
        theme: ColorTheme,
    },
}

/// A command that applied, with its position in the match history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command that applied.
    pub command: Command,
    /// Monotonic sequence number, starting at 0 for the first applied
    /// command of a match.
    pub sequence: u64,
}

/// An observable consequence of an applied command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The match left NotStarted.
    MatchStarted,
    /// Main-clock ticking was suspended.
    Paused,
    /// Main-clock ticking resumed.
    Resumed,
    /// The active seat advanced.
    TurnPassed {
        /// Seat whose turn ended.
        from: PlayerId,
        /// Seat whose turn begins.
        to: PlayerId,
    },
    /// A seat now holds priority.
    PriorityGranted {
        /// The new holder.
        seat: PlayerId,
    },
    /// A seat no longer holds priority.
    PriorityReleased {
        /// The former holder.
        seat: PlayerId,
    },
    /// A seat's life total changed.
    LifeChanged {
        /// Seat whose life changed.
        seat: PlayerId,
        /// New life total.
        life: i64,
    },
    /// A commander damage slot changed.
    DamageChanged {
        /// Seat taking the damage.
        seat: PlayerId,
        /// Seat the damage is tracked from.
        source: PlayerId,
        /// New damage total in that slot.
        total: i64,
    },
    /// A seat's readout switched counters.
    DisplayModeChanged {
        /// Seat whose readout changed.
        seat: PlayerId,
        /// The newly selected mode.
        mode: DisplayMode,
    },
    /// Judge timing began for a seat.
    CallTimeStarted {
        /// Seat being timed.
        seat: PlayerId,
    },
    /// Judge timing ended.
    CallTimeStopped {
        /// Seat that was being timed.
        seat: PlayerId,
    },
    /// The judge timer was zeroed mid-timing.
    CallTimeReset {
        /// Seat still being timed.
        seat: PlayerId,
    },
    /// The match returned to its configured starting state.
    MatchReset,
    /// The chess clock subsystem was enabled or disabled.
    ClockEnabledChanged {
        /// New value of the option.
        enabled: bool,
    },
    /// The color theme switched.
    ThemeChanged {
        /// New theme.
        theme: ColorTheme,
    },
}

/// Events produced by one applied command.
///
/// Most commands produce one event; `PassTurn` with a priority holder
/// produces two, and `ResetMatch` one. Inline capacity covers the
/// common cases without allocating.
pub type EventBatch = SmallVec<[MatchEvent; 2]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serialization() {
        let commands = [
            Command::Start,
            Command::TogglePriority { seat: PlayerId::new(2) },
            Command::SetClockEnabled { enabled: true },
            Command::SetColorTheme { theme: ColorTheme::Dark },
        ];

        for command in commands {
            let json = serde_json::to_string(&command).unwrap();
            let deserialized: Command = serde_json::from_str(&json).unwrap();
            assert_eq!(command, deserialized);
        }
    }

    #[test]
    fn test_event_serialization() {
        let event = MatchEvent::DamageChanged {
            seat: PlayerId::new(0),
            source: PlayerId::new(3),
            total: 12,
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_command_record_ordering_fields() {
        let record = CommandRecord { command: Command::Start, sequence: 0 };
        assert_eq!(record.sequence, 0);
        assert_eq!(record.command, Command::Start);
    }

    #[test]
    fn test_event_batch_inline_capacity() {
        let mut batch = EventBatch::new();
        batch.push(MatchEvent::MatchStarted);
        batch.push(MatchEvent::Paused);
        assert!(!batch.spilled());
    }
}
