//! Complete match state.
//!
//! [`MatchState`] owns everything the pod tracks: the four seat records,
//! the turn/priority clock, the judge timer, the live option values, and
//! the history of applied commands. It is a passive container with a
//! handful of invariant-preserving mutators; orchestration, guarding,
//! and event emission live in the controller.
//!
//! ## Clock gating
//!
//! The `clock_enabled` option gates the chess clock two ways: `tick`
//! credits no seat while the clock is disabled, and `formatted_time`
//! masks every seat's readout to the zero string so previously
//! accumulated time is hidden rather than erased. The judge timer is
//! exempt from both.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::clock::{format_clock, CallTimer, TurnClock};
use crate::core::command::{Command, CommandRecord};
use crate::core::config::{ColorTheme, MatchConfig};
use crate::core::player::{Player, PlayerId, SeatMap};

/// The zero readout shown while the chess clock is disabled.
pub const MASKED_CLOCK: &str = "00:00.0";

/// Everything the pod tracks for one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Per-seat records: life, elapsed time, damage, display mode.
    pub seats: SeatMap<Player>,

    /// Turn, priority, and run/pause state.
    pub turn: TurnClock,

    /// Judge call timer.
    pub call_time: CallTimer,

    /// Whether the turn/priority/timer subsystem is live.
    pub clock_enabled: bool,

    /// Current color theme.
    pub color_theme: ColorTheme,

    history: Vector<CommandRecord>,
    next_sequence: u64,
}

impl MatchState {
    /// Create the starting state for a match with the given options.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            seats: SeatMap::new(|_| Player::new(config.starting_life)),
            turn: TurnClock::new(),
            call_time: CallTimer::new(),
            clock_enabled: config.clock_enabled,
            color_theme: config.color_theme,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    /// Advance time by `dt`.
    ///
    /// Credits the seat selected by the turn clock when the chess clock
    /// is enabled, and advances the judge timer regardless. A disabled
    /// clock, an unstarted match, and a paused match all credit nobody.
    pub fn tick(&mut self, dt: Duration) {
        if self.clock_enabled {
            if let Some(seat) = self.turn.credited_seat() {
                self.seats[seat].credit_time(dt);
            }
        }
        self.call_time.tick(dt);
    }

    /// A seat's clock readout.
    ///
    /// Masked to [`MASKED_CLOCK`] while the chess clock is disabled; the
    /// underlying accumulated time is retained, not erased.
    #[must_use]
    pub fn formatted_time(&self, seat: PlayerId) -> String {
        if !self.clock_enabled {
            return MASKED_CLOCK.to_string();
        }
        format_clock(self.seats[seat].elapsed_time)
    }

    /// The judge timer readout. Never masked.
    #[must_use]
    pub fn formatted_call_time(&self) -> String {
        format_clock(self.call_time.elapsed())
    }

    /// Append an applied command to the history.
    pub fn record_command(&mut self, command: Command) -> CommandRecord {
        let record = CommandRecord { command, sequence: self.next_sequence };
        self.next_sequence += 1;
        self.history.push_back(record);
        record
    }

    /// The commands applied so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Return the match to its starting state.
    ///
    /// Seat records, the turn clock, the judge timer, and the history
    /// are rebuilt from the configured starting values. The live option
    /// values survive: toggling the clock or the theme and then
    /// resetting keeps the toggled values, not the boot-time ones.
    pub fn reset(&mut self, config: &MatchConfig) {
        let clock_enabled = self.clock_enabled;
        let color_theme = self.color_theme;
        *self = Self::new(config);
        self.clock_enabled = clock_enabled;
        self.color_theme = color_theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_from_config() {
        let config = MatchConfig::new().with_starting_life(30);
        let state = MatchState::new(&config);

        for seat in PlayerId::all() {
            assert_eq!(state.seats[seat].life, 30);
            assert_eq!(state.seats[seat].elapsed_time, Duration::ZERO);
        }
        assert!(!state.turn.is_started());
        assert!(!state.call_time.is_active());
        assert!(!state.clock_enabled);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_tick_requires_enabled_clock() {
        let config = MatchConfig::new();
        let mut state = MatchState::new(&config);
        state.turn.start();

        state.tick(Duration::from_millis(100));

        for seat in PlayerId::all() {
            assert_eq!(state.seats[seat].elapsed_time, Duration::ZERO);
        }
    }

    #[test]
    fn test_tick_credits_active_seat() {
        let config = MatchConfig::new().with_clock_enabled(true);
        let mut state = MatchState::new(&config);
        state.turn.start();

        for _ in 0..3 {
            state.tick(Duration::from_millis(100));
        }

        assert_eq!(
            state.seats[PlayerId::new(0)].elapsed_time,
            Duration::from_millis(300)
        );
        assert_eq!(state.seats[PlayerId::new(1)].elapsed_time, Duration::ZERO);
    }

    #[test]
    fn test_tick_credits_priority_holder() {
        let config = MatchConfig::new().with_clock_enabled(true);
        let mut state = MatchState::new(&config);
        state.turn.start();
        state.turn.toggle_priority(PlayerId::new(2));

        state.tick(Duration::from_millis(100));

        assert_eq!(state.seats[PlayerId::new(0)].elapsed_time, Duration::ZERO);
        assert_eq!(
            state.seats[PlayerId::new(2)].elapsed_time,
            Duration::from_millis(100)
        );
    }

    #[test]
    fn test_tick_advances_call_timer_while_paused() {
        let config = MatchConfig::new().with_clock_enabled(true);
        let mut state = MatchState::new(&config);
        state.turn.start();
        state.turn.toggle_pause();
        state.call_time.start(PlayerId::new(1));

        state.tick(Duration::from_millis(100));

        // Main clock suspended, judge timer still running.
        assert_eq!(state.seats[PlayerId::new(0)].elapsed_time, Duration::ZERO);
        assert_eq!(state.call_time.elapsed(), Duration::from_millis(100));
    }

    #[test]
    fn test_call_timer_runs_with_clock_disabled() {
        let config = MatchConfig::new();
        let mut state = MatchState::new(&config);
        state.call_time.start(PlayerId::new(0));

        state.tick(Duration::from_millis(200));

        assert_eq!(state.call_time.elapsed(), Duration::from_millis(200));
    }

    #[test]
    fn test_formatted_time_masked_when_clock_disabled() {
        let config = MatchConfig::new().with_clock_enabled(true);
        let mut state = MatchState::new(&config);
        state.turn.start();
        state.tick(Duration::from_secs(75));

        assert_eq!(state.formatted_time(PlayerId::new(0)), "01:15.0");

        // Disabling masks the readout without erasing the time.
        state.clock_enabled = false;
        assert_eq!(state.formatted_time(PlayerId::new(0)), MASKED_CLOCK);
        assert_eq!(
            state.seats[PlayerId::new(0)].elapsed_time,
            Duration::from_secs(75)
        );

        state.clock_enabled = true;
        assert_eq!(state.formatted_time(PlayerId::new(0)), "01:15.0");
    }

    #[test]
    fn test_formatted_call_time_never_masked() {
        let config = MatchConfig::new();
        let mut state = MatchState::new(&config);
        state.call_time.start(PlayerId::new(2));
        state.tick(Duration::from_millis(62_500));

        assert_eq!(state.formatted_call_time(), "01:02.5");
    }

    #[test]
    fn test_record_command_sequences() {
        let config = MatchConfig::new();
        let mut state = MatchState::new(&config);

        let first = state.record_command(Command::Start);
        let second = state.record_command(Command::PassTurn);

        assert_eq!(first.sequence, 0);
        assert_eq!(second.sequence, 1);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_reset_rebuilds_but_keeps_options() {
        let config = MatchConfig::new().with_starting_life(25);
        let mut state = MatchState::new(&config);

        state.turn.start();
        state.seats[PlayerId::new(1)].lose_life(10);
        state.call_time.start(PlayerId::new(3));
        state.record_command(Command::Start);
        state.clock_enabled = true;
        state.color_theme = ColorTheme::Dark;

        state.reset(&config);

        assert_eq!(state.seats[PlayerId::new(1)].life, 25);
        assert!(!state.turn.is_started());
        assert!(!state.call_time.is_active());
        assert!(state.history().is_empty());

        // Live option values survive the reset.
        assert!(state.clock_enabled);
        assert_eq!(state.color_theme, ColorTheme::Dark);
    }

    #[test]
    fn test_sequence_restarts_after_reset() {
        let config = MatchConfig::new();
        let mut state = MatchState::new(&config);

        state.record_command(Command::Start);
        state.reset(&config);

        assert_eq!(state.record_command(Command::Start).sequence, 0);
    }

    #[test]
    fn test_state_serialization() {
        let config = MatchConfig::new().with_clock_enabled(true);
        let mut state = MatchState::new(&config);
        state.turn.start();
        state.tick(Duration::from_millis(300));
        state.record_command(Command::Start);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
