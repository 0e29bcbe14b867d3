//! Turn and priority state machine.
//!
//! The pod's clock credit follows a strict rule: while the match is
//! running and unpaused, exactly one seat is owed each tick. That seat is
//! the priority holder when priority is held, and the active seat
//! otherwise. [`TurnClock::credited_seat`] is the single source of truth
//! for that rule.
//!
//! ## Transitions
//!
//! - `start`: NotStarted to Running. The active seat keeps its current
//!   value (seat 0 on a fresh clock) and priority stays unset.
//! - `pass_turn`: releases priority unconditionally, whoever held it,
//!   then advances the active seat round-robin. Intentional
//!   simplification: passing the turn always clears the floor.
//! - `toggle_priority`: release if the seat already holds it, otherwise
//!   grant, overwriting any previous holder. Last caller wins; there is
//!   no queue.
//! - `toggle_pause`: suspends ticking without touching the active seat
//!   or the priority holder.
//! - `reset`: back to NotStarted with seat 0 active.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, SEAT_COUNT};

/// Outcome of a completed turn pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPass {
    /// Seat whose turn ended.
    pub from: PlayerId,
    /// Seat whose turn begins.
    pub to: PlayerId,
    /// Priority holder that was released by the pass, if any.
    pub released: Option<PlayerId>,
}

/// Outcome of a priority toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityChange {
    /// The seat now holds priority.
    Granted {
        /// Seat that was granted priority.
        seat: PlayerId,
        /// Holder that was displaced, if the floor was already held.
        previous: Option<PlayerId>,
    },
    /// The seat released the priority it held.
    Released {
        /// Seat that released priority.
        seat: PlayerId,
    },
}

/// Turn, priority, and run/pause state for the main clock.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    active_seat: PlayerId,
    priority: Option<PlayerId>,
    started: bool,
    paused: bool,
}

impl TurnClock {
    /// Create a fresh clock: not started, seat 0 active, no priority.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn active_seat(&self) -> PlayerId {
        self.active_seat
    }

    /// Seat currently holding priority, if any.
    #[must_use]
    pub fn priority_holder(&self) -> Option<PlayerId> {
        self.priority
    }

    /// Whether the given seat holds priority.
    #[must_use]
    pub fn holds_priority(&self, seat: PlayerId) -> bool {
        self.priority == Some(seat)
    }

    /// Whether the match has been started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether ticking is suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seat owed the next tick of clock credit.
    ///
    /// `None` unless the match is running and unpaused. Otherwise the
    /// priority holder if priority is held, else the active seat; never
    /// both, never neither.
    #[must_use]
    pub fn credited_seat(&self) -> Option<PlayerId> {
        if !self.started || self.paused {
            return None;
        }
        Some(self.priority.unwrap_or(self.active_seat))
    }

    /// Start the match.
    ///
    /// Returns `true` if the clock transitioned out of NotStarted.
    /// Starting an already started clock is a no-op.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.paused = false;
        true
    }

    /// Pass the turn to the next seat round-robin.
    ///
    /// Releases priority unconditionally first, even when a seat other
    /// than the active one holds it. Returns `None` (and changes
    /// nothing) if the match has not started.
    pub fn pass_turn(&mut self) -> Option<TurnPass> {
        if !self.started {
            return None;
        }

        let released = self.priority.take();
        let from = self.active_seat;
        let to = PlayerId::new((from.0 + 1) % SEAT_COUNT as u8);
        self.active_seat = to;

        Some(TurnPass { from, to, released })
    }

    /// Toggle priority for a seat.
    ///
    /// Releasing when the seat holds priority, granting otherwise.
    /// Granting displaces any current holder.
    pub fn toggle_priority(&mut self, seat: PlayerId) -> PriorityChange {
        if self.priority == Some(seat) {
            self.priority = None;
            PriorityChange::Released { seat }
        } else {
            let previous = self.priority.replace(seat);
            PriorityChange::Granted { seat, previous }
        }
    }

    /// Flip the pause flag. Returns the new value.
    ///
    /// Pausing does not clear priority or the active seat.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Force the clock back to NotStarted: seat 0 active, no priority,
    /// unpaused.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
