//! Counter subsystem: display modes and mode-directed adjustment.
//!
//! The large readout and the shared +/- controls on each seat target one
//! counter at a time, selected by the seat's [`DisplayMode`]. This module
//! routes reads and adjustments to the right counter and reports what
//! changed so the controller can notify observers.
//!
//! Counters stay live even when the chess clock is disabled.

pub mod display;

pub use display::DisplayMode;

use crate::core::{Player, PlayerId};

/// Outcome of a mode-directed counter adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterChange {
    /// The seat's life total changed.
    Life {
        /// New life total.
        life: i64,
    },
    /// A commander damage slot changed.
    Damage {
        /// Seat the damage is tracked from.
        source: PlayerId,
        /// New damage total in that slot.
        total: i64,
    },
}

/// The value currently selected by the seat's display mode.
#[must_use]
pub fn displayed_value(player: &Player, seat: PlayerId) -> i64 {
    match player.display_mode.tracked_opponent(seat) {
        None => player.life,
        Some(opponent) => player.commander_damage_from(opponent),
    }
}

/// Human label for the seat's current readout.
#[must_use]
pub fn display_title(player: &Player, seat: PlayerId) -> String {
    player.display_mode.title(seat)
}

/// Adjust the counter selected by the seat's display mode.
///
/// Positive `delta` increments without bound; negative `delta` is
/// floor-clamped at 0 like every counter in the engine.
pub fn adjust_displayed(player: &mut Player, seat: PlayerId, delta: i64) -> CounterChange {
    match player.display_mode.tracked_opponent(seat) {
        None => {
            if delta >= 0 {
                player.gain_life(delta);
            } else {
                player.lose_life(-delta);
            }
            CounterChange::Life { life: player.life }
        }
        Some(opponent) => {
            if delta >= 0 {
                player.add_commander_damage(opponent, delta);
            } else {
                player.remove_commander_damage(opponent, -delta);
            }
            CounterChange::Damage {
                source: opponent,
                total: player.commander_damage_from(opponent),
            }
        }
    }
}
