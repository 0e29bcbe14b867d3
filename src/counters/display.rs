//! Display modes for the per-seat counter readout.
//!
//! Each seat independently cycles its large readout between the life
//! total and the commander damage taken from each of its three
//! opponents. Damage trackers enumerate the opponents in ascending seat
//! order, skipping the viewer's own seat: "first" is the lowest-indexed
//! opponent, and so on. The +/- controls always target whichever counter
//! the current mode selects.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Which counter a seat's readout and +/- controls currently target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    /// The seat's own life total.
    #[default]
    Life,
    /// Commander damage from the viewer's first opponent (lowest index).
    DamageFromFirst,
    /// Commander damage from the viewer's second opponent.
    DamageFromSecond,
    /// Commander damage from the viewer's third opponent (highest index).
    DamageFromThird,
}

impl DisplayMode {
    /// The next mode in the cycle:
    /// Life, then each opponent tracker in order, then back to Life.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Life => DisplayMode::DamageFromFirst,
            DisplayMode::DamageFromFirst => DisplayMode::DamageFromSecond,
            DisplayMode::DamageFromSecond => DisplayMode::DamageFromThird,
            DisplayMode::DamageFromThird => DisplayMode::Life,
        }
    }

    /// The opponent seat this mode tracks, from the given viewer's seat.
    ///
    /// Returns `None` for [`DisplayMode::Life`].
    ///
    /// ```
    /// use commander_clock::core::PlayerId;
    /// use commander_clock::counters::DisplayMode;
    ///
    /// // Seat 0's second opponent is seat 2; seat 3's is seat 1.
    /// let mode = DisplayMode::DamageFromSecond;
    /// assert_eq!(mode.tracked_opponent(PlayerId::new(0)), Some(PlayerId::new(2)));
    /// assert_eq!(mode.tracked_opponent(PlayerId::new(3)), Some(PlayerId::new(1)));
    /// ```
    #[must_use]
    pub fn tracked_opponent(self, viewer: PlayerId) -> Option<PlayerId> {
        let seat = match self {
            DisplayMode::Life => return None,
            DisplayMode::DamageFromFirst => {
                if viewer.index() == 0 {
                    1
                } else {
                    0
                }
            }
            DisplayMode::DamageFromSecond => {
                if viewer.index() <= 1 {
                    2
                } else {
                    1
                }
            }
            DisplayMode::DamageFromThird => {
                if viewer.index() <= 2 {
                    3
                } else {
                    2
                }
            }
        };
        Some(PlayerId::new(seat))
    }

    /// Human label for the readout: `"Life"`, or the tracked opponent's
    /// table number for damage modes.
    #[must_use]
    pub fn title(self, viewer: PlayerId) -> String {
        match self.tracked_opponent(viewer) {
            None => "Life".to_string(),
            Some(opponent) => format!("Cmdr from Player {}", opponent.number()),
        }
    }
}
