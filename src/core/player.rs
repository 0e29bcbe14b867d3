//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for a four-seat pod. Seats are 0-based;
//! table-facing labels are 1-based via [`PlayerId::number`].
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage backed by a `[T; 4]` array with O(1)
//! access. Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! The per-seat record: life total, elapsed clock time, commander damage
//! taken from each opponent, and the currently selected display mode.

use std::ops::{Index, IndexMut};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::counters::DisplayMode;

/// Number of seats in a pod. The engine is four-seat specific: the
/// commander damage layout and the display-mode opponent mapping both
/// assume exactly four seats.
pub const SEAT_COUNT: usize = 4;

/// Default starting life total.
pub const DEFAULT_STARTING_LIFE: i64 = 40;

/// Seat identifier for a four-seat pod.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`, which is
/// also the `Default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the table-facing seat number (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Iterate over all four seat IDs in index order.
    ///
    /// ```
    /// use commander_clock::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], PlayerId::new(0));
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEAT_COUNT as u8).map(PlayerId)
    }

    /// Iterate over the three opponents of this seat, in ascending
    /// index order.
    ///
    /// ```
    /// use commander_clock::core::PlayerId;
    ///
    /// let opps: Vec<_> = PlayerId::new(1).opponents().collect();
    /// assert_eq!(opps, vec![PlayerId::new(0), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn opponents(self) -> impl Iterator<Item = PlayerId> {
        Self::all().filter(move |&other| other != self)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `[T; 4]` array with one entry per seat.
/// Use `SeatMap::new()` to create with a factory function,
/// or `SeatMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use commander_clock::core::{PlayerId, SeatMap};
///
/// // Create with factory
/// let mut life: SeatMap<i64> = SeatMap::new(|_| 40);
///
/// // Access by seat
/// assert_eq!(life[PlayerId::new(0)], 40);
///
/// // Modify
/// life[PlayerId::new(1)] = 34;
/// assert_eq!(life[PlayerId::new(1)], 34);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new SeatMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: PlayerId) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: PlayerId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: PlayerId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<PlayerId> for SeatMap<T> {
    fn index_mut(&mut self, seat: PlayerId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// Per-seat match record.
///
/// Counter fields are directly readable for rendering; mutation goes
/// through the clamping methods so life and damage never drop below zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Current life total. Floor-clamped at 0, no upper bound.
    pub life: i64,

    /// Clock time this seat has consumed.
    pub elapsed_time: Duration,

    /// Commander damage taken, one slot per source seat.
    /// The self slot is unused and stays zero.
    pub commander_damage: [i64; SEAT_COUNT],

    /// Which counter the shared +/- controls currently target.
    pub display_mode: DisplayMode,
}

impl Player {
    /// Create a player with the given starting life.
    #[must_use]
    pub fn new(starting_life: i64) -> Self {
        Self {
            life: starting_life,
            elapsed_time: Duration::ZERO,
            commander_damage: [0; SEAT_COUNT],
            display_mode: DisplayMode::Life,
        }
    }

    /// Increase life by `amount`.
    pub fn gain_life(&mut self, amount: i64) {
        self.life += amount;
    }

    /// Decrease life by `amount`, clamped at 0.
    pub fn lose_life(&mut self, amount: i64) {
        self.life = (self.life - amount).max(0);
    }

    /// Commander damage taken from the given source seat.
    #[must_use]
    pub fn commander_damage_from(&self, source: PlayerId) -> i64 {
        self.commander_damage[source.index()]
    }

    /// Increase commander damage from the given source seat.
    pub fn add_commander_damage(&mut self, source: PlayerId, amount: i64) {
        self.commander_damage[source.index()] += amount;
    }

    /// Decrease commander damage from the given source seat, clamped at 0.
    pub fn remove_commander_damage(&mut self, source: PlayerId, amount: i64) {
        let slot = &mut self.commander_damage[source.index()];
        *slot = (*slot - amount).max(0);
    }

    /// Credit clock time to this seat.
    pub fn credit_time(&mut self, dt: Duration) {
        self.elapsed_time += dt;
    }

    /// Advance the display mode to the next counter in the cycle.
    pub fn cycle_display_mode(&mut self) {
        self.display_mode = self.display_mode.next();
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_LIFE)
    }
}
