//! # commander-clock
//!
//! A headless engine for a four-player Commander life counter with an
//! optional chess clock.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, no platform timers. A host drives the
//!    engine by calling `MatchController::tick` and applying commands;
//!    platform concerns (keeping the screen awake) sit behind traits.
//!
//! 2. **Guarded No-Ops**: Out-of-order input never errors. A command
//!    the current state refuses returns an empty event batch and
//!    changes nothing.
//!
//! 3. **Counters Always Live**: Life, commander damage, and the judge
//!    timer work whether or not the chess clock is enabled. The clock
//!    is strictly opt-in.
//!
//! ## Architecture
//!
//! - **Command/Event Flow**: Every mutation is a `Command`; every
//!   observable consequence is a `MatchEvent` delivered to registered
//!   observers. Applied commands accumulate in a persistent history
//!   (`im-rs`, O(1) cloning for snapshots).
//!
//! - **Single Credit Rule**: Each tick credits at most one seat, chosen
//!   by `TurnClock::credited_seat`: the priority holder if priority is
//!   held, the active seat otherwise, nobody while paused or disabled.
//!
//! ## Modules
//!
//! - `core`: Seat IDs, per-seat records, configuration, commands, state
//! - `clock`: Turn/priority state machine, judge timer, formatting
//! - `counters`: Display modes and mode-directed adjustment
//! - `controller`: Command dispatch, guarding, event emission

pub mod clock;
pub mod controller;
pub mod core;
pub mod counters;

// Re-export commonly used types
pub use crate::core::{
    ColorTheme, Command, CommandRecord, EventBatch, MatchConfig, MatchEvent, MatchState,
    Player, PlayerId, SeatMap, DEFAULT_STARTING_LIFE, MASKED_CLOCK, SEAT_COUNT,
    TICK_INTERVAL,
};

pub use crate::clock::{format_clock, CallTimer, PriorityChange, TurnClock, TurnPass};

pub use crate::counters::{adjust_displayed, display_title, displayed_value, CounterChange, DisplayMode};

pub use crate::controller::{MatchController, MatchObserver, NoopWakeLock, WakeLock};
