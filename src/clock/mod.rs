//! Timing subsystem: turn/priority state machine, judge call timer, and
//! readout formatting.
//!
//! The main clock is a four-seat chess clock driven by external ticks.
//! [`TurnClock`] decides which seat each tick is credited to; the judge
//! [`CallTimer`] runs out of band and is unaffected by match pause or
//! the clock-enabled option.

pub mod call_time;
pub mod format;
pub mod turn;

pub use call_time::CallTimer;
pub use format::format_clock;
pub use turn::{PriorityChange, TurnClock, TurnPass};
