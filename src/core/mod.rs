//! Core match types: seats, per-seat records, configuration, commands,
//! and the complete match state.

pub mod command;
pub mod config;
pub mod player;
pub mod state;

pub use command::{Command, CommandRecord, EventBatch, MatchEvent};
pub use config::{ColorTheme, MatchConfig, TICK_INTERVAL};
pub use player::{Player, PlayerId, SeatMap, DEFAULT_STARTING_LIFE, SEAT_COUNT};
pub use state::{MatchState, MASKED_CLOCK};
