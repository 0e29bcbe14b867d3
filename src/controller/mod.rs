//! Match controller: command dispatch, guarding, and event emission.
//!
//! [`MatchController`] is the single entry point for mutation. Each
//! [`Command`] is dispatched against the current state; a command that
//! applies is recorded in the history and its events are delivered to
//! every registered observer, while a command refused by a guard
//! returns an empty batch and changes nothing.
//!
//! ## Guards
//!
//! Clock commands (`Start`, `TogglePause`, `PassTurn`, `TogglePriority`)
//! require the chess clock to be enabled; `PassTurn` additionally
//! requires a started match. Counter commands and the judge timer are
//! always live. Option setters refuse values that would not change
//! anything.
//!
//! Clamped counter adjustments are not refusals: decrementing a counter
//! already at zero applies, emitting the post-clamp value.
//!
//! ## Wake lock
//!
//! After every applied command the controller reconciles the injected
//! [`WakeLock`] against one rule: the lock is held exactly while the
//! main clock is running unpaused or a judge timing is in progress.
//! Acquire and release fire only on transitions.

pub mod collaborators;

pub use collaborators::{MatchObserver, NoopWakeLock, WakeLock};

use std::time::Duration;

use crate::clock::PriorityChange;
use crate::core::{
    ColorTheme, Command, EventBatch, MatchConfig, MatchEvent, MatchState, PlayerId,
};
use crate::counters::{self, CounterChange};

/// Owns the match state and mediates every mutation.
pub struct MatchController {
    state: MatchState,
    config: MatchConfig,
    wake_lock: Box<dyn WakeLock>,
    wake_held: bool,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl MatchController {
    /// Create a controller with no wake lock.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self::with_wake_lock(config, Box::new(NoopWakeLock))
    }

    /// Create a controller that drives the given wake lock.
    #[must_use]
    pub fn with_wake_lock(config: MatchConfig, wake_lock: Box<dyn WakeLock>) -> Self {
        Self {
            state: MatchState::new(&config),
            config,
            wake_lock,
            wake_held: false,
            observers: Vec::new(),
        }
    }

    /// Register an observer for all future events.
    pub fn add_observer(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    /// The current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Advance time by `dt`. Emits no events.
    ///
    /// Call at roughly [`crate::core::TICK_INTERVAL`], or with the true
    /// measured interval; the engine credits whatever it is given.
    pub fn tick(&mut self, dt: Duration) {
        self.state.tick(dt);
    }

    /// Apply a command.
    ///
    /// Returns the events it produced. An empty batch means the command
    /// was refused by a guard and nothing changed; refused commands are
    /// not recorded in the history.
    pub fn apply(&mut self, command: Command) -> EventBatch {
        let events = self.dispatch(command);
        if events.is_empty() {
            log::debug!("command refused: {command:?}");
            return events;
        }

        self.state.record_command(command);
        self.sync_wake_lock();
        for event in &events {
            for observer in &mut self.observers {
                observer.on_event(event, &self.state);
            }
        }
        events
    }

    fn dispatch(&mut self, command: Command) -> EventBatch {
        let mut events = EventBatch::new();
        match command {
            Command::Start => {
                if self.state.clock_enabled && self.state.turn.start() {
                    log::info!("match started");
                    events.push(MatchEvent::MatchStarted);
                }
            }
            Command::TogglePause => {
                if self.state.clock_enabled {
                    let paused = self.state.turn.toggle_pause();
                    events.push(if paused { MatchEvent::Paused } else { MatchEvent::Resumed });
                }
            }
            Command::PassTurn => {
                if self.state.clock_enabled {
                    if let Some(pass) = self.state.turn.pass_turn() {
                        if let Some(released) = pass.released {
                            events.push(MatchEvent::PriorityReleased { seat: released });
                        }
                        events.push(MatchEvent::TurnPassed { from: pass.from, to: pass.to });
                    }
                }
            }
            Command::TogglePriority { seat } => {
                if self.state.clock_enabled {
                    match self.state.turn.toggle_priority(seat) {
                        PriorityChange::Granted { seat, previous } => {
                            if let Some(previous) = previous {
                                events.push(MatchEvent::PriorityReleased { seat: previous });
                            }
                            events.push(MatchEvent::PriorityGranted { seat });
                        }
                        PriorityChange::Released { seat } => {
                            events.push(MatchEvent::PriorityReleased { seat });
                        }
                    }
                }
            }
            Command::IncrementLife { seat } => {
                let player = &mut self.state.seats[seat];
                player.gain_life(1);
                events.push(MatchEvent::LifeChanged { seat, life: player.life });
            }
            Command::DecrementLife { seat } => {
                let player = &mut self.state.seats[seat];
                player.lose_life(1);
                events.push(MatchEvent::LifeChanged { seat, life: player.life });
            }
            Command::CycleDisplayMode { seat } => {
                let player = &mut self.state.seats[seat];
                player.cycle_display_mode();
                events.push(MatchEvent::DisplayModeChanged { seat, mode: player.display_mode });
            }
            Command::IncrementDisplayed { seat } => {
                events.push(self.adjust_displayed(seat, 1));
            }
            Command::DecrementDisplayed { seat } => {
                events.push(self.adjust_displayed(seat, -1));
            }
            Command::StartCallTime { seat } => {
                if let Some(displaced) = self.state.call_time.start(seat) {
                    events.push(MatchEvent::CallTimeStopped { seat: displaced });
                }
                events.push(MatchEvent::CallTimeStarted { seat });
            }
            Command::StopCallTime => {
                if let Some(seat) = self.state.call_time.stop() {
                    events.push(MatchEvent::CallTimeStopped { seat });
                }
            }
            Command::ResetCallTime => {
                if let Some(seat) = self.state.call_time.subject() {
                    self.state.call_time.reset();
                    events.push(MatchEvent::CallTimeReset { seat });
                }
            }
            Command::ResetMatch => {
                log::info!("match reset");
                self.state.reset(&self.config);
                events.push(MatchEvent::MatchReset);
            }
            Command::SetClockEnabled { enabled } => {
                if self.state.clock_enabled != enabled {
                    self.state.clock_enabled = enabled;
                    events.push(MatchEvent::ClockEnabledChanged { enabled });
                }
            }
            Command::SetColorTheme { theme } => {
                if self.state.color_theme != theme {
                    self.state.color_theme = theme;
                    events.push(MatchEvent::ThemeChanged { theme });
                }
            }
        }
        events
    }

    fn adjust_displayed(&mut self, seat: PlayerId, delta: i64) -> MatchEvent {
        match counters::adjust_displayed(&mut self.state.seats[seat], seat, delta) {
            CounterChange::Life { life } => MatchEvent::LifeChanged { seat, life },
            CounterChange::Damage { source, total } => {
                MatchEvent::DamageChanged { seat, source, total }
            }
        }
    }

    fn sync_wake_lock(&mut self) {
        let should_hold = (self.state.clock_enabled
            && self.state.turn.is_started()
            && !self.state.turn.is_paused())
            || self.state.call_time.is_active();

        if should_hold && !self.wake_held {
            self.wake_lock.acquire();
            self.wake_held = true;
        } else if !should_hold && self.wake_held {
            self.wake_lock.release();
            self.wake_held = false;
        }
    }

    // Command shorthands.

    /// Begin the match.
    pub fn start(&mut self) -> EventBatch {
        self.apply(Command::Start)
    }

    /// Suspend or resume main-clock ticking.
    pub fn toggle_pause(&mut self) -> EventBatch {
        self.apply(Command::TogglePause)
    }

    /// Advance the active seat round-robin.
    pub fn pass_turn(&mut self) -> EventBatch {
        self.apply(Command::PassTurn)
    }

    /// Grant or release priority for a seat.
    pub fn toggle_priority(&mut self, seat: PlayerId) -> EventBatch {
        self.apply(Command::TogglePriority { seat })
    }

    /// Add one life to a seat.
    pub fn increment_life(&mut self, seat: PlayerId) -> EventBatch {
        self.apply(Command::IncrementLife { seat })
    }

    /// Remove one life from a seat.
    pub fn decrement_life(&mut self, seat: PlayerId) -> EventBatch {
        self.apply(Command::DecrementLife { seat })
    }

    /// Advance a seat's readout to the next counter.
    pub fn cycle_display_mode(&mut self, seat: PlayerId) -> EventBatch {
        self.apply(Command::CycleDisplayMode { seat })
    }

    /// Add one to the counter the seat's readout targets.
    pub fn increment_displayed(&mut self, seat: PlayerId) -> EventBatch {
        self.apply(Command::IncrementDisplayed { seat })
    }

    /// Remove one from the counter the seat's readout targets.
    pub fn decrement_displayed(&mut self, seat: PlayerId) -> EventBatch {
        self.apply(Command::DecrementDisplayed { seat })
    }

    /// Begin judge timing for a seat.
    pub fn start_call_time(&mut self, seat: PlayerId) -> EventBatch {
        self.apply(Command::StartCallTime { seat })
    }

    /// End the current judge timing.
    pub fn stop_call_time(&mut self) -> EventBatch {
        self.apply(Command::StopCallTime)
    }

    /// Zero the judge timer without ending the timing.
    pub fn reset_call_time(&mut self) -> EventBatch {
        self.apply(Command::ResetCallTime)
    }

    /// Return the match to its configured starting state.
    pub fn reset_match(&mut self) -> EventBatch {
        self.apply(Command::ResetMatch)
    }

    /// Enable or disable the chess clock subsystem.
    pub fn set_clock_enabled(&mut self, enabled: bool) -> EventBatch {
        self.apply(Command::SetClockEnabled { enabled })
    }

    /// Switch the color theme.
    pub fn set_color_theme(&mut self, theme: ColorTheme) -> EventBatch {
        self.apply(Command::SetColorTheme { theme })
    }

    // Queries.

    /// A seat's clock readout, masked while the clock is disabled.
    #[must_use]
    pub fn formatted_time(&self, seat: PlayerId) -> String {
        self.state.formatted_time(seat)
    }

    /// The judge timer readout.
    #[must_use]
    pub fn formatted_call_time(&self) -> String {
        self.state.formatted_call_time()
    }

    /// The value a seat's readout currently shows.
    #[must_use]
    pub fn displayed_value(&self, seat: PlayerId) -> i64 {
        counters::displayed_value(&self.state.seats[seat], seat)
    }

    /// Human label for a seat's readout.
    #[must_use]
    pub fn display_title(&self, seat: PlayerId) -> String {
        counters::display_title(&self.state.seats[seat], seat)
    }

    /// Whether a start-call-time control for this seat should be live.
    ///
    /// True when the timer is idle or already timing this seat (a
    /// restart). False while another seat is being timed; applying
    /// `StartCallTime` anyway still cancels and restarts.
    #[must_use]
    pub fn can_start_call_time(&self, seat: PlayerId) -> bool {
        match self.state.call_time.subject() {
            None => true,
            Some(subject) => subject == seat,
        }
    }
}
