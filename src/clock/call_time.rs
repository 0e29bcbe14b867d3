//! Judge call timer.
//!
//! An out-of-band stopwatch for timing a single seat, typically while a
//! ruling is resolved. It runs independently of the main clock: pausing
//! the match does not stop it, and it keeps counting whether or not the
//! chess clock is enabled.
//!
//! Starting a timer while one is already running cancels the old timing
//! and begins fresh for the new subject. Stopping clears both the
//! subject and the accumulated elapsed time; there is no way to read a
//! timing after it ends.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Stopwatch timing one seat at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTimer {
    subject: Option<PlayerId>,
    elapsed: Duration,
}

impl CallTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a timing is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.subject.is_some()
    }

    /// Seat being timed, if any.
    #[must_use]
    pub fn subject(&self) -> Option<PlayerId> {
        self.subject
    }

    /// Time accumulated by the current timing. Zero when idle.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Begin timing a seat, from zero.
    ///
    /// Cancels any timing already in progress, including one for the
    /// same seat. Returns the subject that was displaced, if any.
    pub fn start(&mut self, seat: PlayerId) -> Option<PlayerId> {
        let displaced = self.subject.replace(seat);
        self.elapsed = Duration::ZERO;
        displaced
    }

    /// End the current timing, discarding the accumulated time.
    ///
    /// Returns the seat that was being timed, or `None` (a no-op) when
    /// the timer was idle.
    pub fn stop(&mut self) -> Option<PlayerId> {
        let subject = self.subject.take();
        self.elapsed = Duration::ZERO;
        subject
    }

    /// Zero the accumulated time without ending the timing.
    ///
    /// No-op when idle. Returns `true` if a timing was in progress.
    pub fn reset(&mut self) -> bool {
        self.elapsed = Duration::ZERO;
        self.subject.is_some()
    }

    /// Accumulate elapsed time. No-op when idle.
    pub fn tick(&mut self, dt: Duration) {
        if self.subject.is_some() {
            self.elapsed += dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer() {
        let timer = CallTimer::new();

        assert!(!timer.is_active());
        assert_eq!(timer.subject(), None);
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_tick_while_idle_accumulates_nothing() {
        let mut timer = CallTimer::new();

        timer.tick(Duration::from_millis(500));
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_start_and_tick() {
        let mut timer = CallTimer::new();

        assert_eq!(timer.start(PlayerId::new(2)), None);
        assert!(timer.is_active());
        assert_eq!(timer.subject(), Some(PlayerId::new(2)));

        timer.tick(Duration::from_millis(100));
        timer.tick(Duration::from_millis(100));
        assert_eq!(timer.elapsed(), Duration::from_millis(200));
    }

    #[test]
    fn test_restart_displaces_and_zeroes() {
        let mut timer = CallTimer::new();

        timer.start(PlayerId::new(0));
        timer.tick(Duration::from_secs(5));

        let displaced = timer.start(PlayerId::new(3));
        assert_eq!(displaced, Some(PlayerId::new(0)));
        assert_eq!(timer.subject(), Some(PlayerId::new(3)));
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_restart_same_seat_zeroes() {
        let mut timer = CallTimer::new();

        timer.start(PlayerId::new(1));
        timer.tick(Duration::from_secs(3));

        assert_eq!(timer.start(PlayerId::new(1)), Some(PlayerId::new(1)));
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_stop_discards_elapsed() {
        let mut timer = CallTimer::new();

        timer.start(PlayerId::new(2));
        timer.tick(Duration::from_secs(7));

        assert_eq!(timer.stop(), Some(PlayerId::new(2)));
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_stop_while_idle_is_noop() {
        let mut timer = CallTimer::new();
        assert_eq!(timer.stop(), None);
    }

    #[test]
    fn test_reset_keeps_timing() {
        let mut timer = CallTimer::new();

        timer.start(PlayerId::new(1));
        timer.tick(Duration::from_secs(4));

        assert!(timer.reset());
        assert!(timer.is_active());
        assert_eq!(timer.subject(), Some(PlayerId::new(1)));
        assert_eq!(timer.elapsed(), Duration::ZERO);

        // The timing continues to accumulate after the reset.
        timer.tick(Duration::from_millis(100));
        assert_eq!(timer.elapsed(), Duration::from_millis(100));
    }

    #[test]
    fn test_reset_while_idle() {
        let mut timer = CallTimer::new();
        assert!(!timer.reset());
    }

    #[test]
    fn test_call_timer_serialization() {
        let mut timer = CallTimer::new();
        timer.start(PlayerId::new(3));
        timer.tick(Duration::from_millis(1_500));

        let json = serde_json::to_string(&timer).unwrap();
        let deserialized: CallTimer = serde_json::from_str(&json).unwrap();
        assert_eq!(timer, deserialized);
    }
}
