//! Host-environment collaborators.
//!
//! The engine is headless; anything that touches the platform is
//! injected behind a trait. [`WakeLock`] abstracts the host's
//! keep-screen-awake facility, and [`MatchObserver`] receives every
//! event the controller emits so a presentation layer can repaint
//! incrementally instead of polling.

use crate::core::{MatchEvent, MatchState};

/// Keeps the host display awake while something is actively timing.
///
/// The controller calls `acquire` and `release` only on transitions:
/// a lock already held is never re-acquired. Implementations do not
/// need to be idempotent.
pub trait WakeLock {
    /// Prevent the display from sleeping.
    fn acquire(&mut self);

    /// Allow the display to sleep again.
    fn release(&mut self);
}

/// A wake lock that does nothing. The default for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopWakeLock;

impl WakeLock for NoopWakeLock {
    fn acquire(&mut self) {}

    fn release(&mut self) {}
}

/// Receives every event emitted by an applied command.
///
/// Observers are notified in registration order, once per event, after
/// the whole command has applied; the state passed alongside is the
/// post-command state.
pub trait MatchObserver {
    /// Called once per emitted event.
    fn on_event(&mut self, event: &MatchEvent, state: &MatchState);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_wake_lock() {
        let mut lock = NoopWakeLock;
        lock.acquire();
        lock.release();
    }
}
