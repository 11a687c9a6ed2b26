//! Quiet-period coalescing for rapid input events.
//!
//! Order-history search fires once per keystroke in the presentation layer;
//! a [`Debouncer`] coalesces those into a single query after a quiet period.
//! There are no cancellation semantics: whatever value was submitted last is
//! the one delivered.

use std::time::{Duration, Instant};

/// Coalesces a stream of submitted values into the latest one, delivered
/// only after no new value has arrived for the configured quiet period.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Submit a new value, replacing any pending one and restarting the
    /// quiet period.
    pub fn submit(&mut self, value: T) {
        self.pending = Some((Instant::now(), value));
    }

    /// Take the pending value if the quiet period has elapsed since the last
    /// submission. Returns `None` while input is still settling or nothing
    /// is pending.
    pub fn poll(&mut self) -> Option<T> {
        match &self.pending {
            Some((at, _)) if at.elapsed() >= self.quiet => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }

    /// Whether a value is waiting for the quiet period to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_empty() {
        let mut debouncer: Debouncer<String> = Debouncer::new(Duration::from_millis(10));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(), None);
    }

    #[test]
    fn test_holds_until_quiet_period_elapses() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        debouncer.submit("ni");
        assert_eq!(debouncer.poll(), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_delivers_latest_value_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(5));
        debouncer.submit("ni");
        debouncer.submit("nile");
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(debouncer.poll(), Some("nile"));
        // Delivered values are not repeated.
        assert_eq!(debouncer.poll(), None);
    }

    #[test]
    fn test_resubmission_restarts_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(40));
        debouncer.submit("ni");
        std::thread::sleep(Duration::from_millis(20));
        debouncer.submit("nile");
        std::thread::sleep(Duration::from_millis(25));
        // Only 25ms since the second submission: still settling.
        assert_eq!(debouncer.poll(), None);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(debouncer.poll(), Some("nile"));
    }
}
