//! Trailing-edge debouncing of search input.
//!
//! [`Debouncer`] is a plain state machine: `pending_value` plus
//! `pending_deadline`. Callers feed it values with the current time and poll it
//! when the deadline has passed; it owns no timer, so the event loop decides how
//! to sleep (see [`Store::next`](crate::app::Store::next)).

use std::time::Duration;
use tokio::time::Instant;

/// Default quiet period before a value is committed.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Collapses a burst of values into the last one, released after `delay` of
/// quiet.
///
/// # Examples
///
/// ```
/// use rickdex::app::Debouncer;
/// use std::time::Duration;
/// use tokio::time::Instant;
///
/// let start = Instant::now();
/// let mut debouncer = Debouncer::new(Duration::from_millis(500));
/// debouncer.push("r", start);
/// debouncer.push("ri", start + Duration::from_millis(100));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(599)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(600)), Some("ri"));
/// assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending_value: Option<T>,
    pending_deadline: Option<Instant>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_value: None,
            pending_deadline: None,
        }
    }

    /// Records a new value, replacing any pending one and restarting the window.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending_value = Some(value);
        self.pending_deadline = Some(now + self.delay);
    }

    /// Releases the pending value once its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending_deadline {
            Some(deadline) if now >= deadline => {
                self.pending_deadline = None;
                self.pending_value.take()
            }
            _ => None,
        }
    }

    /// Deadline of the pending value, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.pending_deadline
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending_deadline.is_some()
    }

    /// Drops the pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending_value = None;
        self.pending_deadline = None;
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
