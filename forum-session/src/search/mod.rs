//! Debounced search input.
//!
//! Search-as-you-type must not hit the backend per keystroke. Each
//! submission waits out a fixed delay and is dropped if a newer submission
//! arrives meanwhile, so only the final query of a burst reaches the
//! search endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::sleep;

/// Delay applied to search input before a query is forwarded.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Latest-wins debouncer.
///
/// Every [`Debouncer::debounce`] call bumps a generation counter, sleeps
/// the configured delay, and yields the query only if no later call bumped
/// the counter again.
pub struct Debouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    /// Submit a query. Resolves to `Some(query)` if it survived the delay,
    /// `None` if a newer submission superseded it.
    pub async fn debounce(&self, query: impl Into<String>) -> Option<String> {
        let query = query.into();
        let submitted = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        sleep(self.delay).await;

        if self.generation.load(Ordering::SeqCst) == submitted {
            Some(query)
        } else {
            None
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_lone_submission_survives() {
        let debouncer = Debouncer::default();
        assert_eq!(debouncer.debounce("exam").await, Some("exam".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_submission_is_dropped() {
        let debouncer = Debouncer::default();

        let (first, second) = tokio::join!(debouncer.debounce("ex"), debouncer.debounce("exam"));

        assert_eq!(first, None);
        assert_eq!(second, Some("exam".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_submissions_both_survive() {
        let debouncer = Debouncer::default();

        assert_eq!(debouncer.debounce("exam").await, Some("exam".to_string()));
        assert_eq!(debouncer.debounce("hostel").await, Some("hostel".to_string()));
    }
}
