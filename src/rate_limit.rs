use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Minimum-interval gate awaited before every request.
///
/// Calls to [`RateLimiter::acquire`] are serialised; each returns no earlier
/// than `interval` after the previous one returned.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: Mutex::new(None),
        }
    }

    /// Wait until a request may be issued and claim the slot.
    pub(crate) async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let ready_at = previous + self.interval;
            if ready_at > Instant::now() {
                debug!(wait_ms = (ready_at - Instant::now()).as_millis() as u64, "pacing request");
                sleep_until(ready_at).await;
            }
        }
        *last = Some(Instant::now());
    }
}
