use std::time::Instant;

use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};

/// Enforces a minimum interval between calls. PA-API allows one request
/// per second for new associate accounts.
pub struct Pacer {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl Pacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    pub async fn wait(&self) {
        let mut last = self.last_call.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!("Pacing request, waiting {:?}", wait_time);
                sleep(wait_time).await;
            }
        }
        *last = Some(Instant::now());
    }
}
