use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lightning_poller::{Scheduler, TokioScheduler};
use parking_lot::Mutex;

/// A scheduler that records every requested delay before waiting on the tokio clock.
///
/// Clones share the same record, so a test can hand one clone to the poller and inspect another.
#[derive(Debug, Clone, Default)]
pub struct TrackingScheduler {
    calls: Arc<Mutex<Vec<Duration>>>,
}

impl TrackingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The delays requested so far, in order.
    pub fn calls(&self) -> Vec<Duration> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Scheduler for TrackingScheduler {
    async fn delay(&self, duration: Duration) {
        self.calls.lock().push(duration);
        TokioScheduler.delay(duration).await;
    }
}

/// A scheduler that ignores the requested delay and only yields to the runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantScheduler;

#[async_trait]
impl Scheduler for InstantScheduler {
    async fn delay(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
