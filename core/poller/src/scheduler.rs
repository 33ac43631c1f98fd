use std::time::Duration;

use async_trait::async_trait;

/// Defers the next polling attempt without blocking the thread.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Resolve once at least `duration` has passed. A zero duration should still yield to the
    /// runtime once, so back-to-back attempts never run as one uninterrupted loop.
    async fn delay(&self, duration: Duration);
}

/// Schedules attempts on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        if duration.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_sleeps_for_duration() {
        let start = tokio::time::Instant::now();
        TokioScheduler.delay(Duration::from_millis(3000)).await;
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_zero_duration_only_yields() {
        let start = tokio::time::Instant::now();
        TokioScheduler.delay(Duration::ZERO).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
