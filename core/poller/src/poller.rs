use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::{
    AlwaysContinue,
    ContinuePolling,
    Operation,
    PollError,
    PollerConfig,
    Scheduler,
    SyncOperation,
    TokioScheduler,
};

/// Repeatedly invokes an operation until the continuation predicate says to stop, or until the
/// retry or time budget is exhausted.
///
/// ```ignore
/// let status = Poller::new(|| client.get_status())
///     .continue_polling(|status: &Status| !status.is_ready())
///     .max_retries(10)
///     .interval(Duration::from_millis(500))
///     .poll()
///     .await?;
/// ```
pub struct Poller<O, P = AlwaysContinue> {
    operation: O,
    continue_polling: P,
    config: PollerConfig,
    scheduler: Arc<dyn Scheduler>,
}

impl<O: Operation> Poller<O> {
    pub fn new(operation: O) -> Self {
        Self {
            operation,
            continue_polling: AlwaysContinue,
            config: PollerConfig::default(),
            scheduler: Arc::new(TokioScheduler),
        }
    }
}

impl<F, T, E> Poller<SyncOperation<F>>
where
    F: FnMut() -> Result<T, E>,
{
    /// Create a poller over a synchronous operation.
    pub fn from_sync(operation: F) -> Self {
        Self::new(SyncOperation(operation))
    }
}

impl<O: Operation, P> Poller<O, P> {
    /// Set the predicate that decides whether another attempt is made after a successful one.
    pub fn continue_polling<F>(self, continue_polling: F) -> Poller<O, F>
    where
        F: FnMut(&O::Output) -> bool,
    {
        Poller {
            operation: self.operation,
            continue_polling,
            config: self.config,
            scheduler: self.scheduler,
        }
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = Some(max_retries);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    /// Replace the retry budget, time budget and interval with the ones in `config`.
    pub fn with_config(mut self, config: PollerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_scheduler<S: Scheduler + 'static>(mut self, scheduler: S) -> Self {
        self.scheduler = Arc::new(scheduler);
        self
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }
}

impl<O, P> Poller<O, P>
where
    O: Operation,
    P: ContinuePolling<O::Output>,
{
    /// Run one polling session to completion.
    ///
    /// Before every attempt the retry budget is checked first, then the time budget, so when both
    /// are exhausted at once the result is [`PollError::MaxRetries`]. An operation error ends the
    /// session immediately and is returned as [`PollError::Operation`].
    pub async fn poll(&mut self) -> Result<O::Output, PollError<O::Error>> {
        let mut session = Session::start();
        loop {
            if let Some(error) = session.exhausted_budget(&self.config) {
                return Err(error);
            }

            let result = self
                .operation
                .invoke()
                .await
                .map_err(PollError::Operation)?;
            session.attempts += 1;

            if !self.continue_polling.should_continue(&result) {
                tracing::trace!("poller finished after {} attempts", session.attempts);
                return Ok(result);
            }

            tracing::trace!(
                "poller attempt {} not done, next attempt in {:?}",
                session.attempts,
                self.config.interval
            );
            self.scheduler.delay(self.config.interval).await;
        }
    }
}

/// Bookkeeping for a single call to [`Poller::poll`].
struct Session {
    attempts: u32,
    started_at: Instant,
}

impl Session {
    fn start() -> Self {
        Self {
            attempts: 0,
            started_at: Instant::now(),
        }
    }

    /// Returns the budget error that ends the session, if any. Retries are checked before time.
    fn exhausted_budget<E>(&self, config: &PollerConfig) -> Option<PollError<E>> {
        if let Some(max_retries) = config.max_retries {
            if self.attempts >= max_retries {
                tracing::debug!("poller reached max retries after {} attempts", self.attempts);
                return Some(PollError::MaxRetries(max_retries));
            }
        }

        if let Some(timeout) = config.timeout {
            let elapsed = self.started_at.elapsed();
            if elapsed > timeout {
                tracing::debug!(
                    "poller timed out after {} attempts ({:?} elapsed)",
                    self.attempts,
                    elapsed
                );
                return Some(PollError::Timeout(timeout));
            }
        }

        None
    }
}
