use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PollError<E> {
    /// The retry budget ran out before the operation produced a stopping result.
    #[error("poller reached the maximum number of retries: {0}")]
    MaxRetries(u32),

    /// The time budget ran out before the operation produced a stopping result.
    #[error("poller reached the timeout: {0:?}")]
    Timeout(Duration),

    /// The operation itself failed. The error is passed through as-is.
    #[error(transparent)]
    Operation(E),
}

impl<E> PollError<E> {
    pub fn is_max_retries(&self) -> bool {
        matches!(self, PollError::MaxRetries(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PollError::Timeout(_))
    }

    /// Returns the operation's error, or `None` if the poller gave up on its own.
    pub fn into_operation(self) -> Option<E> {
        match self {
            PollError::Operation(e) => Some(e),
            PollError::MaxRetries(_) | PollError::Timeout(_) => None,
        }
    }
}
