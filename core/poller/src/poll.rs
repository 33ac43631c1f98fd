use std::future::Future;
use std::time::Duration;

use crate::{PollError, Poller};

/// Polls asynchronously until the given condition yields a value, or a timeout is reached.
///
/// The condition is re-evaluated after `delay` for as long as it returns `Ok(None)`. If the
/// condition returns an error, the error is propagated and the condition is not re-evaluated.
///
/// Returns `PollError::Timeout` if the timeout is reached.
pub async fn poll_until<F, Fut, R, E>(
    condition: F,
    timeout: Duration,
    delay: Duration,
) -> Result<R, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<R>, E>>,
{
    let result = Poller::new(condition)
        .continue_polling(|result: &Option<R>| result.is_none())
        .timeout(timeout)
        .interval(delay)
        .poll()
        .await?;

    match result {
        Some(result) => Ok(result),
        None => unreachable!("poller only stops polling once the condition yields a value"),
    }
}
