use std::future::Future;

/// The work a poller invokes on every attempt.
///
/// Implemented for any `FnMut() -> impl Future<Output = Result<T, E>>`. Wrap synchronous closures
/// in [`SyncOperation`].
pub trait Operation {
    type Output;
    type Error;

    fn invoke(&mut self) -> impl Future<Output = Result<Self::Output, Self::Error>>;
}

impl<F, Fut, T, E> Operation for F
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    type Output = T;
    type Error = E;

    fn invoke(&mut self) -> impl Future<Output = Result<T, E>> {
        self()
    }
}

/// Adapts a synchronous closure into an [`Operation`].
pub struct SyncOperation<F>(pub F);

impl<F, T, E> Operation for SyncOperation<F>
where
    F: FnMut() -> Result<T, E>,
{
    type Output = T;
    type Error = E;

    fn invoke(&mut self) -> impl Future<Output = Result<T, E>> {
        std::future::ready((self.0)())
    }
}

/// Decides, from the latest result, whether another attempt should be scheduled.
pub trait ContinuePolling<T> {
    fn should_continue(&mut self, result: &T) -> bool;
}

impl<T, F> ContinuePolling<T> for F
where
    F: FnMut(&T) -> bool,
{
    fn should_continue(&mut self, result: &T) -> bool {
        self(result)
    }
}

/// Keeps polling until a budget runs out or the operation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysContinue;

impl<T> ContinuePolling<T> for AlwaysContinue {
    fn should_continue(&mut self, _result: &T) -> bool {
        true
    }
}
