use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use super::RepositoryError;

// ============================================================================
// Pending - single-shot handle for one repository call
// ============================================================================
//
// The call runs as its own tokio task and the handle resolves exactly once.
// Dropping the handle detaches the task; the call still runs to completion.
//
// ============================================================================

#[derive(Debug)]
#[must_use = "a repository call reports its outcome only through the handle"]
pub struct Pending<T> {
    handle: JoinHandle<Result<T, RepositoryError>>,
}

impl<T: Send + 'static> Pending<T> {
    /// Start `call` on the current tokio runtime
    pub fn spawn<F>(call: F) -> Self
    where
        F: Future<Output = Result<T, RepositoryError>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(call),
        }
    }
}

impl<T> Future for Pending<T> {
    type Output = Result<T, RepositoryError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(join_error)) => Poll::Ready(Err(RepositoryError::Task(join_error.to_string()))),
            Poll::Pending => Poll::Pending,
        }
    }
}
