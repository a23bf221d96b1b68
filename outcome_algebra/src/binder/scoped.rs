//! Spawned work tied to the lifetime of the binder block that awaits it.
//!
//! A plain `tokio::task::JoinHandle` detaches its task when dropped, so
//! cancelling an async binder block would leave spawned work running.
//! [`ScopedTask`] aborts the task instead.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use super::Fault;
use crate::Outcome;

/// Handle to work spawned with [`spawn_scoped`].
///
/// Awaiting it yields `Success` with the task's output, or `Failure` with a
/// [`Fault`] when the task panicked or was cancelled. Dropping it before
/// completion aborts the task.
#[derive(Debug)]
#[must_use = "dropping a scoped task aborts it"]
pub struct ScopedTask<T> {
    handle: JoinHandle<T>,
}

/// Spawn `future` on the current tokio runtime, aborting it when the
/// returned handle is dropped.
///
/// # Panics
///
/// Panics when called outside a tokio runtime, as `tokio::spawn` does.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Extract, Fault, Outcome, binding_async, spawn_scoped};
///
/// # fn main() -> std::io::Result<()> {
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let total: Outcome<Fault, i32> = runtime.block_on(binding_async(async {
///     let a = spawn_scoped(async { 1 }).await.extract()?;
///     let b = spawn_scoped(async { 2 }).await.extract()?;
///     Ok::<_, Fault>(a + b)
/// }));
/// assert_eq!(total, Outcome::success(3));
/// # Ok(())
/// # }
/// ```
pub fn spawn_scoped<F>(future: F) -> ScopedTask<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    ScopedTask {
        handle: tokio::spawn(future),
    }
}

impl<T> ScopedTask<T> {
    /// Returns `true` once the spawned task has stopped running.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

fn fault_from_join_error(error: JoinError) -> Fault {
    match error.try_into_panic() {
        Ok(payload) => Fault::from_payload(payload.as_ref()),
        Err(cancelled) => Fault::new(cancelled.to_string()),
    }
}

impl<T> Future for ScopedTask<T> {
    type Output = Outcome<Fault, T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle).poll(cx).map(|joined| {
            Outcome::from(joined).map_error(|error| {
                let fault = fault_from_join_error(error);
                debug!(message = fault.message(), "scoped task ended with a fault");
                fault
            })
        })
    }
}

impl<T> Drop for ScopedTask<T> {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("aborting scoped task dropped before completion");
            self.handle.abort();
        }
    }
}
