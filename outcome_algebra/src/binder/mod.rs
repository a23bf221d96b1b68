//! Sequencing protocol threading several containers through one block.
//!
//! A binder block is an ordinary closure (or `async` block) returning
//! `Result<R, E>`. Each container is normalised to the block's error type
//! with `map_error`/`to_outcome` and then extracted with
//! [`Extract::extract`] followed by `?`. The first failing extraction ends
//! the block and later extractions are never evaluated.
//!
//! The binder performs no fault interception: a panic raised in the block
//! unwinds through [`binding`] untouched. Wrap fault-raising calls in
//! [`catch_fault`] to turn them into domain failures before extraction.

mod fault;
#[cfg(feature = "tokio")]
mod scoped;

use std::future::Future;

use tracing::debug;

pub use fault::{Fault, catch_fault};
#[cfg(feature = "tokio")]
pub use scoped::{ScopedTask, spawn_scoped};

use crate::{Outcome, Validation};

/// Containers whose payload can be pulled out inside a binder block.
pub trait Extract<E, T> {
    /// Yield the payload, or the error that should end the block.
    ///
    /// # Errors
    ///
    /// Returns the container's failure payload so that `?` can
    /// short-circuit the surrounding block.
    fn extract(self) -> Result<T, E>;
}

impl<E, T> Extract<E, T> for Outcome<E, T> {
    fn extract(self) -> Result<T, E> {
        self.into_result()
    }
}

impl<E, T> Extract<E, T> for Validation<E, T> {
    fn extract(self) -> Result<T, E> {
        self.to_outcome().into_result()
    }
}

impl<E, T> Extract<E, T> for Result<T, E> {
    fn extract(self) -> Result<T, E> {
        self
    }
}

/// Run a synchronous binder block.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Extract, Outcome, binding};
///
/// let one: Outcome<String, i32> = Outcome::failure("x".to_owned());
/// let two: Outcome<String, i32> = Outcome::success(2);
///
/// let mut later_ran = false;
/// let total: Outcome<String, i32> = binding(|| {
///     let a = one.extract()?;
///     later_ran = true;
///     let b = two.extract()?;
///     Ok(a + b)
/// });
///
/// assert_eq!(total, Outcome::failure("x".to_owned()));
/// assert!(!later_ran);
/// ```
pub fn binding<E, R, F>(block: F) -> Outcome<E, R>
where
    F: FnOnce() -> Result<R, E>,
{
    let outcome = Outcome::from(block());
    if outcome.is_failure() {
        debug!("binder block short-circuited on a failure");
    }
    outcome
}

/// Run an asynchronous binder block.
///
/// Suspension points inside the block keep the same ordering and
/// short-circuit guarantees as [`binding`]. Dropping the returned future
/// cancels the block and every future it awaits inline. A cancelled block
/// produces no [`Outcome`] at all.
///
/// Work spawned onto the runtime is not owned by the block: dropping a
/// `tokio::task::JoinHandle` detaches its task. Spawn such work with
/// `spawn_scoped` (behind the `tokio` feature) so that cancelling the block
/// aborts it too.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Extract, Outcome, binding_async};
///
/// async fn fetch(n: i32) -> Outcome<String, i32> {
///     Outcome::success(n)
/// }
///
/// # fn main() -> std::io::Result<()> {
/// # let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// # runtime.block_on(async {
/// let total: Outcome<String, i32> = binding_async(async {
///     let a = fetch(1).await.extract()?;
///     let b = fetch(2).await.extract()?;
///     Ok::<_, String>(a + b)
/// })
/// .await;
/// assert_eq!(total, Outcome::success(3));
/// # });
/// # Ok(())
/// # }
/// ```
pub async fn binding_async<E, R, F>(block: F) -> Outcome<E, R>
where
    F: Future<Output = Result<R, E>>,
{
    let outcome = Outcome::from(block.await);
    if outcome.is_failure() {
        debug!("async binder block short-circuited on a failure");
    }
    outcome
}
