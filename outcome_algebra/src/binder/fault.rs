//! Explicit capture of unexpected faults.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::debug;

use crate::Outcome;

/// An unexpected fault (a panic) converted into a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unexpected fault: {message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Build a fault from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Message carried by the original panic, when it had one.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());
        Self { message }
    }
}

/// Run `f`, converting a panic into `Failure(Fault)`.
///
/// This is the scoped capture callers place around fault-raising code
/// before its value enters a binder block. The panic hook still runs, so
/// the fault is reported the usual way as well.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Fault, Outcome, catch_fault};
///
/// let captured: Outcome<Fault, i32> = catch_fault(|| panic!("disk on fire"));
/// assert_eq!(captured.failure_value().map(|f| f.message().to_owned()),
///            Some("disk on fire".to_owned()));
/// ```
pub fn catch_fault<T, F>(f: F) -> Outcome<Fault, T>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_or_else(
        |payload| {
            let fault = Fault::from_payload(payload.as_ref());
            debug!(message = fault.message(), "captured fault as a failure");
            Outcome::failure(fault)
        },
        Outcome::success,
    )
}
