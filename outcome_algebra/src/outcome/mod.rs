//! Short-circuiting two-outcome container.
//!
//! [`Outcome`] is a plain value: it never holds both payloads or neither,
//! and every operation consumes or borrows it without interior mutation.
//! It converts losslessly to and from [`Result`] so that the `?` operator
//! can drive short-circuiting inside [`crate::binding`] blocks.

use crate::{LayerError, map_layer_error};

/// Either a `Failure(E)` or a `Success(T)`.
///
/// # Examples
///
/// ```
/// use outcome_algebra::Outcome;
///
/// let parsed: Outcome<String, u8> = Outcome::success(4);
/// let doubled = parsed.bind(|n| {
///     n.checked_mul(2)
///         .map_or_else(|| Outcome::failure("overflow".to_owned()), Outcome::success)
/// });
/// assert_eq!(doubled.success_value(), Some(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "an outcome may carry a failure that should be handled"]
pub enum Outcome<E, T> {
    /// The computation failed with a domain error.
    Failure(E),
    /// The computation produced a value.
    Success(T),
}

impl<E, T> Outcome<E, T> {
    /// Wrap `value` as a success.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap `error` as a failure.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Sequence a dependent computation.
    ///
    /// A failure is returned unchanged and `f` is never called. For any
    /// `x`, `Outcome::success(x).bind(f) == f(x)` and
    /// `outcome.bind(Outcome::success) == outcome`.
    pub fn bind<T2, F>(self, f: F) -> Outcome<E, T2>
    where
        F: FnOnce(T) -> Outcome<E, T2>,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => f(value),
        }
    }

    /// Eliminate the outcome, evaluating exactly one of the two branches.
    pub fn fold<R, F, S>(self, on_failure: F, on_success: S) -> R
    where
        F: FnOnce(E) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    /// Transform the failure payload; successes pass through untouched.
    pub fn map_error<E2, F>(self, f: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(f(error)),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Transform the success payload; failures pass through untouched.
    pub fn map_value<T2, F>(self, f: F) -> Outcome<E, T2>
    where
        F: FnOnce(T) -> T2,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(f(value)),
        }
    }

    /// Turn a failure back into a success payload.
    ///
    /// ```
    /// use outcome_algebra::Outcome;
    ///
    /// let raw: Outcome<String, i32> = Outcome::failure("1".to_owned());
    /// let recovered = raw.recover(|text| text.parse().unwrap_or(0));
    /// assert_eq!(recovered, 1);
    /// ```
    pub fn recover<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.fold(f, |value| value)
    }

    /// The success payload, if any.
    #[must_use]
    pub fn success_value(self) -> Option<T> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// The failure payload, if any.
    #[must_use]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Borrow both payloads.
    pub const fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Convert into a [`Result`] so `?` can be applied.
    ///
    /// # Errors
    ///
    /// Returns the failure payload when the outcome is a failure.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Translate the failure payload into the caller's layer error type.
    ///
    /// This is the single mapping step applied when a value produced by a
    /// lower layer is handed back across a layer boundary; see
    /// [`map_layer_error`].
    pub fn cross_layer<Target>(self) -> Outcome<Target, T>
    where
        E: LayerError<Target>,
    {
        self.map_error(map_layer_error)
    }
}

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    fn from(outcome: Outcome<E, T>) -> Self {
        match outcome {
            Outcome::Failure(error) => Err(error),
            Outcome::Success(value) => Ok(value),
        }
    }
}
