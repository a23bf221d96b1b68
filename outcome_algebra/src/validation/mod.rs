//! Valid/invalid container with optional error accumulation.
//!
//! On its own a [`Validation`] behaves like [`Outcome`]: `bind` stops at the
//! first invalid value and a binder block short-circuits on it. Independent
//! checks can instead be combined with [`Validation::zip_with`] or collected
//! from an iterator, in which case every check runs and the errors are
//! merged through [`Accumulate`].

mod accumulated;

pub use accumulated::Accumulated;

use crate::Outcome;

/// Error types that can absorb a later error of the same type.
///
/// Implementations must keep both errors and preserve their order; the
/// receiver is always the earlier error.
pub trait Accumulate {
    /// Merge `later` into `self`.
    #[must_use]
    fn accumulate(self, later: Self) -> Self;
}

impl<E> Accumulate for Vec<E> {
    fn accumulate(mut self, later: Self) -> Self {
        self.extend(later);
        self
    }
}

/// Either `Invalid(E)` or `Valid(T)`.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Accumulated, Validation};
///
/// fn non_empty(field: &'static str, value: &str) -> Validation<Accumulated<String>, String> {
///     if value.is_empty() {
///         Validation::invalid(format!("{field} is empty")).accumulating()
///     } else {
///         Validation::valid(value.to_owned())
///     }
/// }
///
/// let form = non_empty("name", "").zip(non_empty("email", ""));
/// let errors = form.to_outcome().failure_value().map(|errs| errs.len());
/// assert_eq!(errors, Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "a validation may carry errors that should be reported"]
pub enum Validation<E, T> {
    /// The check failed.
    Invalid(E),
    /// The check passed and produced a value.
    Valid(T),
}

impl<E, T> Validation<E, T> {
    /// Wrap `value` as valid.
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Wrap `error` as invalid.
    pub const fn invalid(error: E) -> Self {
        Self::Invalid(error)
    }

    /// Returns `true` for [`Validation::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Short-circuiting sequencing: an invalid value is returned unchanged
    /// and `f` is not called.
    pub fn bind<T2, F>(self, f: F) -> Validation<E, T2>
    where
        F: FnOnce(T) -> Validation<E, T2>,
    {
        match self {
            Self::Invalid(error) => Validation::Invalid(error),
            Self::Valid(value) => f(value),
        }
    }

    /// Eliminate the validation, evaluating exactly one branch.
    pub fn fold<R, F, S>(self, on_invalid: F, on_valid: S) -> R
    where
        F: FnOnce(E) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Invalid(error) => on_invalid(error),
            Self::Valid(value) => on_valid(value),
        }
    }

    /// Transform the error payload.
    pub fn map_error<E2, F>(self, f: F) -> Validation<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Invalid(error) => Validation::Invalid(f(error)),
            Self::Valid(value) => Validation::Valid(value),
        }
    }

    /// Transform the valid payload.
    pub fn map_value<T2, F>(self, f: F) -> Validation<E, T2>
    where
        F: FnOnce(T) -> T2,
    {
        match self {
            Self::Invalid(error) => Validation::Invalid(error),
            Self::Valid(value) => Validation::Valid(f(value)),
        }
    }

    /// `Invalid(e)` becomes `Failure(e)`, `Valid(v)` becomes `Success(v)`.
    pub fn to_outcome(self) -> Outcome<E, T> {
        match self {
            Self::Invalid(error) => Outcome::Failure(error),
            Self::Valid(value) => Outcome::Success(value),
        }
    }

    /// Lift a single error into an [`Accumulated`] collection so the value
    /// can be combined with other accumulating validations.
    pub fn accumulating(self) -> Validation<Accumulated<E>, T> {
        self.map_error(Accumulated::single)
    }
}

impl<E: Accumulate, T> Validation<E, T> {
    /// Combine two independent validations.
    ///
    /// Both sides are already evaluated; when both are invalid the errors
    /// are accumulated with `self`'s error first.
    pub fn zip_with<U, R, F>(self, other: Validation<E, U>, f: F) -> Validation<E, R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Valid(left), Validation::Valid(right)) => Validation::Valid(f(left, right)),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.accumulate(right))
            }
            (Self::Invalid(error), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(error)) => Validation::Invalid(error),
        }
    }

    /// Pair two independent validations, accumulating their errors.
    pub fn zip<U>(self, other: Validation<E, U>) -> Validation<E, (T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }
}

impl<E, T> From<Outcome<E, T>> for Validation<E, T> {
    fn from(outcome: Outcome<E, T>) -> Self {
        outcome.fold(Self::Invalid, Self::Valid)
    }
}

impl<E, T> From<Validation<E, T>> for Outcome<E, T> {
    fn from(validation: Validation<E, T>) -> Self {
        validation.to_outcome()
    }
}

/// Collect every element, accumulating all errors in iteration order.
///
/// Unlike collecting into a `Result`, iteration does not stop at the first
/// invalid element.
impl<E: Accumulate, T> FromIterator<Validation<E, T>> for Validation<E, Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Validation<E, T>>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::Valid(Vec::new()), |acc, item| {
                acc.zip_with(item, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}
