//! Presence/absence container.

use crate::{Outcome, Validation};

/// Either `Absent` or `Present(T)`.
///
/// Converting into an [`Outcome`] or [`Validation`] takes an error
/// supplier that is only called for [`Optional::Absent`].
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Optional, Outcome};
///
/// let port: Optional<u16> = Optional::absent();
/// let resolved = port.to_outcome(|| "port is not configured");
/// assert_eq!(resolved, Outcome::failure("port is not configured"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// A value is present.
    Present(T),
}

impl<T> Optional<T> {
    /// Wrap a present value.
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// The empty container.
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` for [`Optional::Present`].
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Transform the present value.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Absent => Optional::Absent,
            Self::Present(value) => Optional::Present(f(value)),
        }
    }

    /// `Present(v)` becomes `Success(v)`; `Absent` becomes
    /// `Failure(supply_error())`.
    ///
    /// `supply_error` is never invoked when a value is present.
    pub fn to_outcome<E, F>(self, supply_error: F) -> Outcome<E, T>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Absent => Outcome::Failure(supply_error()),
            Self::Present(value) => Outcome::Success(value),
        }
    }

    /// `Present(v)` becomes `Valid(v)`; `Absent` becomes
    /// `Invalid(supply_error())`.
    ///
    /// `supply_error` is never invoked when a value is present.
    pub fn to_validation<E, F>(self, supply_error: F) -> Validation<E, T>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Absent => Validation::Invalid(supply_error()),
            Self::Present(value) => Validation::Valid(value),
        }
    }

    /// Convert into the standard [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Absent => None,
            Optional::Present(value) => Some(value),
        }
    }
}
