//! Worked error taxonomy for a "save user" use case.
//!
//! Three layers meet here. The validation layer reports
//! [`ValidationError`], the persistence layer reports [`PersistenceError`],
//! and the use case exposes [`SaveUserError`] to its callers. Two concrete
//! kinds belong to more than one group:
//!
//! | kind                | validation | persistence | use case |
//! |---------------------|:----------:|:-----------:|:--------:|
//! | [`InvalidName`]     | yes        |             | yes      |
//! | [`MissingField`]    | yes        |             |          |
//! | [`DuplicateEntity`] |            | yes         | yes      |
//! | [`ConnectionLost`]  |            | yes         |          |
//!
//! Kinds outside the use-case group fall back to
//! [`SaveUserError::CannotPersist`] when they cross into it.

mod mapping;
mod use_case;

use std::fmt;

use thiserror::Error;

pub use use_case::{PersistUser, SaveUser, ValidateUser};

/// Placeholder entity moved between the layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    name: String,
}

impl User {
    /// Create a user called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The user's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user '{}'", self.name)
    }
}

/// The user already exists in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{user} already exists")]
pub struct DuplicateEntity {
    /// User that clashed with an existing record.
    pub user: User,
}

impl DuplicateEntity {
    /// Construct the kind for `user`.
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self { user }
    }
}

/// The store could not be reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("connection to the user store was lost")]
pub struct ConnectionLost;

/// The user's name breaks the naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{user} has an invalid name")]
pub struct InvalidName {
    /// User carrying the rejected name.
    pub user: User,
}

impl InvalidName {
    /// Construct the kind for `user`.
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self { user }
    }
}

/// A mandatory field was left empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{user} is missing mandatory field '{field}'")]
pub struct MissingField {
    /// User with the incomplete record.
    pub user: User,
    /// Name of the missing field.
    pub field: String,
}

impl MissingField {
    /// Construct the kind for `user` and the missing `field`.
    #[must_use]
    pub fn new(user: User, field: impl Into<String>) -> Self {
        Self {
            user,
            field: field.into(),
        }
    }
}

/// Errors produced by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersistenceError {
    /// See [`DuplicateEntity`].
    #[error(transparent)]
    DuplicateEntity(#[from] DuplicateEntity),
    /// See [`ConnectionLost`].
    #[error(transparent)]
    ConnectionLost(#[from] ConnectionLost),
}

/// Errors produced by the validation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// See [`InvalidName`].
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
    /// See [`MissingField`].
    #[error(transparent)]
    MissingField(#[from] MissingField),
}

/// Errors the save-user use case reports to its callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SaveUserError {
    /// See [`DuplicateEntity`].
    #[error(transparent)]
    DuplicateEntity(#[from] DuplicateEntity),
    /// See [`InvalidName`].
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
    /// Fallback for every lower-layer kind the use case does not expose.
    #[error("user could not be saved")]
    CannotPersist,
}

/// Union of every error group that can surface inside the use case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserLayerError {
    /// Raised by the persistence layer.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    /// Raised by the validation layer.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Raised by the use case itself.
    #[error(transparent)]
    UseCase(#[from] SaveUserError),
}
