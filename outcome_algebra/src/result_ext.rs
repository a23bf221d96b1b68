//! Extensions for crossing layer boundaries from plain `Result` values.
//!
//! Lower layers often return `Result` rather than [`crate::Outcome`]. These
//! helpers reduce repetitive `.map_err(map_layer_error)` calls at the point
//! where such a value is handed to the calling layer.
//!
//! # Examples
//!
//! ```
//! use outcome_algebra::LayerResultExt;
//! use outcome_algebra::users::{ConnectionLost, PersistenceError, SaveUserError, User};
//!
//! fn persist(_user: User) -> Result<User, PersistenceError> {
//!     Err(PersistenceError::ConnectionLost(ConnectionLost))
//! }
//!
//! let saved: Result<User, SaveUserError> = persist(User::new("ada")).into_layer();
//! assert_eq!(saved, Err(SaveUserError::CannotPersist));
//! ```

use crate::{LayerError, map_layer_error};

/// Map the error of a `Result<T, E>` into the caller's layer error type.
pub trait LayerResultExt<T, E> {
    /// Convert `Result<T, E>` into `Result<T, Target>` through
    /// [`LayerError`].
    ///
    /// # Errors
    ///
    /// Propagates the original error after translation into `Target`.
    fn into_layer<Target>(self) -> Result<T, Target>
    where
        E: LayerError<Target>;
}

impl<T, E> LayerResultExt<T, E> for Result<T, E> {
    fn into_layer<Target>(self) -> Result<T, Target>
    where
        E: LayerError<Target>,
    {
        self.map_err(map_layer_error)
    }
}
