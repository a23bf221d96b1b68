//! The save-user use case and the ports it depends on.

use tracing::debug;

use crate::{Extract, Outcome, Validation, binding};

use super::{PersistenceError, SaveUserError, User, UserLayerError, ValidationError};

/// Port for the validation layer.
pub trait ValidateUser {
    /// Check `user`, returning the validated user or the first problem.
    fn validate(&self, user: User) -> Validation<ValidationError, User>;
}

/// Port for the persistence layer.
pub trait PersistUser {
    /// Store `user`, returning the stored user.
    fn persist(&self, user: User) -> Outcome<PersistenceError, User>;
}

impl<F> ValidateUser for F
where
    F: Fn(User) -> Validation<ValidationError, User>,
{
    fn validate(&self, user: User) -> Validation<ValidationError, User> {
        self(user)
    }
}

impl<F> PersistUser for F
where
    F: Fn(User) -> Outcome<PersistenceError, User>,
{
    fn persist(&self, user: User) -> Outcome<PersistenceError, User> {
        self(user)
    }
}

/// Validates and stores a user, reporting [`SaveUserError`] to callers.
///
/// # Examples
///
/// ```
/// use outcome_algebra::users::{
///     ConnectionLost, PersistenceError, SaveUser, SaveUserError, User, ValidationError,
/// };
/// use outcome_algebra::{Outcome, Validation};
///
/// let use_case = SaveUser::new(
///     |user: User| Validation::<ValidationError, User>::valid(user),
///     |_user: User| Outcome::<PersistenceError, User>::failure(ConnectionLost.into()),
/// );
/// assert_eq!(
///     use_case.save(User::new("ada")),
///     Outcome::failure(SaveUserError::CannotPersist)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SaveUser<V, P> {
    validator: V,
    repository: P,
}

impl<V, P> SaveUser<V, P>
where
    V: ValidateUser,
    P: PersistUser,
{
    /// Wire the use case to its validation and persistence ports.
    #[must_use]
    pub const fn new(validator: V, repository: P) -> Self {
        Self {
            validator,
            repository,
        }
    }

    /// Validate, persist, and return the created user.
    ///
    /// Lower-layer errors are translated exactly once, when the result
    /// leaves the use case.
    pub fn save(&self, user: User) -> Outcome<SaveUserError, User> {
        debug!(user = user.name(), "saving user");
        binding(|| {
            let validated = self
                .validator
                .validate(user)
                .to_outcome()
                .map_error(UserLayerError::from)
                .extract()?;
            let saved = self
                .repository
                .persist(validated)
                .map_error(UserLayerError::from)
                .extract()?;
            created(saved).map_error(UserLayerError::from).extract()
        })
        .cross_layer()
    }
}

fn created(user: User) -> Outcome<SaveUserError, User> {
    Outcome::success(user)
}
