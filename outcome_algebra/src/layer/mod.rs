//! Translation of error values across architectural layers.
//!
//! Each layer owns a closed set of error kinds. A concrete kind may belong
//! to several groups at once (a duplicate entity is both a persistence error
//! and a use-case error), so crossing a boundary follows three steps:
//!
//! 1. a kind that already satisfies the target error type passes through
//!    unchanged ([`LayerError::into_member`]);
//! 2. any other value is dispatched to the mapper of its declared group;
//! 3. that mapper is an exhaustive match ending in the group's designated
//!    fallback kind ([`LayerError::translate`]).
//!
//! Implementations must match every kind explicitly, with no wildcard arm,
//! so that adding a kind fails to compile until each dispatch site has been
//! revisited.

use tracing::debug;

/// An error group that can be translated into the `Target` error type.
pub trait LayerError<Target>: Sized {
    /// Return the value as a `Target` when its kind already belongs to the
    /// target capability, or hand it back untouched.
    ///
    /// # Errors
    ///
    /// Returns `self` when the kind is not a member of `Target`.
    fn into_member(self) -> Result<Target, Self>;

    /// Translate any kind into `Target`.
    ///
    /// Kinds that are not members of `Target` map to the group's designated
    /// fallback kind.
    fn translate(self) -> Target;
}

/// Map `error` into the calling layer's error type.
///
/// Never fails: the mapping is total over the closed set of kinds.
///
/// # Examples
///
/// ```
/// use outcome_algebra::map_layer_error;
/// use outcome_algebra::users::{
///     MissingField, SaveUserError, User, UserLayerError, ValidationError,
/// };
///
/// let user = User::new("ada");
/// let missing = UserLayerError::Validation(ValidationError::MissingField(
///     MissingField::new(user, "email"),
/// ));
/// let mapped: SaveUserError = map_layer_error(missing);
/// assert_eq!(mapped, SaveUserError::CannotPersist);
/// ```
pub fn map_layer_error<Source, Target>(error: Source) -> Target
where
    Source: LayerError<Target>,
{
    match error.into_member() {
        Ok(member) => {
            debug!(
                source = std::any::type_name::<Source>(),
                "layer error already satisfies the target type"
            );
            member
        }
        Err(foreign) => {
            debug!(
                source = std::any::type_name::<Source>(),
                target = std::any::type_name::<Target>(),
                "translating layer error"
            );
            foreign.translate()
        }
    }
}

/// Every type trivially satisfies itself.
impl<T> LayerError<T> for T {
    fn into_member(self) -> Result<T, Self> {
        Ok(self)
    }

    fn translate(self) -> T {
        self
    }
}
