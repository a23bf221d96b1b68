//! Layer error mapping into [`SaveUserError`].

use crate::LayerError;

use super::{
    ConnectionLost, MissingField, PersistenceError, SaveUserError, UserLayerError,
    ValidationError,
};

impl LayerError<SaveUserError> for PersistenceError {
    fn into_member(self) -> Result<SaveUserError, Self> {
        match self {
            Self::DuplicateEntity(kind) => Ok(kind.into()),
            foreign @ Self::ConnectionLost(_) => Err(foreign),
        }
    }

    fn translate(self) -> SaveUserError {
        match self {
            Self::DuplicateEntity(kind) => kind.into(),
            Self::ConnectionLost(ConnectionLost) => SaveUserError::CannotPersist,
        }
    }
}

impl LayerError<SaveUserError> for ValidationError {
    fn into_member(self) -> Result<SaveUserError, Self> {
        match self {
            Self::InvalidName(kind) => Ok(kind.into()),
            foreign @ Self::MissingField(_) => Err(foreign),
        }
    }

    fn translate(self) -> SaveUserError {
        match self {
            Self::InvalidName(kind) => kind.into(),
            Self::MissingField(MissingField { .. }) => SaveUserError::CannotPersist,
        }
    }
}

impl LayerError<SaveUserError> for UserLayerError {
    fn into_member(self) -> Result<SaveUserError, Self> {
        match self {
            Self::UseCase(error) => Ok(error),
            Self::Persistence(error) => {
                LayerError::<SaveUserError>::into_member(error).map_err(Self::Persistence)
            }
            Self::Validation(error) => {
                LayerError::<SaveUserError>::into_member(error).map_err(Self::Validation)
            }
        }
    }

    fn translate(self) -> SaveUserError {
        match self {
            Self::UseCase(error) => error,
            Self::Persistence(error) => LayerError::<SaveUserError>::translate(error),
            Self::Validation(error) => LayerError::<SaveUserError>::translate(error),
        }
    }
}
