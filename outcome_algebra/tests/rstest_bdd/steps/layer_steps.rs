//! Steps translating lower-layer errors into the save-user use case.

use crate::fixtures::LayerContext;
use anyhow::{Result, anyhow, ensure};
use outcome_algebra::map_layer_error;
use outcome_algebra::users::{
    ConnectionLost, DuplicateEntity, InvalidName, MissingField, PersistenceError, SaveUserError,
    User, UserLayerError, ValidationError,
};
use rstest_bdd_macros::{given, then, when};

fn raise(layer_context: &LayerContext, error: impl Into<UserLayerError>) -> Result<()> {
    ensure!(
        layer_context.raised.is_empty(),
        "an error was already raised in this scenario"
    );
    layer_context.raised.set(error.into());
    Ok(())
}

#[given("the validation layer rejects the name of {name}")]
fn invalid_name(layer_context: &LayerContext, name: String) -> Result<()> {
    let error = ValidationError::from(InvalidName::new(User::new(name)));
    raise(layer_context, error)
}

#[given("the validation layer finds {name} without {field}")]
fn missing_field(layer_context: &LayerContext, name: String, field: String) -> Result<()> {
    let error =
        ValidationError::from(MissingField::new(User::new(name), field));
    raise(layer_context, error)
}

#[given("the persistence layer already stores {name}")]
fn duplicate_entity(layer_context: &LayerContext, name: String) -> Result<()> {
    let error =
        PersistenceError::from(DuplicateEntity::new(User::new(name)));
    raise(layer_context, error)
}

#[given("the persistence layer loses its connection")]
fn connection_lost(layer_context: &LayerContext) -> Result<()> {
    raise(
        layer_context,
        PersistenceError::from(ConnectionLost),
    )
}

#[given("the use case itself reports {name} as a duplicate")]
fn use_case_duplicate(layer_context: &LayerContext, name: String) -> Result<()> {
    raise(
        layer_context,
        SaveUserError::from(DuplicateEntity::new(User::new(name))),
    )
}

#[when("the error crosses into the use case layer")]
fn cross_layer(layer_context: &LayerContext) -> Result<()> {
    let raised = layer_context
        .raised
        .take()
        .ok_or_else(|| anyhow!("no error was raised"))?;
    let reported: SaveUserError = map_layer_error(raised);
    layer_context.reported.set(reported);
    Ok(())
}

fn reported(layer_context: &LayerContext) -> Result<SaveUserError> {
    layer_context
        .reported
        .take()
        .ok_or_else(|| anyhow!("the error never crossed layers"))
}

#[then("the use case reports an invalid name for {name}")]
fn reports_invalid_name(layer_context: &LayerContext, name: String) -> Result<()> {
    let error = reported(layer_context)?;
    let expected = SaveUserError::InvalidName(InvalidName::new(User::new(name)));
    ensure!(error == expected, "expected {expected:?}, got {error:?}");
    Ok(())
}

#[then("the use case reports {name} as a duplicate")]
fn reports_duplicate(layer_context: &LayerContext, name: String) -> Result<()> {
    let error = reported(layer_context)?;
    let expected = SaveUserError::DuplicateEntity(DuplicateEntity::new(User::new(name)));
    ensure!(error == expected, "expected {expected:?}, got {error:?}");
    Ok(())
}

#[then("the use case reports that the user could not be saved")]
fn reports_cannot_persist(layer_context: &LayerContext) -> Result<()> {
    let error = reported(layer_context)?;
    ensure!(
        error == SaveUserError::CannotPersist,
        "expected the fallback kind, got {error:?}"
    );
    ensure!(error.to_string() == "user could not be saved");
    Ok(())
}
