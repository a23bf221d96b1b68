//! Shared fixtures for the behavioural scenarios.

use outcome_algebra::Fault;
use outcome_algebra::Outcome;
use outcome_algebra::users::{SaveUserError, UserLayerError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::evaluation::EvaluationLog;

/// Common error the three combined inputs are normalised to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failing {
    First(String),
    Second(Fault),
    Third(bool),
}

impl Failing {
    /// Name of the input that produced the failure.
    pub const fn position(&self) -> &'static str {
        match self {
            Self::First(_) => "one",
            Self::Second(_) => "two",
            Self::Third(_) => "three",
        }
    }

    /// Payload of the failing input, rendered as text.
    pub fn detail(&self) -> String {
        match self {
            Self::First(message) => message.clone(),
            Self::Second(fault) => fault.message().to_owned(),
            Self::Third(flag) => flag.to_string(),
        }
    }
}

/// Inputs, evaluation record and result of a combining scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct CombineContext {
    pub one: Slot<Outcome<String, i32>>,
    pub two: Slot<Outcome<Fault, i32>>,
    pub three: Slot<Outcome<bool, i32>>,
    pub log: Slot<EvaluationLog>,
    pub result: Slot<Outcome<Failing, i32>>,
}

/// Creates an empty combining context.
#[fixture]
pub fn combine_context() -> CombineContext {
    CombineContext::default()
}

/// Error raised in a lower layer and its use-case translation.
#[derive(Debug, Default, ScenarioState)]
pub struct LayerContext {
    pub raised: Slot<UserLayerError>,
    pub reported: Slot<SaveUserError>,
}

/// Creates an empty layer mapping context.
#[fixture]
pub fn layer_context() -> LayerContext {
    LayerContext::default()
}
