//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{CombineContext, LayerContext, combine_context, layer_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/combine_outcomes.feature",
    fixtures = [combine_context: CombineContext]
);
scenarios!(
    "tests/features/layer_mapping.feature",
    fixtures = [layer_context: LayerContext]
);
