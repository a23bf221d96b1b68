//! Step definitions grouped by feature.

mod combine_steps;
mod layer_steps;
