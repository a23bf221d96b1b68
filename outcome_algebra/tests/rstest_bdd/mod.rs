//! `rstest-bdd` behavioural tests for `outcome_algebra`.
//!
//! [`fixtures`] holds the per-scenario state, [`steps`] the step registry,
//! and [`scenarios`] binds the `.feature` files under `tests/features`.

mod fixtures;
mod scenarios;
mod steps;
