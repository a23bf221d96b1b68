//! Test helpers shared across crates.
//!
//! This crate currently provides an evaluation log for asserting which
//! steps of a short-circuiting computation ran.

pub mod evaluation;
