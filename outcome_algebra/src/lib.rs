//! Functional error-handling algebra for layered applications.
//!
//! The crate offers three immutable containers and two protocols built on
//! top of them:
//!
//! - [`Outcome`] is the short-circuiting success/failure container.
//! - [`Validation`] is the valid/invalid container that can also accumulate
//!   independent failures via [`Accumulate`].
//! - [`Optional`] represents presence or absence and converts into an
//!   [`Outcome`] given a lazily invoked error supplier.
//! - The binder ([`binding`], [`binding_async`] and [`Extract`]) threads
//!   several containers through one block and stops at the first failure.
//! - The layer error mapper ([`LayerError`], [`map_layer_error`]) converges
//!   heterogeneous error kinds into the error type expected by the calling
//!   layer.
//!
//! # Examples
//!
//! ```
//! use outcome_algebra::{Extract, Optional, Outcome, Validation, binding};
//!
//! let one: Outcome<String, i32> = Outcome::success(1);
//! let two: Optional<i32> = Optional::present(2);
//! let three: Validation<bool, i32> = Validation::valid(3);
//!
//! let total: Outcome<String, i32> = binding(|| {
//!     let a = one.extract()?;
//!     let b = two.to_outcome(|| "missing two".to_owned()).extract()?;
//!     let c = three.map_error(|flag| format!("invalid three: {flag}")).extract()?;
//!     Ok(a + b + c)
//! });
//!
//! assert_eq!(total, Outcome::success(6));
//! ```

mod binder;
mod layer;
mod optional;
mod outcome;
mod result_ext;
pub mod users;
mod validation;

pub use binder::{Extract, Fault, binding, binding_async, catch_fault};
#[cfg(feature = "tokio")]
pub use binder::{ScopedTask, spawn_scoped};
pub use layer::{LayerError, map_layer_error};
pub use optional::Optional;
pub use outcome::Outcome;
pub use result_ext::LayerResultExt;
pub use validation::{Accumulate, Accumulated, Validation};
