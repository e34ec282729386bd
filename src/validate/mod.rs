//! Validation operations over untyped records.
//!
//! Two modes are provided:
//! - [`validate_object`]: every rule in every list must hold ("all-of")
//! - [`validate_partial_object`]: no undeclared keys, and the first present
//!   declared field decides ("any-of")
//!
//! Both are pure and stateless. A failure is either returned as `Ok(false)`
//! or raised as `Err(ValidationError)`; callers usually map the latter to a
//! 400-class response using [`ValidationError::status`](crate::rules::ValidationError::status).

mod object;
mod partial;

pub use object::{check_object, validate_object};
pub use partial::{check_partial_object, validate_partial_object};
