//! Shapeguard: rule-driven validation for untyped records
//!
//! Shapeguard checks dynamically shaped input (parsed request bodies,
//! loosely typed configuration) against declarative property rules. Every
//! check is a pure, synchronous function: no state is kept between calls,
//! so rule sets can be shared freely across threads.
//!
//! # Core Concepts
//!
//! - **Values**: `core::Value` keeps `null`, `undefined` and missing
//!   properties apart
//! - **Rules**: type, pattern and equality constraints on named properties,
//!   each with optional `null`/`undefined` exemptions and error payloads
//! - **Validation**: "all-of" checks for full objects, "any-of" checks for
//!   partial (patch-style) objects
//! - **Formats**: built-in patterns and date predicates for common fields
//!
//! # Example
//!
//! ```rust
//! use shapeguard::core::{Kind, Value};
//! use shapeguard::patterns;
//! use shapeguard::rules::{RegexRule, TypeRule};
//! use shapeguard::validate::validate_object;
//! use serde_json::json;
//!
//! let body = Value::from(json!({
//!     "title": "Standup",
//!     "starts_at": "2023-06-01T10:15:00.000Z",
//!     "notes": null
//! }));
//!
//! let types = [
//!     TypeRule::new("title", Kind::String),
//!     TypeRule::new("notes", Kind::String).allow_null(),
//! ];
//! let formats = [RegexRule::new(
//!     "starts_at",
//!     patterns::iso_date_15min_increments().clone(),
//! )];
//!
//! assert_eq!(validate_object(&body, &types, &formats, &[]), Ok(true));
//! ```

pub mod core;
pub mod date;
pub mod patterns;
pub mod rules;
pub mod validate;

// Re-export commonly used types
pub use crate::core::{Kind, Record, Value};
pub use rules::{
    EqualityRule, ErrorPayload, Failure, FailureKind, RegexRule, RuleSet, RuleSetBuilder,
    TypeRule, ValidationError,
};
pub use validate::{check_object, check_partial_object, validate_object, validate_partial_object};
