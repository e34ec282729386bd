//! Declarative property rules.
//!
//! A rule names one property of a target record and constrains it in one
//! of three ways:
//! - [`TypeRule`]: runtime kind, with optional `null`/`undefined` exemptions
//! - [`RegexRule`]: string matching a pattern, with the same exemptions
//! - [`EqualityRule`]: strict equality with a primitive
//!
//! Rules are collected into an immutable [`RuleSet`] with
//! [`RuleSetBuilder`], or loaded from JSON through [`RuleSetConfig`].
//!
//! # Example
//!
//! ```rust
//! use shapeguard::core::{Kind, Value};
//! use shapeguard::rules::{ErrorPayload, RuleSetBuilder, TypeRule};
//! use serde_json::json;
//!
//! let rules = RuleSetBuilder::new()
//!     .require_type(
//!         TypeRule::new("title", Kind::String)
//!             .with_error(ErrorPayload::invalid_request("title is required.")),
//!     )
//!     .build();
//!
//! let err = rules.validate(&Value::from(json!({}))).unwrap_err();
//! assert_eq!(err.status(), Some(400));
//! ```

pub mod builder;
pub mod config;
pub mod property;
pub mod sentinel;
pub mod set;
pub mod violations;

// Re-export commonly used types
pub use builder::RuleSetBuilder;
pub use config::{ConfigError, RuleSetConfig};
pub use property::{EqualityRule, RegexRule, TypeRule};
pub use sentinel::Sentinel;
pub use set::RuleSet;
pub use violations::{ErrorPayload, Failure, FailureKind, ValidationError};
