//! Core value model for untyped records.
//!
//! This module contains the data the validator operates on:
//! - `Value`, a dynamically shaped value that keeps `null` and `undefined` apart
//! - `Record`, the own properties of an object value
//! - `Kind`, the runtime kind reported by `Value::kind`
//!
//! Everything here is pure data with no side effects.

mod kind;
mod value;

pub use kind::Kind;
pub use value::{Record, Value};
