//! Dynamically shaped values.
//!
//! Request bodies and other untyped input arrive as `Value`s. Unlike
//! `serde_json::Value`, the model distinguishes an explicit `Undefined`
//! entry from a missing key, and carries the non-JSON kinds a rule can ask
//! for (`bigint`, `symbol`, `function`, dates).

use super::kind::Kind;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Own properties of an object value.
pub type Record = BTreeMap<String, Value>;

/// An untyped value.
///
/// # Example
///
/// ```rust
/// use shapeguard::core::{Kind, Value};
/// use serde_json::json;
///
/// let body = Value::from(json!({ "email": "a@b.co", "age": 31 }));
///
/// assert!(body.is_object());
/// assert_eq!(body.own_property("age").map(Value::kind), Some(Kind::Number));
/// assert!(body.own_property("name").is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    /// A symbol, identified by its description.
    Symbol(String),
    /// A callable, identified by its name.
    Function(String),
    /// A date instance. `None` is an invalid date.
    Date(Option<DateTime<Utc>>),
    Array(Vec<Value>),
    Object(Record),
}

impl Value {
    /// Runtime kind of this value, as `typeof` reports it.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Bool(_) => Kind::Boolean,
            Self::Number(_) => Kind::Number,
            Self::BigInt(_) => Kind::Bigint,
            Self::String(_) => Kind::String,
            Self::Symbol(_) => Kind::Symbol,
            Self::Function(_) => Kind::Function,
            Self::Null | Self::Date(_) | Self::Array(_) | Self::Object(_) => Kind::Object,
        }
    }

    /// True for non-null, non-array object values.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Date(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(Some(date)) => Some(date),
            _ => None,
        }
    }

    /// Own properties, if this is a plain object.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Look up an own property.
    ///
    /// An explicit `Undefined` entry is present; a missing key is `None`.
    pub fn own_property(&self, name: &str) -> Option<&Value> {
        self.as_record().and_then(|record| record.get(name))
    }

    /// Iterate over own property names. Empty for anything but a plain object.
    pub fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.as_record()
            .into_iter()
            .flat_map(|record| record.keys().map(String::as_str))
    }

    /// Strict (`===`) equality.
    ///
    /// Reference kinds (symbols, functions, dates, arrays, objects) are never
    /// strictly equal to a separately constructed value.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Object(record)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(Some(date))
    }
}

impl<T: Into<Value>> FromIterator<(String, T)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
