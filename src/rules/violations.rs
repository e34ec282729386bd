//! Failure kinds, error payloads and raised validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// HTTP-like status attached to request validation failures.
pub const BAD_REQUEST: u16 = 400;

/// Name carried by the errors raised for malformed requests.
pub const INVALID_REQUEST_ERROR: &str = "InvalidRequestError";

/// Error-shaped value a caller attaches to a rule, or that the validator
/// raises on its own.
///
/// Callers branch on `name` and `status` (e.g. `status == Some(400)` is a
/// client request-validation failure).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorPayload {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// `{ name: "InvalidRequestError", message, status: 400 }`
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(INVALID_REQUEST_ERROR, message).with_status(BAD_REQUEST)
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// Why a target failed a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Target is not a non-null, non-array object.
    ShapeMismatch,
    /// A rule names a property the target does not own.
    MissingProperty,
    /// Present property has the wrong runtime kind.
    TypeMismatch,
    /// Present property is not a string or does not match the pattern.
    PatternMismatch,
    /// Present property is not strictly equal to the expected value.
    NotEqual,
    /// Target owns a key no rule declares.
    UnknownField,
    /// No rule found a present, valid property.
    NoApplicableField,
}

/// A failure that was returned as `false` rather than raised.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl Failure {
    pub fn shape_mismatch() -> Self {
        Self {
            kind: FailureKind::ShapeMismatch,
            property: None,
        }
    }

    pub fn on_property(kind: FailureKind, property: impl Into<String>) -> Self {
        Self {
            kind,
            property: Some(property.into()),
        }
    }
}

/// Errors raised out of a validation call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A failing rule carried its own error payload.
    #[error("Rule on `{property}` failed ({kind:?}): {payload}")]
    Rule {
        kind: FailureKind,
        property: String,
        payload: ErrorPayload,
    },

    #[error("Unknown field `{field}`: {payload}")]
    UnknownField { field: String, payload: ErrorPayload },

    #[error("Invalid field `{property}`: {payload}")]
    InvalidField {
        property: String,
        payload: ErrorPayload,
    },
}

impl ValidationError {
    pub(crate) fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
            payload: ErrorPayload::invalid_request("Request is invalid."),
        }
    }

    pub(crate) fn invalid_field(property: impl Into<String>) -> Self {
        let property = property.into();
        let payload = ErrorPayload::invalid_request(format!("{property} is invalid."));
        Self::InvalidField { property, payload }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Rule { kind, .. } => *kind,
            Self::UnknownField { .. } => FailureKind::UnknownField,
            Self::InvalidField { .. } => FailureKind::PatternMismatch,
        }
    }

    pub fn payload(&self) -> &ErrorPayload {
        match self {
            Self::Rule { payload, .. }
            | Self::UnknownField { payload, .. }
            | Self::InvalidField { payload, .. } => payload,
        }
    }

    pub fn name(&self) -> &str {
        &self.payload().name
    }

    pub fn status(&self) -> Option<u16> {
        self.payload().status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_is_a_bad_request() {
        let err = ValidationError::unknown_field("baz");

        assert_eq!(err.kind(), FailureKind::UnknownField);
        assert_eq!(err.name(), INVALID_REQUEST_ERROR);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.payload().message, "Request is invalid.");
    }

    #[test]
    fn invalid_field_names_the_property() {
        let err = ValidationError::invalid_field("email");

        assert_eq!(err.payload().message, "email is invalid.");
        assert_eq!(err.status(), Some(BAD_REQUEST));
        assert!(err.to_string().contains("`email`"));
    }

    #[test]
    fn payload_status_is_optional_on_the_wire() {
        let payload = ErrorPayload::new("Teapot", "short and stout");
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"Teapot","message":"short and stout"}"#);

        let parsed: ErrorPayload =
            serde_json::from_str(r#"{"name":"X","message":"m","status":418}"#).unwrap();
        assert_eq!(parsed.status, Some(418));
    }
}
