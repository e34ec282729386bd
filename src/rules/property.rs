//! Property rules and their per-value checks.
//!
//! Each rule is a declaration plus a pure `evaluate` that classifies one
//! target into pass or a `FailureKind`. Deciding whether to raise or return
//! `false` is left to the callers in `crate::validate`.

use crate::core::{Kind, Value};
use crate::rules::sentinel::Sentinel;
use crate::rules::violations::{ErrorPayload, FailureKind, ValidationError};
use regex::Regex;

/// Require a property's runtime kind.
///
/// # Example
///
/// ```rust
/// use shapeguard::core::Kind;
/// use shapeguard::rules::TypeRule;
///
/// let rule = TypeRule::new("nickname", Kind::String).allow_null();
/// assert!(rule.allow_null);
/// assert!(!rule.allow_undefined);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRule {
    pub property_name: String,
    pub expected_kind: Kind,
    pub allow_null: bool,
    pub allow_undefined: bool,
    pub error: Option<ErrorPayload>,
}

impl TypeRule {
    pub fn new(property_name: impl Into<String>, expected_kind: Kind) -> Self {
        Self {
            property_name: property_name.into(),
            expected_kind,
            allow_null: false,
            allow_undefined: false,
            error: None,
        }
    }

    pub fn allow_null(mut self) -> Self {
        self.allow_null = true;
        self
    }

    pub fn allow_undefined(mut self) -> Self {
        self.allow_undefined = true;
        self
    }

    /// Raise this payload instead of returning `false` when the rule fails.
    pub fn with_error(mut self, error: ErrorPayload) -> Self {
        self.error = Some(error);
        self
    }

    pub(crate) fn evaluate(&self, target: &Value) -> Result<(), FailureKind> {
        let value = target
            .own_property(&self.property_name)
            .ok_or(FailureKind::MissingProperty)?;

        if Sentinel::classify(value).permits(self.allow_null, self.allow_undefined) {
            return Ok(());
        }
        // `null` reports `object`, so an object rule accepts it even unflagged.
        if value.kind() == self.expected_kind {
            Ok(())
        } else {
            Err(FailureKind::TypeMismatch)
        }
    }
}

/// Require a property to be a string matching a pattern.
#[derive(Clone, Debug)]
pub struct RegexRule {
    pub property_name: String,
    pub pattern: Regex,
    pub allow_null: bool,
    pub allow_undefined: bool,
    pub error: Option<ErrorPayload>,
}

impl RegexRule {
    pub fn new(property_name: impl Into<String>, pattern: Regex) -> Self {
        Self {
            property_name: property_name.into(),
            pattern,
            allow_null: false,
            allow_undefined: false,
            error: None,
        }
    }

    pub fn allow_null(mut self) -> Self {
        self.allow_null = true;
        self
    }

    pub fn allow_undefined(mut self) -> Self {
        self.allow_undefined = true;
        self
    }

    pub fn with_error(mut self, error: ErrorPayload) -> Self {
        self.error = Some(error);
        self
    }

    pub(crate) fn evaluate(&self, target: &Value) -> Result<(), FailureKind> {
        let value = target
            .own_property(&self.property_name)
            .ok_or(FailureKind::MissingProperty)?;
        self.check_value(value)
    }

    /// Check a present value: sentinel exemption, then string, then pattern.
    pub(crate) fn check_value(&self, value: &Value) -> Result<(), FailureKind> {
        if Sentinel::classify(value).permits(self.allow_null, self.allow_undefined) {
            return Ok(());
        }
        match value.as_str() {
            Some(s) if self.pattern.is_match(s) => Ok(()),
            _ => Err(FailureKind::PatternMismatch),
        }
    }
}

impl PartialEq for RegexRule {
    fn eq(&self, other: &Self) -> bool {
        self.property_name == other.property_name
            && self.pattern.as_str() == other.pattern.as_str()
            && self.allow_null == other.allow_null
            && self.allow_undefined == other.allow_undefined
            && self.error == other.error
    }
}

/// Require a property to be strictly equal to a primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct EqualityRule {
    pub property_name: String,
    pub expected_value: Value,
    pub error: Option<ErrorPayload>,
}

impl EqualityRule {
    pub fn new(property_name: impl Into<String>, expected_value: impl Into<Value>) -> Self {
        Self {
            property_name: property_name.into(),
            expected_value: expected_value.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: ErrorPayload) -> Self {
        self.error = Some(error);
        self
    }

    pub(crate) fn evaluate(&self, target: &Value) -> Result<(), FailureKind> {
        let value = target
            .own_property(&self.property_name)
            .ok_or(FailureKind::MissingProperty)?;
        if value.strict_equals(&self.expected_value) {
            Ok(())
        } else {
            Err(FailureKind::NotEqual)
        }
    }
}

/// Shared view of the three rule kinds used by the evaluation loops.
pub(crate) trait PropertyRule {
    fn property_name(&self) -> &str;
    fn error(&self) -> Option<&ErrorPayload>;
    fn evaluate(&self, target: &Value) -> Result<(), FailureKind>;

    /// Turn a failure into the raised error, if the rule carries one.
    fn raise(&self, kind: FailureKind) -> Option<ValidationError> {
        self.error().map(|payload| ValidationError::Rule {
            kind,
            property: self.property_name().to_string(),
            payload: payload.clone(),
        })
    }
}

macro_rules! impl_property_rule {
    ($($rule:ty),*) => {
        $(
            impl PropertyRule for $rule {
                fn property_name(&self) -> &str {
                    &self.property_name
                }

                fn error(&self) -> Option<&ErrorPayload> {
                    self.error.as_ref()
                }

                fn evaluate(&self, target: &Value) -> Result<(), FailureKind> {
                    <$rule>::evaluate(self, target)
                }
            }
        )*
    };
}

impl_property_rule!(TypeRule, RegexRule, EqualityRule);
