//! Partial-object validation for patch-style requests.

use crate::core::Value;
use crate::rules::property::PropertyRule;
use crate::rules::{Failure, FailureKind, RegexRule, ValidationError};
use tracing::debug;

/// Check a target that may carry any subset of the declared fields.
///
/// - A key no rule declares raises [`ValidationError::UnknownField`]
///   (status 400), before any rule is evaluated.
/// - Rules run in order. A rule applies only when its property is present
///   and holds a string; absent or non-string properties are skipped.
/// - The first applying rule decides: a match returns `Ok(true)`, a mismatch
///   raises the rule's payload, or [`ValidationError::InvalidField`] naming
///   the property when it has none.
/// - If no rule applies the result is `Ok(false)`.
///
/// A target that is not a non-null, non-array object is `Ok(false)`.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use shapeguard::core::Value;
/// use shapeguard::rules::{FailureKind, RegexRule};
/// use shapeguard::validate::validate_partial_object;
/// use serde_json::json;
///
/// let rules = [
///     RegexRule::new("first_name", Regex::new("^.{2,36}$").unwrap()),
///     RegexRule::new("phone", Regex::new("^[0-9]{10}$").unwrap()),
/// ];
///
/// let patch = Value::from(json!({ "phone": "5551234567" }));
/// assert_eq!(validate_partial_object(&patch, &rules), Ok(true));
///
/// let sneaky = Value::from(json!({ "phone": "5551234567", "role": "admin" }));
/// let err = validate_partial_object(&sneaky, &rules).unwrap_err();
/// assert_eq!(err.kind(), FailureKind::UnknownField);
/// assert_eq!(err.status(), Some(400));
/// ```
pub fn validate_partial_object(
    target: &Value,
    regex_rules: &[RegexRule],
) -> Result<bool, ValidationError> {
    check_partial_object(target, regex_rules).map(|failure| failure.is_none())
}

/// Same evaluation as [`validate_partial_object`], reporting why the result
/// was `false`: [`FailureKind::ShapeMismatch`] for a non-object target,
/// [`FailureKind::NoApplicableField`] when no rule applied.
pub fn check_partial_object(
    target: &Value,
    regex_rules: &[RegexRule],
) -> Result<Option<Failure>, ValidationError> {
    if !target.is_object() {
        debug!(kind = ?target.kind(), "target is not an object");
        return Ok(Some(Failure::shape_mismatch()));
    }

    if let Some(field) = target
        .own_keys()
        .find(|key| !regex_rules.iter().any(|rule| rule.property_name == *key))
    {
        debug!(field, "target carries an undeclared field");
        return Err(ValidationError::unknown_field(field));
    }

    for rule in regex_rules {
        let property = rule.property_name.as_str();
        let Some(value) = target.own_property(property).and_then(Value::as_str) else {
            continue;
        };

        if rule.pattern.is_match(value) {
            return Ok(None);
        }

        debug!(property, "present field does not match its pattern");
        return Err(rule
            .raise(FailureKind::PatternMismatch)
            .unwrap_or_else(|| ValidationError::invalid_field(property)));
    }

    debug!("no declared field is present");
    Ok(Some(Failure {
        kind: FailureKind::NoApplicableField,
        property: None,
    }))
}
