//! Full-object validation: every rule must hold.

use crate::core::Value;
use crate::rules::property::PropertyRule;
use crate::rules::{EqualityRule, Failure, RegexRule, TypeRule, ValidationError};
use tracing::{debug, trace};

/// Check that `target` satisfies every rule in every list.
///
/// Rules run in declaration order: type rules, then regex rules, then
/// equality rules. The first failing rule decides the outcome. If it carries
/// an error payload that payload is raised as `Err`, otherwise the call
/// returns `Ok(false)` and no later rule is evaluated.
///
/// A target that is not a non-null, non-array object is always `Ok(false)`,
/// whatever payloads the rules carry.
///
/// # Example
///
/// ```rust
/// use shapeguard::core::{Kind, Value};
/// use shapeguard::rules::TypeRule;
/// use shapeguard::validate::validate_object;
/// use serde_json::json;
///
/// let rules = [TypeRule::new("p", Kind::String).allow_null()];
///
/// assert_eq!(validate_object(&Value::from(json!({ "p": null })), &rules, &[], &[]), Ok(true));
/// assert_eq!(validate_object(&Value::from(json!({ "p": 1 })), &rules, &[], &[]), Ok(false));
/// assert_eq!(validate_object(&Value::from(json!([])), &[], &[], &[]), Ok(false));
/// ```
pub fn validate_object(
    target: &Value,
    type_rules: &[TypeRule],
    regex_rules: &[RegexRule],
    equality_rules: &[EqualityRule],
) -> Result<bool, ValidationError> {
    check_object(target, type_rules, regex_rules, equality_rules).map(|failure| failure.is_none())
}

/// Same evaluation as [`validate_object`], reporting which rule produced a
/// `false` result. `Ok(None)` means every rule passed.
pub fn check_object(
    target: &Value,
    type_rules: &[TypeRule],
    regex_rules: &[RegexRule],
    equality_rules: &[EqualityRule],
) -> Result<Option<Failure>, ValidationError> {
    if !target.is_object() {
        debug!(kind = ?target.kind(), "target is not an object");
        return Ok(Some(Failure::shape_mismatch()));
    }

    if let Some(failure) = first_failure(target, type_rules)? {
        return Ok(Some(failure));
    }
    if let Some(failure) = first_failure(target, regex_rules)? {
        return Ok(Some(failure));
    }
    first_failure(target, equality_rules)
}

fn first_failure<R: PropertyRule>(
    target: &Value,
    rules: &[R],
) -> Result<Option<Failure>, ValidationError> {
    for rule in rules {
        let property = rule.property_name();
        trace!(property, "evaluating rule");

        let Err(kind) = rule.evaluate(target) else {
            continue;
        };
        if let Some(err) = rule.raise(kind) {
            debug!(property, ?kind, "rule failed, raising its error");
            return Err(err);
        }
        debug!(property, ?kind, "rule failed");
        return Ok(Some(Failure::on_property(kind, property)));
    }
    Ok(None)
}
