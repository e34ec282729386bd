//! Reusable rule sets.

use crate::core::Value;
use crate::rules::property::{EqualityRule, PropertyRule, RegexRule, TypeRule};
use crate::rules::violations::{Failure, ValidationError};
use crate::validate;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Immutable collection of the three rule lists, built once and applied to
/// many targets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSet {
    pub(crate) type_rules: Vec<TypeRule>,
    pub(crate) regex_rules: Vec<RegexRule>,
    pub(crate) equality_rules: Vec<EqualityRule>,
}

impl RuleSet {
    /// All rules must hold. See [`validate::validate_object`].
    pub fn validate(&self, target: &Value) -> Result<bool, ValidationError> {
        validate::validate_object(
            target,
            &self.type_rules,
            &self.regex_rules,
            &self.equality_rules,
        )
    }

    /// Report which rule produced a `false` result, if any.
    pub fn check(&self, target: &Value) -> Result<Option<Failure>, ValidationError> {
        validate::check_object(
            target,
            &self.type_rules,
            &self.regex_rules,
            &self.equality_rules,
        )
    }

    /// Patch-style check against the regex rules only.
    /// See [`validate::validate_partial_object`].
    pub fn validate_partial(&self, target: &Value) -> Result<bool, ValidationError> {
        validate::validate_partial_object(target, &self.regex_rules)
    }

    /// Report why a patch-style check returned `false`, if it did.
    pub fn check_partial(&self, target: &Value) -> Result<Option<Failure>, ValidationError> {
        validate::check_partial_object(target, &self.regex_rules)
    }

    /// Evaluate every rule and collect ALL failures.
    ///
    /// Unlike [`RuleSet::validate`] nothing short-circuits and no payload is
    /// raised; each failing rule contributes one [`Failure`].
    pub fn audit(&self, target: &Value) -> Validation<(), NonEmptyVec<Failure>> {
        if !target.is_object() {
            return Validation::fail(Failure::shape_mismatch());
        }

        let mut checks: Vec<Validation<(), NonEmptyVec<Failure>>> = Vec::new();
        checks.extend(self.type_rules.iter().map(|rule| audit_rule(rule, target)));
        checks.extend(self.regex_rules.iter().map(|rule| audit_rule(rule, target)));
        checks.extend(self.equality_rules.iter().map(|rule| audit_rule(rule, target)));

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn type_rules(&self) -> &[TypeRule] {
        &self.type_rules
    }

    pub fn regex_rules(&self) -> &[RegexRule] {
        &self.regex_rules
    }

    pub fn equality_rules(&self) -> &[EqualityRule] {
        &self.equality_rules
    }

    pub fn is_empty(&self) -> bool {
        self.type_rules.is_empty() && self.regex_rules.is_empty() && self.equality_rules.is_empty()
    }
}

fn audit_rule<R: PropertyRule>(rule: &R, target: &Value) -> Validation<(), NonEmptyVec<Failure>> {
    match rule.evaluate(target) {
        Ok(()) => Validation::success(()),
        Err(kind) => Validation::fail(Failure::on_property(kind, rule.property_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Kind;
    use crate::rules::builder::RuleSetBuilder;
    use crate::rules::violations::{ErrorPayload, FailureKind};
    use regex::Regex;
    use serde_json::json;

    fn signup_rules() -> RuleSet {
        RuleSetBuilder::new()
            .require_type(TypeRule::new("age", Kind::Number))
            .require_pattern(
                RegexRule::new("phone", Regex::new("^[0-9]{10}$").unwrap())
                    .with_error(ErrorPayload::invalid_request("phone is invalid.")),
            )
            .require_equal(EqualityRule::new("terms", true))
            .build()
    }

    #[test]
    fn audit_accumulates_all_failures() {
        let target = Value::from(json!({ "age": "old", "phone": "123" }));

        match signup_rules().audit(&target) {
            Validation::Failure(failures) => {
                assert_eq!(failures.len(), 3);

                let kinds: Vec<FailureKind> = failures.iter().map(|f| f.kind).collect();
                assert!(kinds.contains(&FailureKind::TypeMismatch));
                assert!(kinds.contains(&FailureKind::PatternMismatch));
                assert!(kinds.contains(&FailureKind::MissingProperty));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn audit_succeeds_when_every_rule_holds() {
        let target = Value::from(json!({ "age": 30, "phone": "5551234567", "terms": true }));
        assert!(signup_rules().audit(&target).is_success());
    }

    #[test]
    fn audit_reports_shape_mismatch_once() {
        let result = signup_rules().audit(&Value::Null);
        assert!(result.is_failure());
        if let Validation::Failure(failures) = result {
            assert_eq!(failures.len(), 1);
            assert!(failures
                .iter()
                .all(|f| f.kind == FailureKind::ShapeMismatch));
        }
    }

    #[test]
    fn validate_raises_where_audit_reports() {
        let target = Value::from(json!({ "age": 30, "phone": "123", "terms": true }));

        let err = signup_rules().validate(&target).unwrap_err();
        assert_eq!(err.kind(), FailureKind::PatternMismatch);
        assert!(signup_rules().audit(&target).is_failure());
    }

    #[test]
    fn check_names_the_failing_property() {
        let target = Value::from(json!({ "age": 30, "phone": "5551234567", "terms": false }));
        assert_eq!(
            signup_rules().check(&target),
            Ok(Some(Failure::on_property(FailureKind::NotEqual, "terms")))
        );
    }

    #[test]
    fn check_partial_reports_missing_fields() {
        let rules = signup_rules();

        let failure = rules.check_partial(&Value::from(json!({}))).unwrap().unwrap();
        assert_eq!(failure.kind, FailureKind::NoApplicableField);
        assert_eq!(
            rules.check_partial(&Value::from(json!({ "phone": "5551234567" }))),
            Ok(None)
        );
    }

    #[test]
    fn empty_set_is_vacuous() {
        let rules = RuleSet::default();
        assert!(rules.is_empty());
        assert_eq!(rules.validate(&Value::from(json!({ "x": 1 }))), Ok(true));
        assert!(rules.audit(&Value::from(json!({}))).is_success());
    }
}
