//! Declaring rule sets in JSON.
//!
//! Rule sets can live in configuration instead of code:
//!
//! ```json
//! {
//!   "type_rules":     [{ "property": "age", "kind": "number", "allow_null": true }],
//!   "regex_rules":    [{ "property": "email", "pattern": "@email" }],
//!   "equality_rules": [{ "property": "terms", "value": true }]
//! }
//! ```
//!
//! A pattern beginning with `@` names one of the built-in formats in
//! [`crate::patterns`]; anything else is compiled as a regular expression.

use crate::core::{Kind, Value};
use crate::patterns;
use crate::rules::property::{EqualityRule, RegexRule, TypeRule};
use crate::rules::set::RuleSet;
use crate::rules::violations::ErrorPayload;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a rule set
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse rule set: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid pattern for `{property}`: {source}")]
    InvalidPattern {
        property: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown named pattern `@{name}` for `{property}`")]
    UnknownNamedPattern { property: String, name: String },

    #[error("Expected value for `{property}` must be a primitive")]
    NonPrimitiveValue { property: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSetConfig {
    #[serde(default)]
    pub type_rules: Vec<TypeRuleConfig>,
    #[serde(default)]
    pub regex_rules: Vec<RegexRuleConfig>,
    #[serde(default)]
    pub equality_rules: Vec<EqualityRuleConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeRuleConfig {
    pub property: String,
    pub kind: Kind,
    #[serde(default)]
    pub allow_null: bool,
    #[serde(default)]
    pub allow_undefined: bool,
    #[serde(default)]
    pub error: Option<ErrorPayload>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegexRuleConfig {
    pub property: String,
    pub pattern: String,
    #[serde(default)]
    pub allow_null: bool,
    #[serde(default)]
    pub allow_undefined: bool,
    #[serde(default)]
    pub error: Option<ErrorPayload>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EqualityRuleConfig {
    pub property: String,
    pub value: serde_json::Value,
    #[serde(default)]
    pub error: Option<ErrorPayload>,
}

impl RuleSetConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compile patterns and produce the rule set.
    pub fn compile(self) -> Result<RuleSet, ConfigError> {
        let type_rules = self.type_rules.into_iter().map(TypeRule::from).collect();
        let regex_rules = self
            .regex_rules
            .into_iter()
            .map(RegexRule::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let equality_rules = self
            .equality_rules
            .into_iter()
            .map(EqualityRule::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let rules = RuleSet {
            type_rules,
            regex_rules,
            equality_rules,
        };
        debug!(
            type_rules = rules.type_rules.len(),
            regex_rules = rules.regex_rules.len(),
            equality_rules = rules.equality_rules.len(),
            "compiled rule set"
        );
        Ok(rules)
    }
}

impl RuleSet {
    /// Parse and compile a JSON rule set declaration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        RuleSetConfig::from_json_str(json)?.compile()
    }
}

impl From<TypeRuleConfig> for TypeRule {
    fn from(config: TypeRuleConfig) -> Self {
        TypeRule {
            property_name: config.property,
            expected_kind: config.kind,
            allow_null: config.allow_null,
            allow_undefined: config.allow_undefined,
            error: config.error,
        }
    }
}

impl TryFrom<RegexRuleConfig> for RegexRule {
    type Error = ConfigError;

    fn try_from(config: RegexRuleConfig) -> Result<Self, Self::Error> {
        let pattern = match config.pattern.strip_prefix('@') {
            Some(name) => patterns::named(name)
                .cloned()
                .ok_or_else(|| ConfigError::UnknownNamedPattern {
                    property: config.property.clone(),
                    name: name.to_string(),
                })?,
            None => Regex::new(&config.pattern).map_err(|source| ConfigError::InvalidPattern {
                property: config.property.clone(),
                source,
            })?,
        };

        Ok(RegexRule {
            property_name: config.property,
            pattern,
            allow_null: config.allow_null,
            allow_undefined: config.allow_undefined,
            error: config.error,
        })
    }
}

impl TryFrom<EqualityRuleConfig> for EqualityRule {
    type Error = ConfigError;

    fn try_from(config: EqualityRuleConfig) -> Result<Self, Self::Error> {
        if config.value.is_array() || config.value.is_object() {
            return Err(ConfigError::NonPrimitiveValue {
                property: config.property,
            });
        }

        Ok(EqualityRule {
            property_name: config.property,
            expected_value: Value::from(config.value),
            error: config.error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::violations::FailureKind;
    use serde_json::json;

    const SIGNUP: &str = r#"{
        "type_rules": [
            { "property": "age", "kind": "number", "allow_null": true }
        ],
        "regex_rules": [
            { "property": "email", "pattern": "@email",
              "error": { "name": "InvalidRequestError", "message": "email is invalid.", "status": 400 } },
            { "property": "zip", "pattern": "^[0-9]{5}$", "allow_undefined": true }
        ],
        "equality_rules": [
            { "property": "terms", "value": true }
        ]
    }"#;

    #[test]
    fn loads_and_applies_rule_set() {
        let rules = RuleSet::from_json_str(SIGNUP).unwrap();

        assert_eq!(rules.type_rules().len(), 1);
        assert!(rules.type_rules()[0].allow_null);
        assert_eq!(rules.regex_rules().len(), 2);
        assert!(rules.regex_rules()[1].allow_undefined);

        let ok = Value::from(json!({
            "age": null, "email": "ada@example.com", "zip": "12345", "terms": true
        }));
        assert_eq!(rules.validate(&ok), Ok(true));

        let bad_email = Value::from(json!({
            "age": 30, "email": "not-an-email", "zip": "12345", "terms": true
        }));
        let err = rules.validate(&bad_email).unwrap_err();
        assert_eq!(err.kind(), FailureKind::PatternMismatch);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let rules = RuleSet::from_json_str("{}").unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn rejects_bad_regex() {
        let err = RuleSet::from_json_str(
            r#"{ "regex_rules": [{ "property": "x", "pattern": "(unclosed" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref property, .. } if property == "x"));
    }

    #[test]
    fn rejects_unknown_named_pattern() {
        let err = RuleSet::from_json_str(
            r#"{ "regex_rules": [{ "property": "x", "pattern": "@zipcode" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownNamedPattern { ref name, .. } if name == "zipcode"));
    }

    #[test]
    fn rejects_structured_expected_values() {
        let err = RuleSet::from_json_str(
            r#"{ "equality_rules": [{ "property": "x", "value": [1] }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NonPrimitiveValue { .. }));
    }

    #[test]
    fn rejects_unknown_kind_and_fields() {
        assert!(matches!(
            RuleSet::from_json_str(r#"{ "type_rules": [{ "property": "x", "kind": "date" }] }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RuleSet::from_json_str(r#"{ "rules": [] }"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
