//! Builder API for creating rule sets.

use crate::core::{Kind, Value};
use crate::rules::property::{EqualityRule, RegexRule, TypeRule};
use crate::rules::set::RuleSet;
use regex::Regex;

/// Builder for creating rule sets
///
/// # Example
///
/// ```rust
/// use shapeguard::core::{Kind, Value};
/// use shapeguard::patterns;
/// use shapeguard::rules::RuleSetBuilder;
/// use serde_json::json;
///
/// let rules = RuleSetBuilder::new()
///     .field_type("name", Kind::String)
///     .field_pattern("email", patterns::email().clone())
///     .build();
///
/// let body = Value::from(json!({ "name": "Ada", "email": "ada@example.com" }));
/// assert_eq!(rules.validate(&body), Ok(true));
/// ```
#[derive(Default)]
pub struct RuleSetBuilder {
    type_rules: Vec<TypeRule>,
    regex_rules: Vec<RegexRule>,
    equality_rules: Vec<EqualityRule>,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully configured type rule
    pub fn require_type(mut self, rule: TypeRule) -> Self {
        self.type_rules.push(rule);
        self
    }

    /// Add a fully configured regex rule
    pub fn require_pattern(mut self, rule: RegexRule) -> Self {
        self.regex_rules.push(rule);
        self
    }

    /// Add a fully configured equality rule
    pub fn require_equal(mut self, rule: EqualityRule) -> Self {
        self.equality_rules.push(rule);
        self
    }

    /// Shorthand for a strict type rule
    pub fn field_type(self, name: impl Into<String>, kind: Kind) -> Self {
        self.require_type(TypeRule::new(name, kind))
    }

    /// Shorthand for a strict regex rule
    pub fn field_pattern(self, name: impl Into<String>, pattern: Regex) -> Self {
        self.require_pattern(RegexRule::new(name, pattern))
    }

    /// Shorthand for an equality rule without a payload
    pub fn field_equals(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.require_equal(EqualityRule::new(name, value))
    }

    /// Build the rule set
    pub fn build(self) -> RuleSet {
        RuleSet {
            type_rules: self.type_rules,
            regex_rules: self.regex_rules,
            equality_rules: self.equality_rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_declaration_order() {
        let rules = RuleSetBuilder::new()
            .field_type("b", Kind::Number)
            .field_type("a", Kind::String)
            .field_equals("c", "x")
            .build();

        let names: Vec<&str> = rules
            .type_rules()
            .iter()
            .map(|r| r.property_name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(rules.equality_rules().len(), 1);
        assert!(rules.regex_rules().is_empty());
    }
}
