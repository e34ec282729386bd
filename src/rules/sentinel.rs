//! Null/undefined exemptions as a lookup table.
//!
//! A present value is classified once, then the rule's
//! `{allow_null, allow_undefined}` flags decide whether the value skips the
//! rule's kind or pattern check.

use crate::core::Value;

/// Classification of a present property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentinel {
    Null,
    Undefined,
    /// Any non-sentinel value; always checked.
    Other,
}

impl Sentinel {
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Undefined => Self::Undefined,
            _ => Self::Other,
        }
    }

    /// Whether the rule's flags exempt this value from its check.
    ///
    /// | value     | allow_null | allow_undefined | exempt |
    /// |-----------|------------|-----------------|--------|
    /// | null      | true       | any             | yes    |
    /// | undefined | any        | true            | yes    |
    /// | otherwise |            |                 | no     |
    pub fn permits(self, allow_null: bool, allow_undefined: bool) -> bool {
        match self {
            Self::Null => allow_null,
            Self::Undefined => allow_undefined,
            Self::Other => false,
        }
    }
}
