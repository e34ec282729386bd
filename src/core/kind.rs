//! Runtime kinds reported for values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime kind of a value, matching the names `typeof` produces.
///
/// `null`, arrays, dates and plain objects all report `Object`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Number,
    Bigint,
    Boolean,
    Symbol,
    Undefined,
    Object,
    Function,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bigint => "bigint",
            Self::Boolean => "boolean",
            Self::Symbol => "symbol",
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&Kind::Bigint).unwrap();
        assert_eq!(json, "\"bigint\"");

        let kind: Kind = serde_json::from_str("\"function\"").unwrap();
        assert_eq!(kind, Kind::Function);
    }

    #[test]
    fn display_matches_serialized_name() {
        assert_eq!(Kind::Undefined.to_string(), "undefined");
        assert_eq!(Kind::Object.to_string(), "object");
    }
}
