//! Value classification over `serde_json::Value`.
//!
//! Attribute values are arbitrary JSON. Validators work in terms of the
//! coarse kind of a value rather than its concrete content, so the kinds are
//! defined here once and shared by every descriptor implementation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value model for attribute storage.
///
/// Re-exported so downstream crates name one value type regardless of which
/// JSON crate backs it.
pub type Value = serde_json::Value;

/// The coarse type of an attribute value.
///
/// `Int` and `Float` are distinguished: a number is `Int` only when it is
/// representable as `i64` or `u64` without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    List,
    Map,
}

impl ValueKind {
    /// Classifies a value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Self::Int
                } else {
                    Self::Float
                }
            }
            Value::String(_) => Self::Text,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Map,
        }
    }

    /// Returns true when a value of this kind is acceptable where `expected`
    /// is required. Identity, except that an int is acceptable as a float.
    #[must_use]
    pub fn satisfies(&self, expected: Self) -> bool {
        *self == expected || (expected == Self::Float && *self == Self::Int)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::List => "list",
            Self::Map => "map",
        };
        f.write_str(name)
    }
}
