//! Member descriptors.
//!
//! A member is a named, typed attribute slot declared on a class. The core
//! engine only consumes the [`Member`] contract: it asks a descriptor for a
//! default value when a slot is first read and asks it to validate every
//! value written to the slot. What "valid" means is entirely up to the
//! descriptor.
//!
//! [`StdMember`] covers the common cases (kind-checked scalars, containers,
//! enumerations). Implement [`Member`] directly for anything richer, such
//! as range checks or cross-field constraints.

use crate::ValidationError;
use serde_json::json;
use slotmodel_types::{Value, ValueKind};
use std::sync::Arc;

/// The descriptor contract consumed by the layout and object layers.
///
/// Descriptors are shared read-only (`Arc`) by every class that inherits
/// them and by every instance of those classes; they must never be mutated
/// after the declaring class is registered.
pub trait Member: Send + Sync {
    /// The value a slot materializes on first read.
    fn default_value(&self) -> Value;

    /// Validate a value before it is written to the slot.
    /// Return `Err` to reject the write.
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let _ = value;
        Ok(())
    }

    /// The value kind this member accepts, when it checks one.
    /// Informational only; the engine never branches on it.
    fn kind(&self) -> Option<ValueKind> {
        None
    }
}

/// Standard kind-checked member descriptor.
///
/// Validates that written values match the declared [`ValueKind`] (ints are
/// accepted where floats are declared). An enumeration member additionally
/// restricts text values to a fixed option set.
#[derive(Debug, Clone)]
pub struct StdMember {
    kind: Option<ValueKind>,
    default: Value,
    options: Option<Vec<String>>,
}

impl StdMember {
    /// An integer member.
    #[must_use]
    pub fn int(default: i64) -> Arc<dyn Member> {
        Arc::new(Self {
            kind: Some(ValueKind::Int),
            default: json!(default),
            options: None,
        })
    }

    /// A float member. Integer writes are accepted.
    #[must_use]
    pub fn float(default: f64) -> Arc<dyn Member> {
        Arc::new(Self {
            kind: Some(ValueKind::Float),
            default: json!(default),
            options: None,
        })
    }

    /// A text member.
    #[must_use]
    pub fn text(default: &str) -> Arc<dyn Member> {
        Arc::new(Self {
            kind: Some(ValueKind::Text),
            default: json!(default),
            options: None,
        })
    }

    /// A boolean member.
    #[must_use]
    pub fn boolean(default: bool) -> Arc<dyn Member> {
        Arc::new(Self {
            kind: Some(ValueKind::Bool),
            default: json!(default),
            options: None,
        })
    }

    /// A list member, defaulting to an empty list.
    #[must_use]
    pub fn list() -> Arc<dyn Member> {
        Arc::new(Self {
            kind: Some(ValueKind::List),
            default: json!([]),
            options: None,
        })
    }

    /// A map member, defaulting to an empty map.
    #[must_use]
    pub fn map() -> Arc<dyn Member> {
        Arc::new(Self {
            kind: Some(ValueKind::Map),
            default: json!({}),
            options: None,
        })
    }

    /// An unchecked member accepting any value.
    #[must_use]
    pub fn any(default: Value) -> Arc<dyn Member> {
        Arc::new(Self {
            kind: None,
            default,
            options: None,
        })
    }

    /// A text member restricted to a fixed option set.
    ///
    /// The default is the first option; declare the preferred default first.
    #[must_use]
    pub fn enumeration(options: Vec<String>) -> Arc<dyn Member> {
        let default = options.first().cloned().unwrap_or_default();
        Arc::new(Self {
            kind: Some(ValueKind::Text),
            default: json!(default),
            options: Some(options),
        })
    }
}

impl Member for StdMember {
    fn default_value(&self) -> Value {
        self.default.clone()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if let Some(expected) = self.kind {
            let found = ValueKind::of(value);
            if !found.satisfies(expected) {
                return Err(ValidationError::KindMismatch { expected, found });
            }
        }
        if let Some(options) = &self.options {
            let text = value.as_str().unwrap_or_default();
            if !options.iter().any(|o| o == text) {
                return Err(ValidationError::NotAnOption {
                    value: text.to_string(),
                });
            }
        }
        Ok(())
    }

    fn kind(&self) -> Option<ValueKind> {
        self.kind
    }
}
