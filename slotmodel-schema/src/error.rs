//! Error types for class definition and member validation.

use slotmodel_types::{ClassId, ValueKind};
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Structural errors raised at class-registration time.
///
/// These are fatal: a class that fails registration does not exist and has
/// no layout map. Nothing in this crate recovers from them.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A class with this name is already registered.
    #[error("class '{0}' is already registered")]
    DuplicateClass(String),

    /// The declared parent handle does not name a registered class.
    #[error("class '{class}' declares unknown parent {parent}")]
    UnknownParent { class: String, parent: ClassId },

    /// No registered class has this name.
    #[error("unknown class '{0}'")]
    UnknownClass(String),

    /// An extra storage slot shadows a declared member of the same name,
    /// which would make the attribute path for that name ambiguous.
    #[error("class '{class}': extra slot '{name}' collides with a declared member")]
    SlotCollision { class: String, name: String },
}

/// A member descriptor rejected a value on write.
///
/// Raised by descriptors, propagated verbatim through attribute writes and
/// snapshot restore. This crate never catches or retries it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value's kind does not match the member's declared kind.
    #[error("expected {expected} value, got {found}")]
    KindMismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    /// The value is not one of an enumeration member's allowed options.
    #[error("'{value}' is not an allowed option")]
    NotAnOption { value: String },
}
