//! Error types for instance operations.

use slotmodel_schema::ValidationError;
use slotmodel_types::ClassId;
use thiserror::Error;

/// Result type for instance operations.
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Errors raised by attribute access, capture, and restore.
///
/// Every failure from a collaborator surfaces verbatim; nothing here is
/// caught, retried, or rolled back.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// A member descriptor rejected a written value.
    #[error("invalid value for member '{member}': {source}")]
    Validation {
        member: String,
        #[source]
        source: ValidationError,
    },

    /// The name resolves to neither a member, an extra slot with a value,
    /// nor a dynamic attribute on this instance.
    #[error("class '{class}' has no attribute '{name}'")]
    UnknownAttribute { class: String, name: String },

    /// The class handle is not valid for the registry in use.
    #[error("class {0} is not registered")]
    UnknownClass(ClassId),

    /// A reduction names a class the registry does not know.
    #[error("cannot rebuild: unknown class '{0}'")]
    UnknownClassName(String),
}
