// ⚠️ Validation Errors
// Every domain value is checked once, at construction. Nothing is partially built.

use thiserror::Error;

/// Why a value object could not be constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent
    #[error("{field} must not be null")]
    NullArgument { field: &'static str },

    /// A field was present but broke a rule
    #[error("{reason}")]
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },
}

/// Result type alias with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    pub fn null(field: &'static str) -> Self {
        ValidationError::NullArgument { field }
    }

    pub fn invalid(field: &'static str, reason: &'static str) -> Self {
        ValidationError::InvalidArgument { field, reason }
    }

    pub fn is_null_argument(&self) -> bool {
        matches!(self, ValidationError::NullArgument { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ValidationError::InvalidArgument { .. })
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NullArgument { field } => field,
            ValidationError::InvalidArgument { field, .. } => field,
        }
    }
}

/// Unwrap a required field or report it as absent
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> ValidationResult<T> {
    value.ok_or(ValidationError::NullArgument { field })
}
