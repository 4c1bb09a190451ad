//! Schema construction errors

use thiserror::Error;

/// Result type for catalog construction
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building the type catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two fields of one schema share a name
    #[error("Duplicate field '{name}' in record schema")]
    DuplicateField { name: String },

    /// A temporal pattern could not be compiled
    #[error("Invalid temporal format '{pattern}'")]
    InvalidFormat { pattern: String },
}

impl SchemaError {
    /// Create a duplicate field error
    pub fn duplicate_field(name: impl Into<String>) -> Self {
        Self::DuplicateField { name: name.into() }
    }

    /// Create an invalid format error
    pub fn invalid_format(pattern: impl Into<String>) -> Self {
        Self::InvalidFormat {
            pattern: pattern.into(),
        }
    }
}
