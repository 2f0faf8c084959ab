//! Schema parsing and registry errors

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while parsing schema definitions or maintaining the registry
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("malformed schema definition: {0}")]
    Malformed(String),

    #[error("unknown type name: '{0}'")]
    UnknownType(String),

    #[error("duplicate definition of named type '{0}'")]
    DuplicateName(String),

    #[error("duplicate field '{field}' in record '{record}'")]
    DuplicateField { record: String, field: String },

    #[error("schema '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("schema has no declared name and cannot be registered")]
    Unnamed,

    #[error("failed to read schema file '{path}': {reason}")]
    Io { path: String, reason: String },
}
