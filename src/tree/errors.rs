//! Field tree compilation errors

use thiserror::Error;

use crate::schema::SchemaType;

/// Result type for tree compilation
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised while compiling a schema into a field tree.
///
/// Traversal itself never errors: absent or malformed data propagates
/// absence to leaf callbacks instead of failing.
#[derive(Debug, Clone, Error)]
pub enum TreeError {
    #[error("root schema must be a record, got {0}")]
    InvalidSchema(SchemaType),
}
