//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Service record not found (or soft-deleted)
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// Storage/database error
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
