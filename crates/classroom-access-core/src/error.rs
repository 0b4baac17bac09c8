//! Error types for the access core.

use thiserror::Error;

/// Errors raised while parsing roles and permission tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    #[error("unknown permission token: {0:?}")]
    UnknownPermission(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
