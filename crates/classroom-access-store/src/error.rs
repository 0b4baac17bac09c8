//! Error types for session lookups.

use thiserror::Error;

/// Errors a session lookup can report.
///
/// The evaluator never propagates these; any error is a deny.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("session store unavailable: {0}")]
    Unavailable(String),

    /// The backend reported a failure.
    #[error("session store backend error: {0}")]
    Backend(String),

    /// Stored data could not be interpreted.
    #[error("invalid session data: {0}")]
    InvalidData(String),

    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[error("session store lock poisoned")]
    Poisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
