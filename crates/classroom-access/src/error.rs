//! Authorization errors.

use std::fmt;

use classroom_access_core::{Role, SessionId};
use thiserror::Error;

/// What the actor was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeniedAction {
    /// The role does not hold this permission token.
    Permission(String),
    /// The user may not access this session.
    AccessSession(Option<SessionId>),
    /// The actor may not manage the target user (display label).
    ManageUser(String),
}

impl fmt::Display for DeniedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeniedAction::Permission(token) => write!(f, "use permission `{}`", token),
            DeniedAction::AccessSession(Some(id)) => write!(f, "access session {}", id),
            DeniedAction::AccessSession(None) => f.write_str("access a session without an id"),
            DeniedAction::ManageUser(target) => write!(f, "manage user {}", target),
        }
    }
}

/// The single error returned by the assertion wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("user {actor} ({role}) is not authorized to {action}")]
pub struct AuthorizationError {
    /// Display label of the acting user.
    pub actor: String,
    /// Role of the acting user.
    pub role: Role,
    /// What was refused.
    pub action: DeniedAction,
}

/// Result type for assertion wrappers.
pub type Result<T> = std::result::Result<T, AuthorizationError>;
