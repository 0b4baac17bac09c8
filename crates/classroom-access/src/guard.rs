//! Helpers for HTTP route handlers.
//!
//! Handlers build a [`User`] from a verified identity, run a check or an
//! assertion, and turn the outcome into a response status with
//! [`Rejection::status_code`].

use classroom_access_core::User;
use thiserror::Error;

use crate::error::AuthorizationError;

/// Why a request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No verified identity came with the request.
    #[error("authentication required")]
    Unauthenticated,

    /// The identity is known but not allowed.
    #[error(transparent)]
    Forbidden(#[from] AuthorizationError),
}

impl Rejection {
    /// HTTP status for this rejection: 401 or 403.
    pub fn status_code(&self) -> u16 {
        match self {
            Rejection::Unauthenticated => 401,
            Rejection::Forbidden(_) => 403,
        }
    }
}

/// Require a verified user, or reject with 401.
pub fn require_user(user: Option<User>) -> Result<User, Rejection> {
    user.ok_or(Rejection::Unauthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessEvaluator, EvaluatorConfig};
    use classroom_access_core::{NamespaceId, Role};

    #[test]
    fn test_missing_identity_is_401() {
        let rejection = require_user(None).unwrap_err();
        assert_eq!(rejection, Rejection::Unauthenticated);
        assert_eq!(rejection.status_code(), 401);
    }

    #[test]
    fn test_denial_is_403() {
        let evaluator = AccessEvaluator::new(EvaluatorConfig::default());
        let handler = |user: Option<User>| -> Result<(), Rejection> {
            let user = require_user(user)?;
            evaluator.assert_permission(&user, "session.create")?;
            Ok(())
        };

        let student = User::new("s", Role::Student, Some(NamespaceId::from("a")));
        let rejection = handler(Some(student)).unwrap_err();
        assert_eq!(rejection.status_code(), 403);
        assert!(rejection.to_string().contains("session.create"));

        let instructor = User::new("t", Role::Instructor, Some(NamespaceId::from("a")));
        assert!(handler(Some(instructor)).is_ok());
    }
}
