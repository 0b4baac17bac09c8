//! The AccessEvaluator: permission, session, and user management checks.
//!
//! The evaluator is built once per process (or per request scope) and
//! passed explicitly to whatever needs it. It holds no mutable state: the
//! permission matrix is static and the optional session lookup is only
//! read, so one instance serves concurrent requests without locking.

use std::fmt;
use std::sync::Arc;

use classroom_access_core::{Permission, SessionId, User};
use classroom_access_store::SessionLookup;

use crate::check;
use crate::config::EvaluatorConfig;
use crate::error::{AuthorizationError, DeniedAction, Result};

/// Outcome of a session access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAccess {
    /// Granted: the role bypasses enrollment checks.
    Elevated,
    /// Granted: the user is enrolled in the session.
    Enrolled,
    /// Denied: no session id, or a blank one.
    MissingSessionId,
    /// Denied: the evaluator was built without a session lookup.
    NoSessionLookup,
    /// Denied: the session does not exist.
    SessionNotFound,
    /// Denied: the session exists but the user is not a participant.
    NotEnrolled,
    /// Denied: the session lookup failed.
    LookupFailed,
}

impl SessionAccess {
    /// True for the granting outcomes.
    pub fn is_granted(&self) -> bool {
        matches!(self, SessionAccess::Elevated | SessionAccess::Enrolled)
    }
}

/// The access control evaluator.
///
/// Construct with [`AccessEvaluator::new`] when no session store is wired
/// in (session checks for students then always deny), or with
/// [`AccessEvaluator::with_session_lookup`] otherwise.
#[derive(Clone)]
pub struct AccessEvaluator {
    sessions: Option<Arc<dyn SessionLookup>>,
    config: EvaluatorConfig,
}

impl fmt::Debug for AccessEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessEvaluator")
            .field("has_session_lookup", &self.sessions.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for AccessEvaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}

impl AccessEvaluator {
    /// Create an evaluator without a session lookup.
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            sessions: None,
            config,
        }
    }

    /// Create an evaluator backed by a session lookup.
    pub fn with_session_lookup<L>(lookup: L, config: EvaluatorConfig) -> Self
    where
        L: SessionLookup + 'static,
    {
        Self {
            sessions: Some(Arc::new(lookup)),
            config,
        }
    }

    /// Create an evaluator from an already shared lookup.
    pub fn with_shared_lookup(lookup: Arc<dyn SessionLookup>, config: EvaluatorConfig) -> Self {
        Self {
            sessions: Some(lookup),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// True if a session lookup was injected.
    pub fn has_session_lookup(&self) -> bool {
        self.sessions.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checks
    // ─────────────────────────────────────────────────────────────────────────

    /// True if the user's role holds the permission token.
    pub fn has_permission(&self, user: &User, token: &str) -> bool {
        let granted = check::has_permission(user, token);
        if !granted {
            self.audit(user, || DeniedAction::Permission(token.to_owned()));
        }
        granted
    }

    /// Typed form of [`has_permission`](Self::has_permission).
    pub fn has(&self, user: &User, permission: Permission) -> bool {
        self.has_permission(user, permission.as_str())
    }

    /// True if the user may access the session.
    ///
    /// Never fails: every error path is a deny.
    pub async fn can_access_session<'a>(
        &self,
        user: &User,
        session_id: impl Into<Option<&'a SessionId>>,
    ) -> bool {
        self.session_access(user, session_id).await.is_granted()
    }

    /// Decide session access and report why.
    pub async fn session_access<'a>(
        &self,
        user: &User,
        session_id: impl Into<Option<&'a SessionId>>,
    ) -> SessionAccess {
        let session_id = session_id.into();
        let decision = self.decide_session_access(user, session_id).await;
        if !decision.is_granted() {
            self.audit(user, || DeniedAction::AccessSession(session_id.cloned()));
        }
        decision
    }

    async fn decide_session_access(
        &self,
        user: &User,
        session_id: Option<&SessionId>,
    ) -> SessionAccess {
        if user.role.is_elevated() {
            return SessionAccess::Elevated;
        }

        let Some(sessions) = &self.sessions else {
            tracing::warn!(
                user_id = %user.id,
                session_id = session_id.map(SessionId::as_str),
                "no session lookup configured, denying session access"
            );
            return SessionAccess::NoSessionLookup;
        };

        let Some(session_id) = session_id.filter(|id| !id.is_blank()) else {
            return SessionAccess::MissingSessionId;
        };

        match sessions.get_session(session_id).await {
            Ok(Some(session)) if session.is_enrolled(&user.id) => SessionAccess::Enrolled,
            Ok(Some(_)) => SessionAccess::NotEnrolled,
            Ok(None) => SessionAccess::SessionNotFound,
            Err(e) => {
                tracing::warn!(
                    user_id = %user.id,
                    session_id = %session_id,
                    error = %e,
                    "session lookup failed, denying session access"
                );
                SessionAccess::LookupFailed
            }
        }
    }

    /// True if `actor` may manage `target`.
    pub fn can_manage_user(&self, actor: &User, target: &User) -> bool {
        let granted = check::can_manage_user(actor, target);
        if !granted {
            self.audit(actor, || DeniedAction::ManageUser(target.display_label().to_owned()));
        }
        granted
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Assertions
    // ─────────────────────────────────────────────────────────────────────────

    /// Fail with [`AuthorizationError`] unless the role holds the token.
    pub fn assert_permission(&self, user: &User, token: &str) -> Result<()> {
        if self.has_permission(user, token) {
            return Ok(());
        }
        Err(denied(user, DeniedAction::Permission(token.to_owned())))
    }

    /// Fail with [`AuthorizationError`] unless the user may access the
    /// session.
    pub async fn assert_can_access_session<'a>(
        &self,
        user: &User,
        session_id: impl Into<Option<&'a SessionId>>,
    ) -> Result<()> {
        let session_id = session_id.into();
        if self.can_access_session(user, session_id).await {
            return Ok(());
        }
        Err(denied(user, DeniedAction::AccessSession(session_id.cloned())))
    }

    /// Fail with [`AuthorizationError`] unless `actor` may manage `target`.
    pub fn assert_can_manage_user(&self, actor: &User, target: &User) -> Result<()> {
        if self.can_manage_user(actor, target) {
            return Ok(());
        }
        Err(denied(
            actor,
            DeniedAction::ManageUser(target.display_label().to_owned()),
        ))
    }

    fn audit(&self, actor: &User, action: impl FnOnce() -> DeniedAction) {
        if self.config.audit_denials {
            let action = action();
            tracing::debug!(
                target: "classroom_access::audit",
                actor = actor.display_label(),
                role = %actor.role,
                action = %action,
                "access denied"
            );
        }
    }
}

fn denied(actor: &User, action: DeniedAction) -> AuthorizationError {
    AuthorizationError {
        actor: actor.display_label().to_owned(),
        role: actor.role,
        action,
    }
}
