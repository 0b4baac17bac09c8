//! User and session records as read by the evaluator.
//!
//! Both are owned by external stores. The evaluator only reads them and
//! must tolerate malformed values: a missing namespace never matches and a
//! missing participant list means nobody is enrolled.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::types::{NamespaceId, SessionId, UserId};

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub role: Role,

    /// `None` only for system admins in well-formed data.
    #[serde(default)]
    pub namespace_id: Option<NamespaceId>,

    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    /// Create a user with no display name.
    pub fn new(id: impl Into<UserId>, role: Role, namespace_id: Option<NamespaceId>) -> Self {
        Self {
            id: id.into(),
            role,
            namespace_id,
            display_name: None,
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// The string used to identify this user in messages and logs.
    ///
    /// The display name when present and non-blank, the id otherwise.
    pub fn display_label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.id.as_str(),
        }
    }

    /// True if both users carry the same namespace.
    ///
    /// A missing namespace on either side never matches.
    pub fn shares_namespace(&self, other: &User) -> bool {
        match (&self.namespace_id, &other.namespace_id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Whether the namespace matches what the identity store guarantees for
    /// the role: system admins have none, every other role has one.
    pub fn is_well_formed(&self) -> bool {
        match self.role {
            Role::SystemAdmin => self.namespace_id.is_none(),
            _ => self.namespace_id.is_some(),
        }
    }
}

/// The enrollment view of a classroom session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: SessionId,

    #[serde(default)]
    pub namespace_id: Option<NamespaceId>,

    /// Enrolled member ids. Absent in the source data means empty.
    #[serde(default)]
    pub participants: Vec<UserId>,
}

impl SessionRecord {
    /// Create a session with no participants.
    pub fn new(id: impl Into<SessionId>, namespace_id: Option<NamespaceId>) -> Self {
        Self {
            id: id.into(),
            namespace_id,
            participants: Vec::new(),
        }
    }

    /// Add participants.
    pub fn with_participants<I, U>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        self.participants.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Linear scan of the participant list.
    pub fn is_enrolled(&self, user_id: &UserId) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }
}
