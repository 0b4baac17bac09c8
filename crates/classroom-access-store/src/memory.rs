//! In-memory implementation of the SessionLookup trait.
//!
//! Keeps sessions in a map behind an RwLock. Nothing is persisted.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use classroom_access_core::{SessionId, SessionRecord, UserId};

use crate::error::{Result, StoreError};
use crate::traits::SessionLookup;

/// In-memory session store. Thread-safe via RwLock.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionRecord>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with sessions.
    pub fn with_sessions(sessions: impl IntoIterator<Item = SessionRecord>) -> Self {
        let map = sessions.into_iter().map(|s| (s.id.clone(), s)).collect();
        Self {
            sessions: RwLock::new(map),
        }
    }

    /// Insert or replace a session. Returns the previous record, if any.
    pub fn insert(&self, session: SessionRecord) -> Result<Option<SessionRecord>> {
        let mut sessions = self.sessions.write().map_err(|_| StoreError::Poisoned)?;
        Ok(sessions.insert(session.id.clone(), session))
    }

    /// Remove a session.
    pub fn remove(&self, id: &SessionId) -> Result<Option<SessionRecord>> {
        let mut sessions = self.sessions.write().map_err(|_| StoreError::Poisoned)?;
        Ok(sessions.remove(id))
    }

    /// Add a user to a session's participants.
    ///
    /// Returns `false` if the session does not exist. Enrolling twice is a
    /// no-op.
    pub fn enroll(&self, id: &SessionId, user_id: UserId) -> Result<bool> {
        let mut sessions = self.sessions.write().map_err(|_| StoreError::Poisoned)?;
        let Some(session) = sessions.get_mut(id) else {
            return Ok(false);
        };
        if !session.is_enrolled(&user_id) {
            session.participants.push(user_id);
        }
        Ok(true)
    }

    /// Remove a user from a session's participants.
    ///
    /// Returns `true` if the user was enrolled.
    pub fn unenroll(&self, id: &SessionId, user_id: &UserId) -> Result<bool> {
        let mut sessions = self.sessions.write().map_err(|_| StoreError::Poisoned)?;
        let Some(session) = sessions.get_mut(id) else {
            return Ok(false);
        };
        let before = session.participants.len();
        session.participants.retain(|p| p != user_id);
        Ok(session.participants.len() != before)
    }

    /// Number of sessions held.
    pub fn len(&self) -> Result<usize> {
        let sessions = self.sessions.read().map_err(|_| StoreError::Poisoned)?;
        Ok(sessions.len())
    }

    /// True if no sessions are held.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl SessionLookup for MemorySessionStore {
    async fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>> {
        let sessions = self.sessions.read().map_err(|_| StoreError::Poisoned)?;
        let found = sessions.get(id).cloned();
        tracing::trace!(session_id = %id, found = found.is_some(), "memory session lookup");
        Ok(found)
    }
}
