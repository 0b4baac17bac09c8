//! SessionLookup trait: the collaborator contract for session access checks.

use std::sync::Arc;

use async_trait::async_trait;
use classroom_access_core::{SessionId, SessionRecord};

use crate::error::Result;

/// Read-only access to classroom sessions.
///
/// Implementations own their own timeouts. The evaluator calls
/// [`get_session`](SessionLookup::get_session) at most once per check and
/// never retries.
#[async_trait]
pub trait SessionLookup: Send + Sync {
    /// Fetch a session by id.
    ///
    /// # Returns
    /// - `Ok(Some(session))` if the session exists.
    /// - `Ok(None)` if it does not.
    /// - `Err(_)` if the store could not answer.
    async fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>>;
}

#[async_trait]
impl<L: SessionLookup + ?Sized> SessionLookup for Arc<L> {
    async fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>> {
        (**self).get_session(id).await
    }
}
