//! Session lookup doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use classroom_access_core::{SessionId, SessionRecord};
use classroom_access_store::{Result, SessionLookup, StoreError};

/// Delays every lookup before delegating.
pub struct SlowLookup<L> {
    inner: L,
    delay: Duration,
}

impl<L> SlowLookup<L> {
    pub fn new(inner: L, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl<L: SessionLookup> SessionLookup for SlowLookup<L> {
    async fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_session(id).await
    }
}

/// Fails every lookup.
pub struct FailingLookup {
    reason: String,
}

impl FailingLookup {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for FailingLookup {
    fn default() -> Self {
        Self::new("connection refused")
    }
}

#[async_trait]
impl SessionLookup for FailingLookup {
    async fn get_session(&self, _id: &SessionId) -> Result<Option<SessionRecord>> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

/// Counts lookups before delegating.
pub struct CountingLookup<L> {
    inner: L,
    calls: AtomicUsize,
}

impl<L> CountingLookup<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<L: SessionLookup> SessionLookup for CountingLookup<L> {
    async fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_session(id).await
    }
}
