//! # Classroom Access Store
//!
//! The session lookup capability the access evaluator depends on.
//!
//! ## Overview
//!
//! Session data lives in an external store the evaluator never owns. This
//! crate defines the one-method [`SessionLookup`] contract the evaluator is
//! constructed with, plus [`MemorySessionStore`] for tests and
//! single-process deployments.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use classroom_access_core::SessionRecord;
//! use classroom_access_store::{MemorySessionStore, SessionLookup};
//!
//! async fn example() {
//!     let store = MemorySessionStore::new();
//!     store
//!         .insert(SessionRecord::new("s1", None).with_participants(["u1"]))
//!         .unwrap();
//!
//!     let session = store.get_session(&"s1".into()).await.unwrap();
//!     assert!(session.is_some());
//! }
//! ```

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemorySessionStore;
pub use traits::SessionLookup;
