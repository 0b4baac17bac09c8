//! # Classroom Access
//!
//! Role-based access control for the classroom platform: who may use a
//! permission, join a session, or manage another user.
//!
//! ## Overview
//!
//! - **Permission check**: membership of a `resource.action` token in the
//!   static matrix entry for the user's role.
//! - **Session access**: instructors and admins always pass; students pass
//!   only when enrolled, checked through an injected [`SessionLookup`].
//! - **User management**: hierarchical and scoped to the actor's namespace.
//! - **Assertions**: the same checks, returning [`AuthorizationError`] on
//!   denial.
//!
//! Every failure path denies. A missing or failing session lookup turns into
//! `false` and a warning, never into an error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use classroom_access::{AccessEvaluator, EvaluatorConfig, User, Role, SessionId};
//! use classroom_access::store::MemorySessionStore;
//!
//! async fn example(user: User) {
//!     let evaluator = AccessEvaluator::with_session_lookup(
//!         MemorySessionStore::new(),
//!         EvaluatorConfig::default(),
//!     );
//!
//!     if evaluator.has_permission(&user, "session.create") {
//!         // ...
//!     }
//!
//!     let session = SessionId::from("s1");
//!     evaluator
//!         .assert_can_access_session(&user, &session)
//!         .await
//!         .unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `classroom_access::core` - Roles, permissions, and the matrix
//! - `classroom_access::store` - Session lookup contract and memory store

pub mod check;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod guard;

pub use classroom_access_core as core;
pub use classroom_access_store as store;

pub use check::{can_manage_user, has, has_permission};
pub use config::EvaluatorConfig;
pub use error::{AuthorizationError, DeniedAction, Result};
pub use evaluator::{AccessEvaluator, SessionAccess};
pub use guard::{require_user, Rejection};

pub use classroom_access_core::{
    permissions_for, roles_with, NamespaceId, Permission, Role, SessionId, SessionRecord, User,
    UserId,
};
pub use classroom_access_store::{SessionLookup, StoreError};
