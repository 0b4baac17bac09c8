//! # Classroom Access Core
//!
//! Pure primitives for classroom access control: roles, permission tokens,
//! the static permission matrix, and the user/session records the evaluator
//! reads.
//!
//! This crate contains no I/O. Everything here is immutable data and
//! lookups over it.
//!
//! ## Key Types
//!
//! - [`Role`] - The closed set of platform roles
//! - [`Permission`] - A `resource.action` token
//! - [`permissions_for`] - The role → permission matrix
//! - [`User`] - An authenticated identity as read from the identity store
//! - [`SessionRecord`] - The enrollment view of a classroom session

pub mod error;
pub mod matrix;
pub mod permission;
pub mod role;
pub mod types;
pub mod user;

pub use error::{CoreError, Result};
pub use matrix::{permissions_for, roles_with};
pub use permission::Permission;
pub use role::Role;
pub use types::{NamespaceId, SessionId, UserId};
pub use user::{SessionRecord, User};
