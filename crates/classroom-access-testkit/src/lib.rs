//! # Classroom Access Testkit
//!
//! Testing utilities for classroom access control.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: ready-made users per role and a memory-backed session store
//! - **Generators**: proptest strategies for roles, permissions, tokens, users
//! - **Doubles**: session lookups that sleep, fail, or count calls
//! - **Capture**: a tracing layer that records events so tests can assert on
//!   warnings
//!
//! ## Test Fixtures
//!
//! ```rust
//! use classroom_access_testkit::fixtures::{Roster, TestFixture, NAMESPACE_A};
//!
//! let fixture = TestFixture::new();
//! let roster = Roster::in_namespace(NAMESPACE_A);
//! fixture.session("s1", [&roster.student]);
//! ```
//!
//! ## Capturing Warnings
//!
//! ```rust
//! use classroom_access_testkit::capture::EventCapture;
//!
//! let capture = EventCapture::new();
//! let _guard = capture.set_default();
//! tracing::warn!("something went wrong");
//! assert_eq!(capture.warnings().len(), 1);
//! ```

pub mod capture;
pub mod doubles;
pub mod fixtures;
pub mod generators;

pub use capture::{CapturedEvent, EventCapture};
pub use doubles::{CountingLookup, FailingLookup, SlowLookup};
pub use fixtures::{Roster, TestFixture};
