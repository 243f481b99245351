//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `listing`, `grading`) so
//! each view depends on small focused models that are testable without a
//! browser.

pub mod auth;
pub mod grading;
pub mod listing;
pub mod session;
