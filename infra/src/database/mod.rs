//! Database module - MySQL repository implementations using SQLx
//!
//! Repositories here implement the core persistence traits on top of the
//! resilient store session. They never hold a pool themselves; every
//! operation acquires a handle so degraded mode and reconnects apply
//! uniformly.

pub mod repositories;

// Re-export commonly used types
pub use repositories::{MySqlPasscodeRepository, MySqlSubjectStore};
