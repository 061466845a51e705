//! Store module - resilient access to the durable MySQL store
//!
//! This module provides the session layer every repository goes through:
//! - Lazy connection with capped, backoff-based retries
//! - Cached health checks with background reconnect on repeated failure
//! - Timeout-bounded operations with aggregate counters
//! - A degraded fallback handle for non-production environments

pub mod handle;
pub mod session;

// Re-export commonly used types
pub use handle::StoreHandle;
pub use session::{SessionStats, StoreSession};
