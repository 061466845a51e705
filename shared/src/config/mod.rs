//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `store` - Durable store connectivity and resilience tuning

pub mod environment;
pub mod store;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use store::StoreConfig;
