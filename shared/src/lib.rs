//! Shared utilities and common types for the Passlane server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment, durable store, logging)
//! - Utility functions (contact masking, email detection)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig, StoreConfig};
pub use utils::contact;
