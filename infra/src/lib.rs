//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Passlane backend,
//! following Clean Architecture principles. It provides the resilient store
//! session, the MySQL repositories behind the core persistence traits, and
//! the delivery and metrics implementations used in development.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Store**: resilient session over MySQL with retries, health checks,
//!   and a non-production degraded fallback
//! - **Database**: repository implementations using SQLx
//! - **Delivery**: dispatcher implementations for passcode messages
//! - **Metrics**: fire-and-forget event sinks

use std::sync::Arc;

use pl_shared::config::{Environment, StoreConfig};

// Re-export core types for convenience
pub use pl_core::errors::*;

/// Store module - resilient session over the durable store
pub mod store;

/// Database module - MySQL repository implementations using SQLx
pub mod database;

/// Delivery module - dispatcher implementations
pub mod delivery;

/// Metrics module - event sinks
pub mod metrics;

/// Build a store session from environment configuration
///
/// Reads `.env` when present, then `DATABASE_URL` and friends via
/// [`StoreConfig::from_env`], and picks strict or degraded failure handling
/// from the detected environment. The session is not connected yet; the
/// first repository call connects it.
pub fn store_session_from_env() -> Arc<store::StoreSession> {
    dotenvy::dotenv().ok();

    let config = StoreConfig::from_env();
    let environment = Environment::from_env();
    tracing::info!(
        environment = %environment,
        "Initializing store session from environment"
    );

    Arc::new(store::StoreSession::new(config, environment))
}
