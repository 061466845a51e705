//! Delivery module - dispatcher implementations
//!
//! Real SMS and email providers live behind the `DeliveryDispatcher` trait
//! from the core crate; this module ships the mock used in development,
//! demos, and tests.

pub mod mock_dispatcher;

pub use mock_dispatcher::MockDeliveryDispatcher;
