//! Domain layer containing business entities and their lifecycle rules.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
