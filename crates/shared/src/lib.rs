//! # Clinic Access Shared
//!
//! Common types used across all Clinic Access crates.

pub mod error;
pub mod role;
pub mod verb;
pub mod config;

// Re-exports
pub use error::*;
pub use role::*;
pub use verb::*;
pub use config::*;
