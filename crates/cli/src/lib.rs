//! # Clinic Access CLI
//!
//! Command implementations for the `clinic-access` binary.

pub mod commands;
pub mod context;

pub use context::Context;
