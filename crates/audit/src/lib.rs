//! # Clinic Access Audit
//!
//! Bounded log of route access decisions.

mod access_log;

pub use access_log::{AccessAuditLog, AuditEntry, AuditStats};
