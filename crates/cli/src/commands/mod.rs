//! CLI Commands

pub mod access;
pub mod routes;
pub mod nav;
pub mod audit;

pub use access::{CheckCommand, ResolveCommand};
pub use routes::{LintCommand, RoutesCommand, TableCommand};
pub use nav::{LayoutCommand, NavCommand};
pub use self::audit::AuditCommand;

use rbac::RoleSet;

/// Comma-separated role list, or `-` for an empty set
pub(crate) fn format_roles(roles: &RoleSet) -> String {
    if roles.is_empty() {
        return "-".to_string();
    }
    roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", ")
}
