//! # Clinic Access RBAC
//!
//! Role-based route permissions for the clinic application.
//!
//! ## Components
//!
//! - `RoutePattern` - Segment-wise `:param` pattern matching
//! - `RouteTable` - Ordered permission table, built-in or loaded from YAML/JSON
//! - `RouteResolver` - Maps `(path, verb)` to allowed roles, fail-closed
//! - `NavigationVisibility` - Sidebar filtering by role

pub mod pattern;
pub mod route_table;
pub mod builtin;
pub mod route_resolver;
pub mod navigation;

pub use pattern::{RouteParams, RoutePattern, Segment};
pub use route_table::{LintFinding, RoleSet, RouteEntry, RoutePermission, RouteTable};
pub use builtin::clinic_permissions;
pub use route_resolver::{RouteMatch, RouteResolver};
pub use navigation::{clinic_sidebar, NavCategory, NavItem, NavigationVisibility};
