//! RouteResolver - Maps (path, verb) to the roles allowed on it

use crate::pattern::RouteParams;
use crate::route_table::{RoleSet, RoutePermission, RouteTable};
use shared::{ActionVerb, Role};
use std::sync::Arc;

/// The entry selected for a concrete path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Position of the entry in the table
    pub index: usize,
    pub permission: &'a RoutePermission,
    /// Values captured by `:param` segments
    pub params: RouteParams,
}

/// Stateless lookup over an immutable permission table.
///
/// Resolution is fail-closed: a path with no entry resolves to an empty role
/// set, which denies every role.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    table: Arc<RouteTable>,
}

impl RouteResolver {
    /// Create a resolver over a table
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self { table }
    }

    /// Resolver over the built-in clinic table
    pub fn builtin() -> Self {
        Self::new(RouteTable::builtin())
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Find the entry governing `(path, verb)`.
    ///
    /// An entry whose stored path equals `path` verbatim wins over pattern
    /// matches, then entries are tried segment-wise in table order.
    pub fn match_route(&self, path: &str, verb: ActionVerb) -> Option<RouteMatch<'_>> {
        let entries = self.table.entries();

        let exact = entries
            .iter()
            .position(|e| e.permission.verb == verb && e.permission.path == path)
            .and_then(|index| {
                entries[index]
                    .pattern
                    .captures(path)
                    .map(|params| (index, params))
            });

        let found = exact.or_else(|| {
            entries.iter().enumerate().find_map(|(index, e)| {
                if e.permission.verb != verb {
                    return None;
                }
                e.pattern.captures(path).map(|params| (index, params))
            })
        });

        match found {
            Some((index, params)) => {
                let permission = &entries[index].permission;
                tracing::debug!(path, %verb, pattern = %permission.path, "route resolved");
                Some(RouteMatch {
                    index,
                    permission,
                    params,
                })
            }
            None => {
                tracing::debug!(path, %verb, "no route entry, denying");
                None
            }
        }
    }

    /// Roles allowed to perform `verb` on `path`; empty when nothing matches
    pub fn resolve_roles(&self, path: &str, verb: ActionVerb) -> RoleSet {
        self.match_route(path, verb)
            .map(|m| m.permission.roles.clone())
            .unwrap_or_default()
    }

    /// `resolve_roles` with the default verb (GET)
    pub fn resolve_roles_get(&self, path: &str) -> RoleSet {
        self.resolve_roles(path, ActionVerb::default())
    }

    /// Whether `role` may perform `verb` on `path`
    pub fn is_authorized(&self, path: &str, role: Role, verb: ActionVerb) -> bool {
        self.match_route(path, verb)
            .map(|m| m.permission.allows(role))
            .unwrap_or(false)
    }

    /// Every entry that grants `role`, in table order
    pub fn accessible_routes(&self, role: Role) -> Vec<&RoutePermission> {
        self.table.permissions_for(role).collect()
    }
}

impl Default for RouteResolver {
    fn default() -> Self {
        Self::builtin()
    }
}
