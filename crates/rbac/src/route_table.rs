//! RouteTable - Ordered permission table with validation and linting

use crate::pattern::{RoutePattern, Segment};
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared::{ActionVerb, ClinicError, InvalidRouteError, Result, Role};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

/// Set of roles allowed on a route
pub type RoleSet = BTreeSet<Role>;

/// One row of the permission table.
///
/// `name` and `description` are documentation only and never take part in
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePermission {
    /// Path pattern, may contain `:param` segments
    pub path: String,

    /// Action verb this entry applies to
    #[serde(rename = "method", alias = "actionVerb", default)]
    pub verb: ActionVerb,

    /// Roles allowed to perform the action
    pub roles: RoleSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RoutePermission {
    /// Create an entry with no documentation fields
    pub fn new(path: impl Into<String>, verb: ActionVerb, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            path: path.into(),
            verb,
            roles: roles.into_iter().collect(),
            name: None,
            description: None,
        }
    }

    /// Builder: set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// A permission together with its compiled pattern
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub permission: RoutePermission,
    pub pattern: RoutePattern,
}

/// An entry that can never be selected because an earlier entry has the same
/// path and verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintFinding {
    /// Index of the unreachable entry
    pub index: usize,
    /// Index of the earlier entry that wins
    pub shadowed_by: usize,
    pub path: String,
    pub verb: ActionVerb,
    /// Whether both entries grant the same roles
    pub same_roles: bool,
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry #{} {} {} is shadowed by entry #{}",
            self.index, self.verb, self.path, self.shadowed_by
        )?;
        if !self.same_roles {
            f.write_str(" (roles differ)")?;
        }
        Ok(())
    }
}

const TABLE_LAYOUT: &str = "route table must be a list of entries or a mapping with a `routes` list";

fn entry_error(index: usize, path: Option<&str>, reason: impl fmt::Display) -> ClinicError {
    InvalidRouteError {
        index,
        path: path.unwrap_or("").to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Decode a YAML table: either a bare list or `{ routes: [...] }`. Entries are
/// decoded one by one so errors name the offending entry.
fn yaml_permissions(value: serde_yaml::Value) -> Result<Vec<RoutePermission>> {
    let items = match value {
        serde_yaml::Value::Sequence(items) => items,
        serde_yaml::Value::Mapping(mut map) => match map.remove("routes") {
            Some(serde_yaml::Value::Sequence(items)) => items,
            _ => return Err(ClinicError::Config(TABLE_LAYOUT.to_string())),
        },
        _ => return Err(ClinicError::Config(TABLE_LAYOUT.to_string())),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let path = item.get("path").and_then(|p| p.as_str()).map(str::to_string);
            serde_yaml::from_value(item).map_err(|e| entry_error(index, path.as_deref(), e))
        })
        .collect()
}

/// JSON counterpart of [`yaml_permissions`]
fn json_permissions(value: serde_json::Value) -> Result<Vec<RoutePermission>> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("routes") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Err(ClinicError::Config(TABLE_LAYOUT.to_string())),
        },
        _ => return Err(ClinicError::Config(TABLE_LAYOUT.to_string())),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let path = item.get("path").and_then(|p| p.as_str()).map(str::to_string);
            serde_json::from_value(item).map_err(|e| entry_error(index, path.as_deref(), e))
        })
        .collect()
}

/// Immutable, ordered permission table. Order is significant: the first
/// matching entry wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

fn param_name_regex() -> &'static Regex {
    static PARAM_NAME: OnceLock<Regex> = OnceLock::new();
    PARAM_NAME.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("parameter name regex is valid"))
}

impl RouteTable {
    /// Build a table from permissions, validating every entry
    pub fn new(permissions: Vec<RoutePermission>) -> Result<Self> {
        for (index, permission) in permissions.iter().enumerate() {
            validate(index, permission)?;
        }

        let table = Self::compile(permissions);
        for finding in table.lint() {
            tracing::warn!(%finding, "route table contains a shadowed entry");
        }
        Ok(table)
    }

    /// Compile without validation. Only used for tables known to be valid.
    pub(crate) fn compile(permissions: Vec<RoutePermission>) -> Self {
        let entries = permissions
            .into_iter()
            .map(|permission| RouteEntry {
                pattern: RoutePattern::parse(&permission.path),
                permission,
            })
            .collect();
        Self { entries }
    }

    /// Parse a YAML table
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        Self::new(yaml_permissions(value)?)
    }

    /// Parse a JSON table
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::new(json_permissions(value)?)
    }

    /// Load a table file. `.json` files are read as JSON, everything else as YAML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let table = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        tracing::debug!(path = %path.display(), entries = table.len(), "loaded route table");
        Ok(table)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Permissions in table order
    pub fn permissions(&self) -> impl Iterator<Item = &RoutePermission> {
        self.entries.iter().map(|e| &e.permission)
    }

    /// Permissions granting `role`, in table order
    pub fn permissions_for(&self, role: Role) -> impl Iterator<Item = &RoutePermission> {
        self.permissions().filter(move |p| p.allows(role))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report entries repeating the path and verb of an earlier entry. Such an
    /// entry is never selected: the exact pass and the pattern pass both stop
    /// at the earlier one.
    ///
    /// Duplicates are reported, never removed.
    pub fn lint(&self) -> Vec<LintFinding> {
        let mut findings = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            let earlier = self.entries[..index].iter().position(|other| {
                other.permission.verb == entry.permission.verb && other.permission.path == entry.permission.path
            });

            if let Some(shadowed_by) = earlier {
                findings.push(LintFinding {
                    index,
                    shadowed_by,
                    path: entry.permission.path.clone(),
                    verb: entry.permission.verb,
                    same_roles: self.entries[shadowed_by].permission.roles == entry.permission.roles,
                });
            }
        }

        findings
    }
}

fn validate(index: usize, permission: &RoutePermission) -> Result<()> {
    let invalid = |reason: String| -> ClinicError {
        InvalidRouteError {
            index,
            path: permission.path.clone(),
            reason,
        }
        .into()
    };

    if !permission.path.starts_with('/') {
        return Err(invalid("path must start with '/'".to_string()));
    }

    for segment in RoutePattern::parse(&permission.path).segments() {
        if let Segment::Param(name) = segment {
            if !param_name_regex().is_match(name) {
                return Err(invalid(format!("invalid parameter name ':{}'", name)));
            }
        }
    }

    if permission.roles.is_empty() {
        return Err(invalid("at least one role is required".to_string()));
    }

    Ok(())
}
