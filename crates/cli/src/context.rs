//! Shared state for CLI commands

use anyhow::Context as _;
use rbac::{RouteResolver, RouteTable};
use shared::ClinicConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Preferences file used when the configuration names none
pub const DEFAULT_PREFERENCES_FILE: &str = "clinic-access.prefs.json";

/// Configuration and resolver shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub config: ClinicConfig,
    pub resolver: RouteResolver,
}

impl Context {
    /// Load the configuration, then the route table.
    ///
    /// `--table` wins over the configured table, which wins over the built-in
    /// clinic table.
    pub fn load(config_path: Option<&Path>, table_path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => ClinicConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ClinicConfig::default(),
        };

        let table_path = table_path.map(Path::to_path_buf).or_else(|| config.route_table.clone());
        let resolver = match table_path {
            Some(path) => {
                let table = RouteTable::from_file(&path)
                    .with_context(|| format!("failed to load route table {}", path.display()))?;
                tracing::info!(path = %path.display(), entries = table.len(), "using route table");
                RouteResolver::new(Arc::new(table))
            }
            None => RouteResolver::builtin(),
        };

        Ok(Self { config, resolver })
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.config
            .preferences_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_FILE))
    }
}
