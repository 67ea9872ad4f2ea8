//! Configuration types for Clinic Access

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_audit_capacity() -> usize {
    1000
}

/// Runtime configuration (clinic-access.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicConfig {
    /// Permission table to load instead of the built-in clinic table
    #[serde(default)]
    pub route_table: Option<PathBuf>,

    /// File backing the layout preferences
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,

    /// Number of access decisions kept by the audit log
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            route_table: None,
            preferences_file: None,
            audit_capacity: default_audit_capacity(),
        }
    }
}

impl ClinicConfig {
    /// Load configuration from a JSON file.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;

        if config.audit_capacity == 0 {
            return Err(crate::ClinicError::Config(
                "auditCapacity must be greater than zero".to_string(),
            ));
        }

        if let Some(base) = path.parent() {
            config.route_table = config.route_table.map(|p| resolve_relative(base, p));
            config.preferences_file = config.preferences_file.map(|p| resolve_relative(base, p));
        }

        Ok(config)
    }
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClinicError;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "routeTable": "/etc/clinic/routes.yaml",
            "auditCapacity": 50
        }"#;

        let config: ClinicConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.route_table, Some(PathBuf::from("/etc/clinic/routes.yaml")));
        assert!(config.preferences_file.is_none());
        assert_eq!(config.audit_capacity, 50);
    }

    #[test]
    fn test_config_defaults() {
        let config: ClinicConfig = serde_json::from_str("{}").unwrap();

        assert!(config.route_table.is_none());
        assert_eq!(config.audit_capacity, 1000);
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinic-access.json");
        std::fs::write(
            &path,
            r#"{"routeTable": "routes.yaml", "preferencesFile": "/var/prefs.json"}"#,
        )
        .unwrap();

        let config = ClinicConfig::from_file(&path).unwrap();
        assert_eq!(config.route_table, Some(dir.path().join("routes.yaml")));
        assert_eq!(config.preferences_file, Some(PathBuf::from("/var/prefs.json")));
    }

    #[test]
    fn test_from_file_rejects_zero_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinic-access.json");
        std::fs::write(&path, r#"{"auditCapacity": 0}"#).unwrap();

        let err = ClinicConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ClinicError::Config(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ClinicConfig::from_file(Path::new("/nonexistent/clinic-access.json")).unwrap_err();
        assert!(matches!(err, ClinicError::Io(_)));
    }
}
