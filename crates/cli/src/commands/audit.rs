//! clinic-access audit command

use crate::Context;
use audit::AccessAuditLog;
use clap::Args;
use console::style;
use serde::Deserialize;
use shared::{ActionVerb, Role};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// One request in a batch file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub path: String,
    pub role: Role,
    #[serde(default, alias = "actionVerb")]
    pub method: ActionVerb,
}

/// Read a YAML list of access requests
pub fn load_requests(path: &Path) -> anyhow::Result<Vec<AccessRequest>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

#[derive(Debug, Args)]
pub struct AuditCommand {
    /// YAML file listing `{path, role, method}` requests
    pub requests: PathBuf,

    /// Print the audit log as JSON
    #[arg(long)]
    pub json: bool,
}

impl AuditCommand {
    /// Evaluate every request into a fresh log
    pub fn evaluate(&self, ctx: &Context) -> anyhow::Result<AccessAuditLog> {
        let requests = load_requests(&self.requests)?;
        let mut log = AccessAuditLog::new(ctx.config.audit_capacity);

        for request in &requests {
            log.check(&ctx.resolver, &request.path, request.role, request.method);
        }
        Ok(log)
    }

    pub fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        let log = self.evaluate(ctx)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&log.export_json()?)?);
            return Ok(ExitCode::SUCCESS);
        }

        let stats = log.stats();
        for entry in log.recent(stats.total).into_iter().rev() {
            let verdict = if entry.allowed {
                style("allow").green()
            } else {
                style("deny ").red()
            };
            let pattern = entry.matched_pattern.as_deref().unwrap_or("(no entry)");
            println!(
                "{} {:<13} {:<6} {:<36} {}",
                verdict,
                entry.role,
                entry.verb,
                entry.path,
                style(pattern).dim()
            );
        }
        println!(
            "{} requests, {} denied, {} without a table entry",
            stats.total, stats.denied, stats.unmatched
        );
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUESTS: &str = r#"
- path: /billing
  role: CEO
- path: /billing
  role: DOCTOR
- path: /patient/abc123
  role: ADMIN
  method: DELETE
- path: /nonexistent
  role: NURSE
"#;

    #[test]
    fn test_load_requests() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.yaml");
        std::fs::write(&path, REQUESTS).unwrap();

        let requests = load_requests(&path).unwrap();
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[0].method, ActionVerb::Get);
        assert_eq!(requests[2].method, ActionVerb::Delete);
        assert_eq!(requests[3].role, Role::Nurse);
    }

    #[test]
    fn test_load_requests_any_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.yaml");
        std::fs::write(&path, "- path: /patient/1\n  role: admin\n  method: delete\n").unwrap();

        let requests = load_requests(&path).unwrap();
        assert_eq!(requests[0].role, Role::Admin);
        assert_eq!(requests[0].method, ActionVerb::Delete);
    }

    #[test]
    fn test_evaluate_records_every_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.yaml");
        std::fs::write(&path, REQUESTS).unwrap();

        let ctx = Context::load(None, None).unwrap();
        let command = AuditCommand {
            requests: path,
            json: false,
        };

        let log = command.evaluate(&ctx).unwrap();
        let stats = log.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.denied, 2);
        assert_eq!(stats.unmatched, 1);
    }

    #[test]
    fn test_missing_requests_file() {
        let ctx = Context::load(None, None).unwrap();
        let command = AuditCommand {
            requests: PathBuf::from("/nonexistent/requests.yaml"),
            json: true,
        };

        assert!(command.evaluate(&ctx).is_err());
    }
}
