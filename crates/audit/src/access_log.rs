//! AccessAuditLog - Audit trail of route access decisions

use rbac::RouteResolver;
use serde::{Deserialize, Serialize};
use shared::{ActionVerb, Role};
use std::collections::VecDeque;

/// One access decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub role: Role,
    pub verb: ActionVerb,
    pub path: String,
    /// Table pattern that governed the decision, if any entry matched
    pub matched_pattern: Option<String>,
    pub allowed: bool,
}

/// Bounded in-memory audit log; the oldest entries are evicted first
#[derive(Debug)]
pub struct AccessAuditLog {
    entries: VecDeque<AuditEntry>,
    max_entries: usize,
}

impl AccessAuditLog {
    /// Create a log keeping at most `max_entries` decisions
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries.min(1024)),
            max_entries,
        }
    }

    /// Append an entry, evicting the oldest one at capacity
    pub fn record(&mut self, entry: AuditEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Resolve an access request and record the decision
    pub fn check(&mut self, resolver: &RouteResolver, path: &str, role: Role, verb: ActionVerb) -> bool {
        let matched = resolver.match_route(path, verb);
        let matched_pattern = matched.as_ref().map(|m| m.permission.path.clone());
        let allowed = matched.map(|m| m.permission.allows(role)).unwrap_or(false);

        if !allowed {
            tracing::info!(%role, %verb, path, "access denied");
        }

        self.record(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            role,
            verb,
            path: path.to_string(),
            matched_pattern,
            allowed,
        });

        allowed
    }

    /// Most recent entries first
    pub fn recent(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Most recent denials first
    pub fn recent_denials(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !e.allowed)
            .take(limit)
            .collect()
    }

    pub fn stats(&self) -> AuditStats {
        AuditStats {
            total: self.entries.len(),
            denied: self.entries.iter().filter(|e| !e.allowed).count(),
            unmatched: self.entries.iter().filter(|e| e.matched_pattern.is_none()).count(),
        }
    }

    /// Entries in chronological order as a JSON array
    pub fn export_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.entries)
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

/// Audit statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditStats {
    pub total: usize,
    pub denied: usize,
    /// Requests that matched no table entry
    pub unmatched: usize,
}

impl Default for AccessAuditLog {
    fn default() -> Self {
        Self::new(1000)
    }
}
