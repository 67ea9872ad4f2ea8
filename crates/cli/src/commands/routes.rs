//! clinic-access routes / table / lint commands

use super::format_roles;
use crate::Context;
use clap::Args;
use console::style;
use rbac::RoutePermission;
use shared::Role;
use std::process::ExitCode;

fn print_entry(index: usize, permission: &RoutePermission) {
    let name = permission.name.as_deref().unwrap_or("");
    println!(
        "{:>3}  {:<6} {:<40} {:<28} {}",
        index,
        permission.verb.as_str(),
        permission.path,
        format_roles(&permission.roles),
        style(name).dim()
    );
}

/// Entries granting `role`, paired with their table index
pub fn accessible_entries(ctx: &Context, role: Role) -> Vec<(usize, &RoutePermission)> {
    ctx.resolver
        .table()
        .permissions()
        .enumerate()
        .filter(|(_, permission)| permission.allows(role))
        .collect()
}

#[derive(Debug, Args)]
pub struct RoutesCommand {
    /// Role whose accessible routes are listed
    #[arg(short, long)]
    pub role: Role,
}

impl RoutesCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        let table = ctx.resolver.table();
        let routes = accessible_entries(ctx, self.role);

        println!("Routes accessible to {} ({} of {}):", style(self.role).bold(), routes.len(), table.len());
        for (index, permission) in routes {
            print_entry(index, permission);
        }
        Ok(ExitCode::SUCCESS)
    }
}

#[derive(Debug, Args)]
pub struct TableCommand {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

impl TableCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        let table = ctx.resolver.table();

        if self.json {
            let permissions: Vec<&RoutePermission> = table.permissions().collect();
            println!("{}", serde_json::to_string_pretty(&permissions)?);
            return Ok(ExitCode::SUCCESS);
        }

        for (index, permission) in table.permissions().enumerate() {
            print_entry(index, permission);
        }
        Ok(ExitCode::SUCCESS)
    }
}

#[derive(Debug, Args)]
pub struct LintCommand {}

impl LintCommand {
    /// Exit status 1 when any entry is shadowed
    pub fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        let findings = ctx.resolver.table().lint();

        if findings.is_empty() {
            println!("{} no shadowed entries", style("✓").green());
            return Ok(ExitCode::SUCCESS);
        }

        for finding in &findings {
            println!("{} {}", style("!").yellow().bold(), finding);
        }
        println!("{} shadowed entr{}", findings.len(), if findings.len() == 1 { "y" } else { "ies" });
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessible_entries_keep_table_index() {
        let ctx = Context::load(None, None).unwrap();
        let entries = accessible_entries(&ctx, Role::Pharmacist);
        let permissions: Vec<&RoutePermission> = ctx.resolver.table().permissions().collect();

        assert!(!entries.is_empty());
        for (index, permission) in &entries {
            assert_eq!(permissions[*index], *permission);
        }
        // Filtering must not renumber
        assert!(entries.iter().enumerate().any(|(position, (index, _))| position != *index));
    }
}
