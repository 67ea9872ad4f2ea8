//! clinic-access resolve / check commands

use super::format_roles;
use crate::Context;
use clap::Args;
use console::style;
use shared::{ActionVerb, Role};
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Request path, e.g. /patient/507f1f77
    pub path: String,

    /// Action verb
    #[arg(short, long, default_value_t = ActionVerb::Get)]
    pub method: ActionVerb,
}

impl ResolveCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        match ctx.resolver.match_route(&self.path, self.method) {
            Some(matched) => {
                println!(
                    "{} {} -> {} (entry #{})",
                    self.method,
                    self.path,
                    style(&matched.permission.path).cyan(),
                    matched.index
                );
                for (name, value) in &matched.params {
                    println!("  :{} = {}", name, value);
                }
                println!("Allowed roles: {}", format_roles(&matched.permission.roles));
            }
            None => {
                println!(
                    "{} {} -> {}",
                    self.method,
                    self.path,
                    style("no entry, nobody is authorized").yellow()
                );
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Request path
    pub path: String,

    /// Role to check
    #[arg(short, long)]
    pub role: Role,

    /// Action verb
    #[arg(short, long, default_value_t = ActionVerb::Get)]
    pub method: ActionVerb,
}

impl CheckCommand {
    pub fn is_allowed(&self, ctx: &Context) -> bool {
        ctx.resolver.is_authorized(&self.path, self.role, self.method)
    }

    /// Exit status 1 when denied
    pub fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        let allowed = self.is_allowed(ctx);
        let verdict = if allowed {
            style("ALLOWED").green().bold()
        } else {
            style("DENIED").red().bold()
        };

        println!("{} {} {} as {}", verdict, self.method, self.path, self.role);
        Ok(if allowed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        check: CheckCommand,
    }

    #[test]
    fn test_check_parses_role_and_method() {
        let cli = TestCli::parse_from(["test", "/patient/1", "--role", "nurse", "--method", "delete"]);

        assert_eq!(cli.check.role, Role::Nurse);
        assert_eq!(cli.check.method, ActionVerb::Delete);
    }

    #[test]
    fn test_check_method_defaults_to_get() {
        let cli = TestCli::parse_from(["test", "/billing", "-r", "CEO"]);
        assert_eq!(cli.check.method, ActionVerb::Get);
    }

    #[test]
    fn test_check_rejects_unknown_role() {
        assert!(TestCli::try_parse_from(["test", "/billing", "-r", "janitor"]).is_err());
    }

    #[test]
    fn test_is_allowed() {
        let ctx = Context::load(None, None).unwrap();
        let check = |role| CheckCommand {
            path: "/billing".to_string(),
            role,
            method: ActionVerb::Get,
        };

        assert!(check(Role::Ceo).is_allowed(&ctx));
        assert!(!check(Role::Doctor).is_allowed(&ctx));
    }
}
