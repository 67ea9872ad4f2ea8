//! clinic-access - Inspect and check clinic route permissions
//!
//! Usage:
//!   clinic-access resolve <path> [-m METHOD]        - Show roles allowed on a route
//!   clinic-access check <path> -r ROLE [-m METHOD]  - Check one role (exit 1 on deny)
//!   clinic-access routes -r ROLE                    - List routes a role can reach
//!   clinic-access table [--json]                    - Print the permission table
//!   clinic-access lint                              - Report shadowed table entries
//!   clinic-access nav -r ROLE                       - Render the sidebar for a role
//!   clinic-access layout show|toggle-sidebar|toggle - Manage sidebar preferences
//!   clinic-access audit <requests.yaml> [--json]    - Evaluate a batch of requests

use clap::{Parser, Subcommand};
use cli::commands::{
    AuditCommand, CheckCommand, LayoutCommand, LintCommand, NavCommand, ResolveCommand, RoutesCommand,
    TableCommand,
};
use cli::Context;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "clinic-access")]
#[command(about = "Clinic Access - Role-based route permissions for the clinic application")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Route table to use instead of the configured or built-in one
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the roles allowed on a route
    Resolve(ResolveCommand),
    /// Check whether a role may access a route
    Check(CheckCommand),
    /// List the routes a role can reach
    Routes(RoutesCommand),
    /// Print the permission table
    Table(TableCommand),
    /// Report table entries that can never match
    Lint(LintCommand),
    /// Render the sidebar visible to a role
    Nav(NavCommand),
    /// Sidebar layout preferences
    Layout(LayoutCommand),
    /// Evaluate a batch of access requests
    Audit(AuditCommand),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = Context::load(cli.config.as_deref(), cli.table.as_deref())?;

    match cli.command {
        Commands::Resolve(cmd) => cmd.run(&ctx),
        Commands::Check(cmd) => cmd.run(&ctx),
        Commands::Routes(cmd) => cmd.run(&ctx),
        Commands::Table(cmd) => cmd.run(&ctx),
        Commands::Lint(cmd) => cmd.run(&ctx),
        Commands::Nav(cmd) => cmd.run(&ctx),
        Commands::Layout(cmd) => cmd.run(&ctx),
        Commands::Audit(cmd) => cmd.run(&ctx),
    }
}
