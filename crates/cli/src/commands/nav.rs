//! clinic-access nav / layout commands

use crate::Context;
use clap::{Args, Subcommand};
use console::style;
use preferences::{FilePreferenceStore, LayoutState, PreferenceStore};
use rbac::NavigationVisibility;
use shared::Role;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct NavCommand {
    /// Role whose sidebar is shown
    #[arg(short, long)]
    pub role: Role,

    /// Show every visible item, ignoring collapsed categories
    #[arg(long)]
    pub expand_all: bool,
}

impl NavCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        let store = FilePreferenceStore::open(ctx.preferences_path())?;
        let layout = LayoutState::load(store);
        let nav = NavigationVisibility::clinic(ctx.resolver.clone());

        print!("{}", render_sidebar(&nav, &layout, self.role, self.expand_all));
        Ok(ExitCode::SUCCESS)
    }
}

/// Sidebar as text. A closed sidebar shows category names only.
pub fn render_sidebar<S: PreferenceStore>(
    nav: &NavigationVisibility,
    layout: &LayoutState<S>,
    role: Role,
    expand_all: bool,
) -> String {
    let mut out = format!("Sidebar for {}\n", role);

    for category in nav.visible_categories(role) {
        let expanded = expand_all || (layout.sidebar_open() && layout.is_category_expanded(category.name));
        let marker = if expanded { "▾" } else { "▸" };
        out.push_str(&format!("{} {}\n", marker, category.name));

        if expanded {
            for item in &category.items {
                out.push_str(&format!("    {} {}\n", item.label, style(&item.path).dim()));
            }
        }
    }

    out
}

#[derive(Debug, Args)]
pub struct LayoutCommand {
    #[command(subcommand)]
    pub command: LayoutSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum LayoutSubcommand {
    /// Show the stored layout
    Show,
    /// Open or close the sidebar
    ToggleSidebar,
    /// Expand or collapse a sidebar category
    Toggle {
        /// Category name, e.g. Patients
        category: String,
    },
}

impl LayoutCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        let store = FilePreferenceStore::open(ctx.preferences_path())?;
        let mut layout = LayoutState::load(store);

        match &self.command {
            LayoutSubcommand::Show => {
                let nav = NavigationVisibility::clinic(ctx.resolver.clone());
                println!("Sidebar: {}", if layout.sidebar_open() { "open" } else { "closed" });
                for name in nav.category_names() {
                    let state = if layout.is_category_expanded(name) { "expanded" } else { "collapsed" };
                    println!("  {:<16} {}", name, state);
                }
            }
            LayoutSubcommand::ToggleSidebar => {
                let open = layout.toggle_sidebar()?;
                println!("Sidebar {}", if open { "opened" } else { "closed" });
            }
            LayoutSubcommand::Toggle { category } => {
                let nav = NavigationVisibility::clinic(ctx.resolver.clone());
                if !nav.category_names().contains(&category.as_str()) {
                    println!("{} unknown category '{}'", style("!").yellow(), category);
                    return Ok(ExitCode::FAILURE);
                }
                let expanded = layout.toggle_category(category)?;
                println!("{} {}", category, if expanded { "expanded" } else { "collapsed" });
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preferences::MemoryPreferenceStore;
    use rbac::RouteResolver;

    #[test]
    fn test_render_collapsed_sidebar_lists_categories_only() {
        let nav = NavigationVisibility::clinic(RouteResolver::builtin());
        let layout = LayoutState::load(MemoryPreferenceStore::new());

        let out = render_sidebar(&nav, &layout, Role::Pharmacist, false);
        assert!(out.contains("▸ Pharmacy"));
        assert!(!out.contains("Prescriptions"));
        assert!(!out.contains("Billing"));
    }

    #[test]
    fn test_render_expanded_category() {
        let nav = NavigationVisibility::clinic(RouteResolver::builtin());
        let mut layout = LayoutState::load(MemoryPreferenceStore::new());
        layout.set_category_expanded("Pharmacy", true).unwrap();

        let out = render_sidebar(&nav, &layout, Role::Pharmacist, false);
        assert!(out.contains("▾ Pharmacy"));
        assert!(out.contains("Prescriptions"));
        assert!(out.contains("Medications"));
    }

    #[test]
    fn test_closed_sidebar_hides_items_unless_expand_all() {
        let nav = NavigationVisibility::clinic(RouteResolver::builtin());
        let mut layout = LayoutState::load(MemoryPreferenceStore::new());
        layout.set_category_expanded("Pharmacy", true).unwrap();
        layout.set_sidebar_open(false).unwrap();

        assert!(!render_sidebar(&nav, &layout, Role::Pharmacist, false).contains("Medications"));
        assert!(render_sidebar(&nav, &layout, Role::Pharmacist, true).contains("Medications"));
    }
}
