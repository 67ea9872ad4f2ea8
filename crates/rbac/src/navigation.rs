//! NavigationVisibility - Sidebar filtering by role

use crate::route_resolver::RouteResolver;
use serde::{Deserialize, Serialize};
use shared::{ActionVerb, Role};

/// A sidebar link. Presentation only; authorization comes from the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub label: String,
    pub path: String,
    pub category: String,
    #[serde(default)]
    pub verb: ActionVerb,
}

impl NavItem {
    pub fn new(category: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            category: category.into(),
            verb: ActionVerb::Get,
        }
    }
}

/// Visible items of one sidebar category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCategory<'a> {
    pub name: &'a str,
    pub items: Vec<&'a NavItem>,
}

/// Decides which sidebar links a role gets to see
#[derive(Debug, Clone)]
pub struct NavigationVisibility {
    resolver: RouteResolver,
    items: Vec<NavItem>,
}

impl NavigationVisibility {
    pub fn new(resolver: RouteResolver, items: Vec<NavItem>) -> Self {
        Self { resolver, items }
    }

    /// The clinic sidebar over the given resolver
    pub fn clinic(resolver: RouteResolver) -> Self {
        Self::new(resolver, clinic_sidebar())
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Check if a single item is visible for a role
    pub fn is_visible(&self, item: &NavItem, role: Role) -> bool {
        self.resolver.is_authorized(&item.path, role, item.verb)
    }

    /// Items the role may open, in declaration order
    pub fn visible_items(&self, role: Role) -> Vec<&NavItem> {
        self.items
            .iter()
            .filter(|item| self.is_visible(item, role))
            .collect()
    }

    /// Visible items grouped by category, in first-seen category order.
    /// Categories without any visible item are left out.
    pub fn visible_categories(&self, role: Role) -> Vec<NavCategory<'_>> {
        let mut categories: Vec<NavCategory<'_>> = Vec::new();

        for item in self.visible_items(role) {
            match categories.iter().position(|c| c.name == item.category) {
                Some(index) => categories[index].items.push(item),
                None => categories.push(NavCategory {
                    name: &item.category,
                    items: vec![item],
                }),
            }
        }

        categories
    }

    /// Names of every category, visible or not, in first-seen order
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for item in &self.items {
            if !names.contains(&item.category.as_str()) {
                names.push(&item.category);
            }
        }
        names
    }
}

/// Sidebar of the clinic application
pub fn clinic_sidebar() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", "Dashboard", "/dashboard"),
        NavItem::new("Patients", "Patient List", "/patient"),
        NavItem::new("Patients", "New Patient", "/patient/new"),
        NavItem::new("Examinations", "Examinations", "/examination"),
        NavItem::new("Pharmacy", "Prescriptions", "/prescription"),
        NavItem::new("Pharmacy", "Medications", "/medication"),
        NavItem::new("Laboratory", "Lab Orders", "/lab-order"),
        NavItem::new("Laboratory", "Analysis Parameters", "/analysis-parameter"),
        NavItem::new("Radiology", "Radiology Orders", "/radiology-order"),
        NavItem::new("Inpatient", "Rooms & Beds", "/inpatient/room"),
        NavItem::new("Billing", "Invoices", "/billing"),
        NavItem::new("Billing", "Services", "/service"),
        NavItem::new("Reports", "Reports", "/report"),
        NavItem::new("Administration", "Users", "/user"),
        NavItem::new("Administration", "Diagnoses", "/diagnosis"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route_table::{RoutePermission, RouteTable};
    use std::sync::Arc;

    fn labels(items: &[&NavItem]) -> Vec<String> {
        items.iter().map(|i| i.label.clone()).collect()
    }

    #[test]
    fn test_ceo_sees_management_items() {
        let nav = NavigationVisibility::clinic(RouteResolver::builtin());
        let visible = nav.visible_items(Role::Ceo);

        assert!(labels(&visible).contains(&"Invoices".to_string()));
        assert!(labels(&visible).contains(&"Users".to_string()));
        assert!(labels(&visible).contains(&"New Patient".to_string()));
    }

    #[test]
    fn test_pharmacist_sidebar() {
        let nav = NavigationVisibility::clinic(RouteResolver::builtin());
        let visible = nav.visible_items(Role::Pharmacist);

        assert_eq!(
            labels(&visible),
            vec!["Dashboard", "Prescriptions", "Medications"]
        );
    }

    #[test]
    fn test_receptionist_does_not_see_invoice_list() {
        let nav = NavigationVisibility::clinic(RouteResolver::builtin());
        let visible = labels(&nav.visible_items(Role::Receptionist));

        assert!(!visible.contains(&"Invoices".to_string()));
        assert!(visible.contains(&"Services".to_string()));
        assert!(visible.contains(&"New Patient".to_string()));
    }

    #[test]
    fn test_visible_categories_drop_empty_groups() {
        let nav = NavigationVisibility::clinic(RouteResolver::builtin());
        let categories = nav.visible_categories(Role::Nurse);
        let names: Vec<&str> = categories.iter().map(|c| c.name).collect();

        assert_eq!(
            names,
            vec!["Dashboard", "Patients", "Examinations", "Pharmacy", "Laboratory", "Inpatient"]
        );

        let patients = &categories[1];
        assert_eq!(labels(&patients.items), vec!["Patient List"]);
    }

    #[test]
    fn test_item_verb_is_respected() {
        let table = RouteTable::new(vec![
            RoutePermission::new("/report", ActionVerb::Get, [Role::Ceo]),
            RoutePermission::new("/report", ActionVerb::Post, [Role::Admin]),
        ])
        .unwrap();
        let mut generate = NavItem::new("Reports", "Generate Report", "/report");
        generate.verb = ActionVerb::Post;

        let nav = NavigationVisibility::new(
            RouteResolver::new(Arc::new(table)),
            vec![NavItem::new("Reports", "Reports", "/report"), generate],
        );

        assert_eq!(labels(&nav.visible_items(Role::Ceo)), vec!["Reports"]);
        assert_eq!(labels(&nav.visible_items(Role::Admin)), vec!["Generate Report"]);
    }

    #[test]
    fn test_items_without_route_are_hidden() {
        let nav = NavigationVisibility::new(
            RouteResolver::builtin(),
            vec![NavItem::new("Misc", "Unknown", "/nonexistent")],
        );

        for role in Role::ALL {
            assert!(nav.visible_items(role).is_empty());
        }
    }

    #[test]
    fn test_category_names() {
        let nav = NavigationVisibility::clinic(RouteResolver::builtin());
        let names = nav.category_names();

        assert_eq!(names.first(), Some(&"Dashboard"));
        assert_eq!(names.len(), 10);
    }
}
