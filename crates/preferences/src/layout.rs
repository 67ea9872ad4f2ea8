//! LayoutState - Sidebar layout preferences

use crate::store::PreferenceStore;
use shared::Result;
use std::collections::BTreeMap;

/// Key of the sidebar open/closed flag
pub const SIDEBAR_OPEN_KEY: &str = "sidebarOpen";

/// Key of the per-category expansion map (JSON object)
pub const SIDEBAR_CATEGORIES_KEY: &str = "sidebarCategories";

/// Sidebar layout, read once at mount and written back on every change
#[derive(Debug)]
pub struct LayoutState<S: PreferenceStore> {
    store: S,
    sidebar_open: bool,
    categories: BTreeMap<String, bool>,
}

impl<S: PreferenceStore> LayoutState<S> {
    /// Read the layout from the store. Missing or unreadable values fall back
    /// to an open sidebar with every category collapsed.
    pub fn load(store: S) -> Self {
        let sidebar_open = match store.get(SIDEBAR_OPEN_KEY) {
            None => true,
            Some(value) => value.parse::<bool>().unwrap_or_else(|_| {
                tracing::warn!(key = SIDEBAR_OPEN_KEY, %value, "ignoring unreadable preference");
                true
            }),
        };

        let categories = match store.get(SIDEBAR_CATEGORIES_KEY) {
            None => BTreeMap::new(),
            Some(value) => serde_json::from_str(&value).unwrap_or_else(|err| {
                tracing::warn!(key = SIDEBAR_CATEGORIES_KEY, %err, "ignoring unreadable preference");
                BTreeMap::new()
            }),
        };

        Self {
            store,
            sidebar_open,
            categories,
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn set_sidebar_open(&mut self, open: bool) -> Result<()> {
        self.sidebar_open = open;
        self.store.set(SIDEBAR_OPEN_KEY, if open { "true" } else { "false" })
    }

    /// Flip the sidebar, returning the new state
    pub fn toggle_sidebar(&mut self) -> Result<bool> {
        let open = !self.sidebar_open;
        self.set_sidebar_open(open)?;
        Ok(open)
    }

    /// Categories absent from the map are collapsed
    pub fn is_category_expanded(&self, category: &str) -> bool {
        self.categories.get(category).copied().unwrap_or(false)
    }

    pub fn set_category_expanded(&mut self, category: &str, expanded: bool) -> Result<()> {
        self.categories.insert(category.to_string(), expanded);
        self.persist_categories()
    }

    /// Flip one category, returning its new state
    pub fn toggle_category(&mut self, category: &str) -> Result<bool> {
        let expanded = !self.is_category_expanded(category);
        self.set_category_expanded(category, expanded)?;
        Ok(expanded)
    }

    pub fn categories(&self) -> &BTreeMap<String, bool> {
        &self.categories
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist_categories(&mut self) -> Result<()> {
        let value = serde_json::to_string(&self.categories)?;
        self.store.set(SIDEBAR_CATEGORIES_KEY, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FilePreferenceStore, MemoryPreferenceStore};

    #[test]
    fn test_defaults_on_empty_store() {
        let layout = LayoutState::load(MemoryPreferenceStore::new());

        assert!(layout.sidebar_open());
        assert!(!layout.is_category_expanded("Patients"));
        assert!(layout.categories().is_empty());
        // Loading alone writes nothing
        assert!(layout.store().is_empty());
    }

    #[test]
    fn test_every_change_is_written() {
        let mut layout = LayoutState::load(MemoryPreferenceStore::new());

        layout.set_sidebar_open(false).unwrap();
        assert_eq!(layout.store().get(SIDEBAR_OPEN_KEY).as_deref(), Some("false"));

        layout.set_category_expanded("Billing", true).unwrap();
        assert_eq!(
            layout.store().get(SIDEBAR_CATEGORIES_KEY).as_deref(),
            Some(r#"{"Billing":true}"#)
        );
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut layout = LayoutState::load(MemoryPreferenceStore::new());

        assert!(!layout.toggle_sidebar().unwrap());
        assert!(layout.toggle_sidebar().unwrap());
        assert_eq!(layout.store().get(SIDEBAR_OPEN_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_toggle_category() {
        let mut layout = LayoutState::load(MemoryPreferenceStore::new());

        assert!(layout.toggle_category("Laboratory").unwrap());
        assert!(layout.is_category_expanded("Laboratory"));
        assert!(!layout.toggle_category("Laboratory").unwrap());
        assert!(!layout.is_category_expanded("Laboratory"));
    }

    #[test]
    fn test_reads_existing_values() {
        let mut store = MemoryPreferenceStore::new();
        store.set(SIDEBAR_OPEN_KEY, "false").unwrap();
        store
            .set(SIDEBAR_CATEGORIES_KEY, r#"{"Patients":true,"Billing":false}"#)
            .unwrap();

        let layout = LayoutState::load(store);
        assert!(!layout.sidebar_open());
        assert!(layout.is_category_expanded("Patients"));
        assert!(!layout.is_category_expanded("Billing"));
    }

    #[test]
    fn test_unreadable_values_fall_back_to_defaults() {
        let mut store = MemoryPreferenceStore::new();
        store.set(SIDEBAR_OPEN_KEY, "yes please").unwrap();
        store.set(SIDEBAR_CATEGORIES_KEY, "[1, 2").unwrap();

        let layout = LayoutState::load(store);
        assert!(layout.sidebar_open());
        assert!(layout.categories().is_empty());
    }

    #[test]
    fn test_survives_reload_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");

        {
            let mut layout = LayoutState::load(FilePreferenceStore::open(&path).unwrap());
            layout.set_sidebar_open(false).unwrap();
            layout.set_category_expanded("Radiology", true).unwrap();
        }

        let layout = LayoutState::load(FilePreferenceStore::open(&path).unwrap());
        assert!(!layout.sidebar_open());
        assert!(layout.is_category_expanded("Radiology"));
    }
}
