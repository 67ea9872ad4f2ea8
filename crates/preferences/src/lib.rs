//! # Clinic Access Preferences
//!
//! UI preferences persisted across sessions.
//!
//! ## Components
//!
//! - `PreferenceStore` - Injected key-value store
//! - `MemoryPreferenceStore` / `FilePreferenceStore` - Store implementations
//! - `LayoutState` - Sidebar open flag and per-category expansion

mod store;
mod layout;

pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use layout::{LayoutState, SIDEBAR_CATEGORIES_KEY, SIDEBAR_OPEN_KEY};
