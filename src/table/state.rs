//! Persisted table view state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::store::{keys, KeyedStore};

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Search, paging, and filter state for one list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableState {
    /// Free-text search string.
    pub search: String,
    /// Current page, 1-based.
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
    /// Column filters, key unique per column.
    pub filters: HashMap<String, String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filters: HashMap::new(),
        }
    }
}

/// View-state manager for one named list view.
///
/// State is loaded once at construction and written back after every
/// mutation. Any change to search text, page size, or filters resets the
/// current page to 1.
pub struct TableView<'a> {
    store: &'a KeyedStore,
    key: String,
    state: TableState,
}

impl<'a> TableView<'a> {
    /// Load (or initialize) the state for `namespace`.
    pub fn load(store: &'a KeyedStore, namespace: &str) -> Self {
        let key = keys::table_state(namespace);
        let state = store.get(&key, TableState::default());
        Self { store, key, state }
    }

    pub fn search(&self) -> &str {
        &self.state.search
    }

    pub fn page(&self) -> u32 {
        self.state.page
    }

    pub fn page_size(&self) -> u32 {
        self.state.page_size
    }

    pub fn filters(&self) -> &HashMap<String, String> {
        &self.state.filters
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Set the search text. Resets page to 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search = text.into();
        self.state.page = 1;
        self.persist();
    }

    /// Jump to a page. Values below 1 are clamped to 1.
    pub fn set_page(&mut self, page: u32) {
        self.state.page = page.max(1);
        self.persist();
    }

    /// Change rows per page. Resets page to 1; values below 1 are clamped.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.state.page_size = page_size.max(1);
        self.state.page = 1;
        self.persist();
    }

    /// Set a column filter. Resets page to 1.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.state.filters.insert(key.into(), value.into());
        self.state.page = 1;
        self.persist();
    }

    /// Remove a column filter. Resets page to 1.
    pub fn remove_filter(&mut self, key: &str) {
        self.state.filters.remove(key);
        self.state.page = 1;
        self.persist();
    }

    /// Drop all filters. Resets page to 1.
    pub fn clear_filters(&mut self) {
        self.state.filters.clear();
        self.state.page = 1;
        self.persist();
    }

    fn persist(&self) {
        self.store.set(&self.key, &self.state);
    }
}
