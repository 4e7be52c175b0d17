//! # Search Menu
//!
//! Wraps a source menu and a query. The result list is a subsequence of the
//! source items (order preserved), and every row maps back to its source
//! index so `sub_menu` and `real_data_index` keep working.

use crate::core::item::MenuItem;
use crate::core::menu::{Menu, MenuRef};

/// Predicate deciding whether an item's raw string matches a query.
pub type Matcher = fn(raw: &str, query: &str) -> bool;

/// Case-insensitive substring match. An empty query matches everything.
pub fn contains_ignore_case(raw: &str, query: &str) -> bool {
    raw.to_lowercase().contains(&query.to_lowercase())
}

pub struct SearchMenu {
    source: MenuRef,
    query: String,
    items: Vec<MenuItem>,
    /// Source index of every result row.
    indices: Vec<usize>,
}

impl SearchMenu {
    pub fn new(source: MenuRef, query: impl Into<String>) -> Self {
        Self::with_matcher(source, query, contains_ignore_case)
    }

    pub fn with_matcher(source: MenuRef, query: impl Into<String>, matcher: Matcher) -> Self {
        let query = query.into();
        let (indices, items): (Vec<usize>, Vec<MenuItem>) = source
            .menu_views()
            .into_iter()
            .enumerate()
            .filter(|(_, item)| matcher(&item.raw(), &query))
            .unzip();
        Self {
            source,
            query,
            items,
            indices,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Source index of a result row.
    pub fn source_index(&self, index: usize) -> Option<usize> {
        self.indices.get(index).copied()
    }
}

impl Menu for SearchMenu {
    fn real_data_index(&self, index: usize) -> usize {
        match self.source_index(index) {
            Some(source_index) => self.source.real_data_index(source_index),
            None => index,
        }
    }

    fn menu_key(&self) -> String {
        format!("search_{}_{}", self.source.menu_key(), self.query)
    }

    fn menu_views(&self) -> Vec<MenuItem> {
        self.items.clone()
    }

    fn sub_menu(&self, index: usize) -> Option<MenuRef> {
        self.source_index(index)
            .and_then(|source_index| self.source.sub_menu(source_index))
    }
}
