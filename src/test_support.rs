//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::item::MenuItem;
use crate::core::loading::LoadingIndicator;
pub use crate::core::menu::hook;
use crate::core::menu::{Hook, Menu, MenuRef};

/// A hook that always vetoes.
pub fn reject() -> Hook {
    hook(|_| false)
}

/// `count` items titled `Item 0`, `Item 1`, ...
pub fn numbered_items(count: usize) -> Vec<MenuItem> {
    (0..count).map(|i| MenuItem::titled(format!("Item {i}"))).collect()
}

/// Vector-backed menu with every capability configurable.
#[derive(Default)]
pub struct TestMenu {
    key: String,
    items: Rc<RefCell<Vec<MenuItem>>>,
    searchable: bool,
    data_offset: usize,
    title_suffix: Option<String>,
    children: HashMap<usize, MenuRef>,
    prev_page: Option<Hook>,
    next_page: Option<Hook>,
    enter: Option<Hook>,
    back: Option<Hook>,
    bottom_out: Option<Hook>,
    top_out: Option<Hook>,
}

impl TestMenu {
    pub fn with_items(key: &str, items: Vec<MenuItem>) -> Self {
        Self::shared(key, Rc::new(RefCell::new(items)))
    }

    /// Menu reading from a list the test can mutate from a hook.
    pub fn shared(key: &str, items: Rc<RefCell<Vec<MenuItem>>>) -> Self {
        Self {
            key: key.to_string(),
            items,
            ..Default::default()
        }
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn with_data_offset(mut self, offset: usize) -> Self {
        self.data_offset = offset;
        self
    }

    pub fn with_title_suffix(mut self, suffix: &str) -> Self {
        self.title_suffix = Some(suffix.to_string());
        self
    }

    pub fn with_sub_menu(mut self, index: usize, menu: MenuRef) -> Self {
        self.children.insert(index, menu);
        self
    }

    pub fn with_prev_page(mut self, hook: Hook) -> Self {
        self.prev_page = Some(hook);
        self
    }

    pub fn with_next_page(mut self, hook: Hook) -> Self {
        self.next_page = Some(hook);
        self
    }

    pub fn with_enter(mut self, hook: Hook) -> Self {
        self.enter = Some(hook);
        self
    }

    pub fn with_back(mut self, hook: Hook) -> Self {
        self.back = Some(hook);
        self
    }

    pub fn with_bottom_out(mut self, hook: Hook) -> Self {
        self.bottom_out = Some(hook);
        self
    }

    pub fn with_top_out(mut self, hook: Hook) -> Self {
        self.top_out = Some(hook);
        self
    }
}

impl Menu for TestMenu {
    fn is_searchable(&self) -> bool {
        self.searchable
    }

    fn real_data_index(&self, index: usize) -> usize {
        index + self.data_offset
    }

    fn menu_key(&self) -> String {
        self.key.clone()
    }

    fn menu_views(&self) -> Vec<MenuItem> {
        self.items.borrow().clone()
    }

    fn format_menu_item(&self, mut item: MenuItem) -> MenuItem {
        if let Some(suffix) = &self.title_suffix {
            item.title.push_str(suffix);
        }
        item
    }

    fn sub_menu(&self, index: usize) -> Option<MenuRef> {
        self.children.get(&index).cloned()
    }

    fn before_prev_page_hook(&self) -> Option<Hook> {
        self.prev_page.clone()
    }

    fn before_next_page_hook(&self) -> Option<Hook> {
        self.next_page.clone()
    }

    fn before_enter_menu_hook(&self) -> Option<Hook> {
        self.enter.clone()
    }

    fn before_back_menu_hook(&self) -> Option<Hook> {
        self.back.clone()
    }

    fn bottom_out_hook(&self) -> Option<Hook> {
        self.bottom_out.clone()
    }

    fn top_out_hook(&self) -> Option<Hook> {
        self.top_out.clone()
    }
}

/// Loading indicator that appends `start` / `complete` to a shared log.
pub struct RecordingLoading {
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordingLoading {
    pub fn new(log: Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self { log }
    }
}

impl LoadingIndicator for RecordingLoading {
    fn start(&mut self) {
        self.log.borrow_mut().push("start");
    }

    fn complete(&mut self) {
        self.log.borrow_mut().push("complete");
    }
}
