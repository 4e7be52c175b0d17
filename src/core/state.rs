//! # Navigation State
//!
//! The live, singular state the navigator mutates in place, plus the frame
//! snapshot pushed on every sub-menu entry.
//!
//! ```text
//! NavigationState
//! ├── menu: MenuRef          // current menu
//! ├── items: Vec<MenuItem>   // cache of menu.menu_views()
//! ├── title: MenuItem        // title line above the list, formatted
//! ├── raw_title: MenuItem    // the same item before formatting
//! ├── selected: usize        // absolute index into items
//! ├── page: usize            // 1-based
//! ├── page_size: usize       // fixed for the session
//! ├── double_column: bool    // derived from terminal width
//! ├── searching: bool        // search box has focus
//! └── search_text: String    // in-progress query
//! ```
//!
//! Hooks receive `&mut NavigationState`. They never see the stack.

use std::fmt;
use std::rc::Rc;

use crate::core::item::MenuItem;
use crate::core::menu::MenuRef;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone)]
pub struct NavigationState {
    pub menu: MenuRef,
    pub items: Vec<MenuItem>,
    pub title: MenuItem,
    raw_title: MenuItem,
    pub selected: usize,
    pub page: usize,
    page_size: usize,
    pub double_column: bool,
    pub searching: bool,
    pub search_text: String,
}

impl NavigationState {
    pub fn new(menu: MenuRef, title: MenuItem, page_size: usize) -> Self {
        let items = menu.menu_views();
        Self {
            title: menu.format_menu_item(title.clone()),
            raw_title: title,
            menu,
            items,
            selected: 0,
            page: 1,
            page_size: page_size.max(1),
            double_column: false,
            searching: false,
            search_text: String::new(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages, never less than 1.
    pub fn last_page(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// Index of the first item on the current page.
    pub fn page_start(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Items shown on the current page.
    pub fn page_items(&self) -> &[MenuItem] {
        let start = self.page_start().min(self.items.len());
        let end = (self.page * self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Re-read the item list from the current menu.
    pub fn refresh_items(&mut self) {
        self.items = self.menu.menu_views();
        self.clamp();
    }

    pub fn raw_title(&self) -> &MenuItem {
        &self.raw_title
    }

    /// Replace the title and format it with the current menu.
    pub fn set_title(&mut self, raw_title: MenuItem) {
        self.title = self.menu.format_menu_item(raw_title.clone());
        self.raw_title = raw_title;
    }

    /// Re-run the current menu's formatter over the unformatted title.
    pub fn refresh_title(&mut self) {
        self.title = self.menu.format_menu_item(self.raw_title.clone());
    }

    /// Pull selection and page back inside the current list.
    pub fn clamp(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        self.page = self.page.clamp(1, self.last_page());
    }
}

impl PartialEq for NavigationState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.menu, &other.menu)
            && self.items == other.items
            && self.title == other.title
            && self.raw_title == other.raw_title
            && self.selected == other.selected
            && self.page == other.page
            && self.page_size == other.page_size
            && self.double_column == other.double_column
            && self.searching == other.searching
            && self.search_text == other.search_text
    }
}

impl fmt::Debug for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationState")
            .field("menu", &self.menu.menu_key())
            .field("items", &self.items.len())
            .field("title", &self.title)
            .field("selected", &self.selected)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("double_column", &self.double_column)
            .field("searching", &self.searching)
            .field("search_text", &self.search_text)
            .finish()
    }
}

/// Snapshot pushed when entering a sub-menu and restored on back.
/// The title is kept unformatted and formatted again on restore.
#[derive(Clone)]
pub struct NavigationFrame {
    pub items: Vec<MenuItem>,
    pub selected: usize,
    pub page: usize,
    pub raw_title: MenuItem,
    pub menu: MenuRef,
}

impl NavigationFrame {
    pub fn capture(state: &NavigationState) -> Self {
        Self {
            items: state.items.clone(),
            selected: state.selected,
            page: state.page,
            raw_title: state.raw_title.clone(),
            menu: state.menu.clone(),
        }
    }
}
