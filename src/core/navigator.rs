//! # Navigator
//!
//! Owns the live `NavigationState` and the frame stack, and implements every
//! cursor, page and menu transition.
//!
//! ## Hooks
//!
//! All hook calls go through [`Navigator::run_hook`]. It shows the loading
//! indicator, snapshots the state, calls the hook synchronously and restores
//! the snapshot when the hook returns `false`. The hook blocks this thread
//! for its whole duration; there is no timeout and no cancellation.
//!
//! ## Columns
//!
//! In double-column mode item `i` sits in row `i / 2`, column `i % 2`, so a
//! vertical move steps by 2 and a horizontal move toggles the low bit.

use log::{debug, info};

use crate::core::item::MenuItem;
use crate::core::loading::{LoadingIndicator, NoopLoading};
use crate::core::menu::{Hook, MenuRef};
use crate::core::search::SearchMenu;
use crate::core::state::{NavigationFrame, NavigationState};

pub const SEARCH_RESULT_TITLE: &str = "Search results";

pub struct Navigator {
    state: NavigationState,
    stack: Vec<NavigationFrame>,
    loading: Box<dyn LoadingIndicator>,
}

impl Navigator {
    pub fn new(root: MenuRef, title: MenuItem, page_size: usize) -> Self {
        info!("Navigator starting at menu '{}'", root.menu_key());
        Self {
            state: NavigationState::new(root, title, page_size),
            stack: Vec::new(),
            loading: Box::new(NoopLoading),
        }
    }

    pub fn with_loading(mut self, loading: Box<dyn LoadingIndicator>) -> Self {
        self.loading = loading;
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn menu(&self) -> &MenuRef {
        &self.state.menu
    }

    /// Backing data index of the current selection.
    pub fn selected_data_index(&self) -> usize {
        self.state.menu.real_data_index(self.state.selected)
    }

    /// Ignored for odd page sizes: a page must hold whole rows.
    pub fn set_double_column(&mut self, double_column: bool) {
        self.state.double_column = double_column && self.state.page_size() % 2 == 0;
    }

    pub fn refresh_items(&mut self) {
        self.state.refresh_items();
    }

    pub fn refresh_title(&mut self) {
        self.state.refresh_title();
    }

    /// Single choke point for every hook call.
    fn run_hook(&mut self, hook: Hook) -> bool {
        let snapshot = self.state.clone();
        self.loading.start();
        let allowed = hook(&mut self.state);
        self.loading.complete();
        if !allowed {
            self.state = snapshot;
        }
        allowed
    }

    /// Run the optional boundary hook. `false` means the move is vetoed.
    fn run_boundary_hook(&mut self, hook: Option<Hook>) -> bool {
        let Some(hook) = hook else {
            return true;
        };
        if !self.run_hook(hook) {
            debug!("Boundary hook rejected on '{}'", self.state.menu.menu_key());
            return false;
        }
        // The hook is expected to have extended the backing data
        self.state.refresh_items();
        true
    }

    fn step(&self) -> usize {
        if self.state.double_column { 2 } else { 1 }
    }

    pub fn move_up(&mut self) {
        let step = self.step();
        if self.state.selected < step {
            let hook = self.state.menu.top_out_hook();
            if !self.run_boundary_hook(hook) || self.state.selected < step {
                return;
            }
        }
        let before = self.state.selected;
        self.state.selected -= step;
        if self.state.selected < self.state.page_start() && !self.prev_page() {
            self.state.selected = before;
        }
    }

    pub fn move_down(&mut self) {
        let step = self.step();
        if self.state.selected + step >= self.state.items.len() {
            let hook = self.state.menu.bottom_out_hook();
            if !self.run_boundary_hook(hook) || self.state.selected + step >= self.state.items.len()
            {
                return;
            }
        }
        let before = self.state.selected;
        self.state.selected += step;
        if self.state.selected >= self.state.page * self.state.page_size() && !self.next_page() {
            self.state.selected = before;
        }
    }

    pub fn move_left(&mut self) {
        let selected = self.state.selected;
        if !self.state.double_column || selected % 2 == 0 || selected == 0 {
            return;
        }
        self.state.selected -= 1;
    }

    pub fn move_right(&mut self) {
        if !self.state.double_column || self.state.selected % 2 != 0 {
            return;
        }
        if self.state.selected + 1 >= self.state.items.len() {
            let hook = self.state.menu.bottom_out_hook();
            if !self.run_boundary_hook(hook) || self.state.selected + 1 >= self.state.items.len() {
                return;
            }
        }
        self.state.selected += 1;
    }

    pub fn move_top(&mut self) {
        self.state.selected = if self.state.double_column {
            self.state.selected % 2
        } else {
            0
        };
        self.state.page = 1;
    }

    pub fn move_bottom(&mut self) {
        let len = self.state.items.len();
        if len == 0 {
            return;
        }
        let double = self.state.double_column;
        let selected = self.state.selected;
        self.state.selected = if double && len % 2 == 0 {
            len + selected % 2 - 2
        } else if double && selected % 2 != 0 {
            len - 2
        } else {
            len - 1
        };
        self.state.page = len.div_ceil(self.state.page_size());
        // Right-column item on a page whose only entry would be a lone left item
        if double && self.state.selected % 2 != 0 && len % self.state.page_size() == 1 {
            self.state.page -= 1;
        }
    }

    /// Go back one page. Returns `false` only when a hook vetoed it.
    pub fn prev_page(&mut self) -> bool {
        if let Some(hook) = self.state.menu.before_prev_page_hook()
            && !self.run_hook(hook)
        {
            debug!("Previous page rejected on '{}'", self.state.menu.menu_key());
            return false;
        }
        if self.state.page > 1 {
            self.state.page -= 1;
        }
        true
    }

    /// Advance one page. Returns `false` only when a hook vetoed it.
    pub fn next_page(&mut self) -> bool {
        if let Some(hook) = self.state.menu.before_next_page_hook()
            && !self.run_hook(hook)
        {
            debug!("Next page rejected on '{}'", self.state.menu.menu_key());
            return false;
        }
        if self.state.page < self.state.last_page() {
            self.state.page += 1;
        }
        true
    }

    /// Select row `digit` of the current page, if it exists.
    pub fn jump_to(&mut self, digit: usize) {
        let index = self.state.page_start() + digit;
        if index < self.state.items.len() {
            self.state.selected = index;
        }
    }

    /// Enter the sub-menu of the selected row.
    pub fn enter_menu(&mut self) {
        if self.state.selected >= self.state.items.len() {
            return;
        }
        let target = self.state.menu.sub_menu(self.state.selected);
        let title = self.state.items[self.state.selected].clone();
        self.enter(target, title);
    }

    /// Enter an explicitly supplied menu with the given title.
    pub fn enter_menu_with(&mut self, menu: MenuRef, title: MenuItem) {
        self.enter(Some(menu), title);
    }

    fn enter(&mut self, target: Option<MenuRef>, title: MenuItem) {
        self.stack.push(NavigationFrame::capture(&self.state));

        let Some(menu) = target else {
            self.stack.pop();
            return;
        };

        if let Some(hook) = menu.before_enter_menu_hook()
            && !self.run_hook(hook)
        {
            debug!("Entering '{}' rejected", menu.menu_key());
            self.stack.pop();
            return;
        }

        info!(
            "Entering '{}' (depth {})",
            menu.menu_key(),
            self.stack.len()
        );
        self.state.items = menu.menu_views();
        self.state.menu = menu;
        self.state.set_title(title);
        self.state.selected = 0;
        self.state.page = 1;
    }

    /// Return to the parent menu. No-op at the root.
    pub fn back_menu(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };

        if let Some(hook) = self.state.menu.before_back_menu_hook()
            && !self.run_hook(hook)
        {
            debug!("Leaving '{}' rejected", self.state.menu.menu_key());
            self.stack.push(frame);
            return;
        }

        info!(
            "Back to '{}' (depth {})",
            frame.menu.menu_key(),
            self.stack.len()
        );
        self.state.items = frame.items;
        self.state.menu = frame.menu;
        self.state.set_title(frame.raw_title);
        self.state.selected = frame.selected;
        self.state.page = frame.page;
    }

    /// Focus the search box. Returns `false` when the menu is not searchable.
    pub fn start_search(&mut self) -> bool {
        if self.state.searching || !self.state.menu.is_searchable() {
            return false;
        }
        self.state.searching = true;
        self.state.search_text.clear();
        true
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        if self.state.searching {
            self.state.search_text = text.into();
        }
    }

    /// Leave search mode and enter the results menu for the typed query.
    pub fn submit_search(&mut self) {
        if !self.state.searching {
            return;
        }
        let query = std::mem::take(&mut self.state.search_text);
        self.state.searching = false;
        info!("Searching '{}' for '{}'", self.state.menu.menu_key(), query);
        let results = SearchMenu::new(self.state.menu.clone(), query.clone());
        self.enter(
            Some(std::rc::Rc::new(results)),
            MenuItem::new(SEARCH_RESULT_TITLE, query),
        );
    }

    pub fn cancel_search(&mut self) {
        self.state.searching = false;
        self.state.search_text.clear();
    }
}
