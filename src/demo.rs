//! # Demo Menus
//!
//! The menu tree the `menutree` binary shows:
//!
//! ```text
//! Main menu (searchable, 15 entries)
//! ├── entries 0..=13 → Secondary menu (enter hook sleeps 200 ms)
//! └── entry 14       → Endless list (bottom-out hook fetches 10 more)
//! ```
//!
//! Hooks sleep on purpose: they block the event loop the way a real network
//! call would, which is what the loading overlay is for.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use log::info;

use crate::core::item::MenuItem;
use crate::core::menu::{Hook, Menu, MenuRef, hook};

const ENTER_DELAY: Duration = Duration::from_millis(200);
const FETCH_DELAY: Duration = Duration::from_millis(300);
const BATCH_SIZE: usize = 10;
const MAX_LAZY_ITEMS: usize = 100;

/// Root item shown above the main menu.
pub fn root_title() -> MenuItem {
    MenuItem::new("Main menu", "press / to search")
}

/// Build the demo tree and return its root.
pub fn main_menu() -> MenuRef {
    Rc::new(MainMenu::new())
}

pub struct MainMenu {
    items: Vec<MenuItem>,
    secondary: MenuRef,
    endless: MenuRef,
}

impl MainMenu {
    pub fn new() -> Self {
        let mut items = vec![
            MenuItem::new("Daily picks", "refreshed every morning"),
            MenuItem::new(
                "Release radar",
                "a very long long long long long long long long long long subtitle",
            ),
            MenuItem::titled("My playlists"),
            MenuItem::titled("Personal radio"),
            MenuItem::titled("Albums"),
            MenuItem::titled("Charts"),
            MenuItem::titled("Featured playlists"),
            MenuItem::titled("Popular artists"),
            MenuItem::titled("Recently played"),
            MenuItem::titled("Cloud drive"),
            MenuItem::titled("Podcasts"),
            MenuItem::new("每日推荐", "wide characters"),
            MenuItem::titled("Help"),
            MenuItem::titled("Check for updates"),
        ];
        items.push(MenuItem::new("Endless list", "loads more at the bottom"));

        Self {
            items,
            secondary: Rc::new(SecondaryMenu::new()),
            endless: Rc::new(EndlessMenu::new()),
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu for MainMenu {
    fn is_searchable(&self) -> bool {
        true
    }

    fn menu_key(&self) -> String {
        "main_menu".to_string()
    }

    fn menu_views(&self) -> Vec<MenuItem> {
        self.items.clone()
    }

    fn sub_menu(&self, index: usize) -> Option<MenuRef> {
        if index + 1 == self.items.len() {
            Some(self.endless.clone())
        } else if index < self.items.len() {
            Some(self.secondary.clone())
        } else {
            None
        }
    }
}

/// Two leaf items behind a slow enter hook.
pub struct SecondaryMenu {
    items: Vec<MenuItem>,
}

impl SecondaryMenu {
    pub fn new() -> Self {
        Self {
            items: vec![MenuItem::titled("Submenu 1"), MenuItem::titled("Submenu 2")],
        }
    }
}

impl Default for SecondaryMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu for SecondaryMenu {
    fn menu_key(&self) -> String {
        "secondary_menu".to_string()
    }

    fn menu_views(&self) -> Vec<MenuItem> {
        self.items.clone()
    }

    fn before_enter_menu_hook(&self) -> Option<Hook> {
        Some(hook(|_| {
            // mock request
            thread::sleep(ENTER_DELAY);
            true
        }))
    }
}

/// List that grows by one batch every time the cursor runs off the end.
pub struct EndlessMenu {
    items: Rc<RefCell<Vec<MenuItem>>>,
}

impl EndlessMenu {
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(batch(0))),
        }
    }
}

impl Default for EndlessMenu {
    fn default() -> Self {
        Self::new()
    }
}

fn batch(start: usize) -> Vec<MenuItem> {
    (start..start + BATCH_SIZE)
        .map(|i| MenuItem::new(format!("Track {}", i + 1), format!("batch {}", i / BATCH_SIZE + 1)))
        .collect()
}

impl Menu for EndlessMenu {
    fn menu_key(&self) -> String {
        "endless_menu".to_string()
    }

    fn menu_views(&self) -> Vec<MenuItem> {
        self.items.borrow().clone()
    }

    fn format_menu_item(&self, mut item: MenuItem) -> MenuItem {
        item.subtitle = format!("{} loaded", self.items.borrow().len());
        item
    }

    fn bottom_out_hook(&self) -> Option<Hook> {
        let items = self.items.clone();
        Some(hook(move |state| {
            let loaded = items.borrow().len();
            if loaded >= MAX_LAZY_ITEMS {
                return true;
            }
            // mock request
            thread::sleep(FETCH_DELAY);
            items.borrow_mut().extend(batch(loaded));
            info!("Endless list extended to {} items", loaded + BATCH_SIZE);
            state.refresh_title();
            true
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::Navigator;

    #[test]
    fn test_main_menu_shape() {
        let menu = MainMenu::new();
        assert_eq!(menu.menu_views().len(), 15);
        assert!(menu.is_searchable());
        assert_eq!(menu.sub_menu(0).map(|m| m.menu_key()).as_deref(), Some("secondary_menu"));
        assert_eq!(menu.sub_menu(14).map(|m| m.menu_key()).as_deref(), Some("endless_menu"));
        assert!(menu.sub_menu(15).is_none());
    }

    #[test]
    fn test_secondary_enter_hook_allows() {
        let mut nav = Navigator::new(main_menu(), root_title(), 10);
        nav.enter_menu();
        assert_eq!(nav.menu().menu_key(), "secondary_menu");
        assert_eq!(nav.state().items.len(), 2);
    }

    #[test]
    fn test_endless_list_grows_at_bottom() {
        let mut nav = Navigator::new(main_menu(), root_title(), 10);
        nav.move_bottom();
        nav.enter_menu();
        assert_eq!(nav.menu().menu_key(), "endless_menu");
        assert_eq!(nav.state().items.len(), 10);
        assert_eq!(nav.state().title.subtitle, "10 loaded");

        nav.move_bottom();
        nav.move_down();

        assert_eq!(nav.state().items.len(), 20);
        assert_eq!(nav.state().title.subtitle, "20 loaded");
    }

    #[test]
    fn test_search_reaches_sub_menus() {
        let mut nav = Navigator::new(main_menu(), root_title(), 10);
        nav.start_search();
        nav.set_search_text("endless");
        nav.submit_search();
        assert_eq!(nav.state().items.len(), 1);

        nav.enter_menu();
        assert_eq!(nav.menu().menu_key(), "endless_menu");
    }
}
