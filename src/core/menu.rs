//! # Menu Capability Set
//!
//! Every menu the host defines implements [`Menu`]. Only `menu_key` is
//! required; every other capability has a no-op default so a host menu
//! overrides just what it needs.
//!
//! ```text
//! Menu
//! ├── is_searchable()        // honours the `/` key
//! ├── real_data_index(i)     // displayed row -> backing record
//! ├── menu_key()             // stable identity (required)
//! ├── menu_views()           // full, page-independent item list
//! ├── format_menu_item(item) // rewrite the title item before display
//! ├── sub_menu(i)            // child menu for a row, None = leaf
//! └── six hooks              // see `Hook`
//! ```
//!
//! Menus are shared as `Rc<dyn Menu>`: the live state and every stack frame
//! may point at the same menu. Hosts that mutate backing data from a hook
//! keep that data behind a `RefCell` captured by both the menu and the hook.

use std::rc::Rc;

use crate::core::item::MenuItem;
use crate::core::state::NavigationState;

/// Shared handle to a menu.
pub type MenuRef = Rc<dyn Menu>;

/// Callback run before a navigation transition.
///
/// Returns `true` to let the transition proceed. On `false` the navigator
/// restores the state it handed in, field for field. Hooks run on the
/// navigation thread and may block (network, disk); nothing cancels them.
pub type Hook = Rc<dyn Fn(&mut NavigationState) -> bool>;

/// Wrap a closure as a `Hook`.
///
/// Going through this function gives the closure its `&mut NavigationState`
/// parameter type, which `Rc::new(|state| ...)` alone can't infer.
pub fn hook(f: impl Fn(&mut NavigationState) -> bool + 'static) -> Hook {
    Rc::new(f)
}

pub trait Menu {
    fn is_searchable(&self) -> bool {
        false
    }

    fn real_data_index(&self, index: usize) -> usize {
        index
    }

    /// Unique key of this logical menu, used by hosts for caching and logs.
    fn menu_key(&self) -> String;

    fn menu_views(&self) -> Vec<MenuItem> {
        Vec::new()
    }

    /// Rewrite the title item shown while this menu is current.
    fn format_menu_item(&self, item: MenuItem) -> MenuItem {
        item
    }

    fn sub_menu(&self, _index: usize) -> Option<MenuRef> {
        None
    }

    fn before_prev_page_hook(&self) -> Option<Hook> {
        None
    }

    fn before_next_page_hook(&self) -> Option<Hook> {
        None
    }

    /// Runs when this menu is about to become current.
    fn before_enter_menu_hook(&self) -> Option<Hook> {
        None
    }

    /// Runs when this menu is about to be left for its parent.
    fn before_back_menu_hook(&self) -> Option<Hook> {
        None
    }

    fn bottom_out_hook(&self) -> Option<Hook> {
        None
    }

    fn top_out_hook(&self) -> Option<Hook> {
        None
    }
}

/// Empty root menu installed when the host supplies none.
#[derive(Debug, Default)]
pub struct DefaultMenu;

impl Menu for DefaultMenu {
    fn menu_key(&self) -> String {
        "default_menu".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_is_inert() {
        let menu = DefaultMenu;
        assert!(!menu.is_searchable());
        assert_eq!(menu.real_data_index(7), 7);
        assert!(menu.menu_views().is_empty());
        assert!(menu.sub_menu(0).is_none());
        assert!(menu.before_enter_menu_hook().is_none());
        assert!(menu.bottom_out_hook().is_none());
    }

    #[test]
    fn test_default_format_is_identity() {
        let item = MenuItem::new("Title", "Sub");
        assert_eq!(DefaultMenu.format_menu_item(item.clone()), item);
    }
}
