use crate::core::state::NavigationState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::MenuList;

use ratatui::Frame;
use ratatui::layout::Rect;

/// Compose one frame: title bar, menu title, rows and (while searching) the
/// search box one blank row below the last row of the page.
pub fn draw_ui(frame: &mut Frame, state: &NavigationState, tui: &mut TuiState, elapsed_millis: u64) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }

    if tui.display_title {
        tui.title_bar.render(frame, Rect::new(area.x, area.y, area.width, 1));
    }

    if tui.hide_menu {
        return;
    }

    let mut menu_list = MenuList {
        state,
        geometry: tui.geometry,
        metrics: tui.metrics,
        color: tui.primary,
        elapsed_millis,
        top: tui.top(),
    };
    menu_list.render(frame, area);

    if state.searching {
        let page_rows = tui.geometry.rows_per_page(state.page_size()) as u16;
        let row = area.y + menu_list.first_row() + page_rows + 1;
        let column = tui.geometry.menu_start_column.saturating_sub(2);
        if row < area.bottom() && column < area.width {
            let search_area = Rect::new(area.x + column, row, area.width - column, 1);
            tui.search_box.render(frame, search_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolvedConfig;
    use crate::core::item::MenuItem;
    use crate::core::menu::MenuRef;
    use crate::test_support::{TestMenu, numbered_items};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::rc::Rc;

    fn render(state: &NavigationState, config: &ResolvedConfig, width: u16, height: u16) -> Vec<String> {
        let mut tui = TuiState::new(config);
        tui.resize(width, height);

        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, state, &mut tui, 0))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    fn state(count: usize) -> NavigationState {
        let menu: MenuRef = Rc::new(TestMenu::with_items("main", numbered_items(count)));
        NavigationState::new(menu, MenuItem::new("Main", "menu"), 10)
    }

    #[test]
    fn test_full_screen_layout() {
        let config = ResolvedConfig {
            app_name: "demo".to_string(),
            ..ResolvedConfig::default()
        };
        let lines = render(&state(3), &config, 60, 24);

        assert!(lines[0].contains(" demo "));
        assert!(lines[0].starts_with('─'));
        // Title row 5, menu rows from 8 (height / 3)
        assert!(lines[5].contains("Main menu"));
        assert!(lines[8].contains("=> 0. Item 0"));
        assert!(lines[9].contains("1. Item 1"));
        assert!(!lines.iter().any(|l| l.contains("Search")));
    }

    #[test]
    fn test_no_title_bar() {
        let config = ResolvedConfig {
            display_title: false,
            ..ResolvedConfig::default()
        };
        let lines = render(&state(3), &config, 60, 24);
        assert!(!lines[0].contains('─'));
        // One row higher without the title bar
        assert!(lines[7].contains("=> 0. Item 0"));
    }

    #[test]
    fn test_hide_menu_shows_only_title_bar() {
        let config = ResolvedConfig {
            hide_menu: true,
            ..ResolvedConfig::default()
        };
        let lines = render(&state(3), &config, 60, 24);
        assert!(lines[0].contains('─'));
        assert!(lines[1..].iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_search_box_below_page() {
        let mut state = state(3);
        state.searching = true;
        let lines = render(&state, &ResolvedConfig::default(), 60, 24);

        // Rows 8..18 belong to the page, one blank row, then the box
        assert!(lines[19].contains(">  Search"), "{:?}", lines[19]);
        // Selection marker is hidden while typing
        assert!(!lines[8].contains("=>"));
    }

    #[test]
    fn test_double_column_screen() {
        let lines = render(&state(4), &ResolvedConfig::default(), 100, 30);
        // height 30 → menu row 10
        assert!(lines[10].contains("0. Item 0"));
        assert!(lines[10].contains("1. Item 1"));
        assert!(lines[11].contains("2. Item 2"));
    }
}
