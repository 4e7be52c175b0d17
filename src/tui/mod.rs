//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the menu,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Input**: every event that changes state flags a redraw; all pending
//!   events are drained before the next frame.
//! - **Ticker**: a background task requests a repaint every tick so the
//!   subtitle marquee keeps moving. Requests coalesce in a one-slot channel.
//! - **Hooks**: while a hook blocks this thread the loading overlay paints
//!   by itself; the screen is cleared and redrawn once the hook returns.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::cell::Cell;
use std::io::{self, stdout};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::style::Color;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::item::MenuItem;
use crate::core::layout::{Geometry, TextMetrics};
use crate::core::menu::MenuRef;
use crate::core::navigator::Navigator;
use crate::core::ticker::{Repaint, SharedClock, Ticker};
use crate::tui::component::EventHandler;
use crate::tui::components::{LoadingOverlay, SearchBox, SearchEvent, TitleBar};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Longest the loop sleeps waiting for input before checking the ticker.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    pub title_bar: TitleBar,
    pub search_box: SearchBox,
    pub geometry: Geometry,
    pub metrics: TextMetrics,
    pub primary: Color,
    pub display_title: bool,
    pub hide_menu: bool,
    dual_column: bool,
    page_size: usize,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        let primary = parse_color(&config.primary_color);
        Self {
            title_bar: TitleBar::new(config.app_name.clone(), primary),
            search_box: SearchBox::new(primary),
            geometry: Geometry::default(),
            metrics: TextMetrics::new(config.ambiguous_wide),
            primary,
            display_title: config.display_title,
            hide_menu: config.hide_menu,
            dual_column: config.dual_column,
            page_size: config.page_size,
        }
    }

    /// Recompute geometry for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) -> Action {
        self.geometry = Geometry::compute(
            width,
            height,
            self.dual_column,
            self.display_title,
            self.page_size,
        );
        Action::Resize {
            width,
            height,
            double_column: self.geometry.double_column,
        }
    }

    /// First row below the app title bar.
    pub fn top(&self) -> u16 {
        1
    }

    /// Where the loading overlay paints: over the menu title.
    pub fn loading_anchor(&self) -> (u16, u16) {
        (
            self.geometry.title_start_column,
            self.geometry.title_start_row.max(self.top()),
        )
    }
}

/// Parse a configured color name or `#rrggbb`, falling back to cyan.
pub fn parse_color(name: &str) -> Color {
    name.parse().unwrap_or_else(|_| {
        warn!("Unknown color '{}', using cyan", name);
        Color::Cyan
    })
}

/// Key bindings outside the search box.
pub fn route_key(event: &TuiEvent) -> Option<Action> {
    let action = match event {
        TuiEvent::CursorDown | TuiEvent::ScrollDown => Action::MoveDown,
        TuiEvent::CursorUp | TuiEvent::ScrollUp => Action::MoveUp,
        TuiEvent::CursorLeft => Action::MoveLeft,
        TuiEvent::CursorRight => Action::MoveRight,
        TuiEvent::Submit => Action::Enter,
        TuiEvent::Escape => Action::Back,
        TuiEvent::ForceQuit => Action::Quit,
        TuiEvent::InputChar(c) => match *c {
            'j' | 'J' => Action::MoveDown,
            'k' | 'K' => Action::MoveUp,
            'h' | 'H' => Action::MoveLeft,
            'l' | 'L' => Action::MoveRight,
            d if d.is_ascii_digit() => Action::JumpTo(d as u8 - b'0'),
            'g' => Action::MoveTop,
            'G' => Action::MoveBottom,
            'n' | 'N' => Action::Enter,
            'b' | 'B' => Action::Back,
            'r' | 'R' => Action::Rerender,
            '/' | '／' => Action::StartSearch,
            'q' | 'Q' => Action::Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// Route one terminal event through the search box or the key map.
fn handle_event(nav: &mut Navigator, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // Ctrl+C always quits, even while typing a query
        TuiEvent::ForceQuit => return update(nav, Action::Quit),
        TuiEvent::Resize(width, height) => {
            let action = tui.resize(width, height);
            return update(nav, action);
        }
        _ => {}
    }

    if nav.state().searching {
        let action = match tui.search_box.handle_event(&event) {
            Some(SearchEvent::Changed(text)) => Action::SearchChanged(text),
            Some(SearchEvent::Submit) => Action::SubmitSearch,
            Some(SearchEvent::Cancel) => Action::CancelSearch,
            None => return Effect::None,
        };
        return update(nav, action);
    }

    match route_key(&event) {
        Some(action) => update(nav, action),
        None => Effect::None,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Lets a bare Esc through without waiting for an escape sequence;
        // ignored by terminals without the protocol
        execute!(
            stdout(),
            EnableMouseCapture,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableMouseCapture);
    }
}

/// Run a menu session until the user quits.
///
/// Must be called from inside a multi-threaded tokio runtime: the ticker
/// and the loading overlay run as tasks while this thread blocks.
pub fn run(config: ResolvedConfig, root: MenuRef, title: MenuItem) -> io::Result<()> {
    let mut ticker = Ticker::new(config.tick_interval);
    let (repaint_tx, repaint_rx) = mpsc::sync_channel(1);
    ticker.start(repaint_tx);
    let clock = ticker.clock();

    let overlay = LoadingOverlay::new(config.loading_text.clone(), clock.clone());
    let anchor = overlay.anchor();
    let needs_clear = overlay.needs_clear();
    let mut nav =
        Navigator::new(root, title, config.page_size).with_loading(Box::new(overlay));
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let size = terminal.size()?;
        let action = tui.resize(size.width, size.height);
        update(&mut nav, action);

        let session = Session {
            repaint_rx,
            clock,
            anchor,
            needs_clear,
        };
        session.run(&mut terminal, &mut nav, &mut tui)
    });

    ticker.stop();
    ratatui::restore();
    info!("Session ended");
    result
}

/// Channels and shared cells the event loop polls.
struct Session {
    repaint_rx: Receiver<Repaint>,
    clock: SharedClock,
    anchor: Rc<Cell<(u16, u16)>>,
    needs_clear: Rc<Cell<bool>>,
}

impl Session {
    fn run(
        &self,
        terminal: &mut DefaultTerminal,
        nav: &mut Navigator,
        tui: &mut TuiState,
    ) -> io::Result<()> {
        let mut needs_redraw = true; // Force first frame

        loop {
            self.anchor.set(tui.loading_anchor());

            // A hook ran: the overlay painted outside ratatui's buffer
            if self.needs_clear.replace(false) {
                terminal.clear()?;
                needs_redraw = true;
            }

            if needs_redraw {
                let elapsed = self.clock.elapsed_millis();
                terminal.draw(|f| ui::draw_ui(f, nav.state(), tui, elapsed))?;
                needs_redraw = false;
            }

            // Process first event + drain ALL pending events before next draw
            let mut pending = poll_event_timeout(POLL_TIMEOUT)?;
            while let Some(event) = pending {
                match handle_event(nav, tui, event) {
                    Effect::Quit => return Ok(()),
                    Effect::ClearAndRedraw => {
                        terminal.clear()?;
                        needs_redraw = true;
                    }
                    Effect::Redraw => needs_redraw = true,
                    Effect::None => {}
                }
                self.anchor.set(tui.loading_anchor());
                pending = poll_event_immediate()?;
            }

            if self.repaint_rx.try_recv().is_ok() {
                needs_redraw = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestMenu, numbered_items};

    fn searchable_nav() -> Navigator {
        let menu = TestMenu::with_items("root", numbered_items(12)).searchable();
        Navigator::new(Rc::new(menu), MenuItem::titled("root"), 10)
    }

    fn tui() -> TuiState {
        TuiState::new(&ResolvedConfig::default())
    }

    #[test]
    fn test_key_map() {
        let cases = [
            (TuiEvent::InputChar('j'), Action::MoveDown),
            (TuiEvent::InputChar('K'), Action::MoveUp),
            (TuiEvent::CursorLeft, Action::MoveLeft),
            (TuiEvent::InputChar('L'), Action::MoveRight),
            (TuiEvent::InputChar('7'), Action::JumpTo(7)),
            (TuiEvent::InputChar('g'), Action::MoveTop),
            (TuiEvent::InputChar('G'), Action::MoveBottom),
            (TuiEvent::Submit, Action::Enter),
            (TuiEvent::InputChar('n'), Action::Enter),
            (TuiEvent::Escape, Action::Back),
            (TuiEvent::InputChar('B'), Action::Back),
            (TuiEvent::InputChar('r'), Action::Rerender),
            (TuiEvent::InputChar('/'), Action::StartSearch),
            (TuiEvent::InputChar('／'), Action::StartSearch),
            (TuiEvent::InputChar('q'), Action::Quit),
            (TuiEvent::ScrollDown, Action::MoveDown),
        ];
        for (event, expected) in cases {
            assert_eq!(route_key(&event), Some(expected), "{event:?}");
        }
        assert_eq!(route_key(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("#ff8800"), Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(parse_color("not-a-color"), Color::Cyan);
    }

    #[test]
    fn test_resize_sets_geometry_and_columns() {
        let mut nav = searchable_nav();
        let mut tui = tui();

        let effect = handle_event(&mut nav, &mut tui, TuiEvent::Resize(100, 30));
        assert_eq!(effect, Effect::ClearAndRedraw);
        assert!(tui.geometry.double_column);
        assert!(nav.state().double_column);

        handle_event(&mut nav, &mut tui, TuiEvent::Resize(60, 30));
        assert!(!nav.state().double_column);
    }

    #[test]
    fn test_quit_key_is_text_while_searching() {
        let mut nav = searchable_nav();
        let mut tui = tui();
        handle_event(&mut nav, &mut tui, TuiEvent::InputChar('/'));
        assert!(nav.state().searching);

        let effect = handle_event(&mut nav, &mut tui, TuiEvent::InputChar('q'));
        assert_eq!(effect, Effect::Redraw);
        assert_eq!(nav.state().search_text, "q");

        // Ctrl+C still quits
        assert_eq!(
            handle_event(&mut nav, &mut tui, TuiEvent::ForceQuit),
            Effect::Quit
        );
    }

    #[test]
    fn test_search_submit_through_box() {
        let mut nav = searchable_nav();
        let mut tui = tui();
        handle_event(&mut nav, &mut tui, TuiEvent::InputChar('/'));
        for c in "item 1".chars() {
            handle_event(&mut nav, &mut tui, TuiEvent::InputChar(c));
        }
        let effect = handle_event(&mut nav, &mut tui, TuiEvent::Submit);

        assert_eq!(effect, Effect::ClearAndRedraw);
        assert!(!nav.state().searching);
        assert_eq!(nav.depth(), 1);
        // Item 1, Item 10, Item 11
        assert_eq!(nav.state().items.len(), 3);
        assert_eq!(tui.search_box.value(), "");
    }

    #[test]
    fn test_search_cancel_through_box() {
        let mut nav = searchable_nav();
        let mut tui = tui();
        handle_event(&mut nav, &mut tui, TuiEvent::InputChar('/'));
        handle_event(&mut nav, &mut tui, TuiEvent::InputChar('x'));
        handle_event(&mut nav, &mut tui, TuiEvent::Escape);

        assert!(!nav.state().searching);
        assert_eq!(nav.depth(), 0);
        assert_eq!(tui.search_box.value(), "");
    }

    #[test]
    fn test_loading_anchor_tracks_title_row() {
        let mut tui = tui();
        tui.resize(100, 30);
        // Menu starts at row 10, title three rows above
        assert_eq!(tui.loading_anchor(), (20, 7));
    }
}
