//! # SearchBox Component
//!
//! Single-line query input shown under the menu while searching.
//!
//! ## Responsibilities
//!
//! - Capture text input (at most `CHAR_LIMIT` characters)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on Enter and `Cancel` on Esc, resetting itself either way
//!
//! Every key except Enter and Esc is text here, including the letters that
//! navigate the menu and `q`.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary};

pub const PROMPT: &str = "> ";
pub const PLACEHOLDER: &str = " Search";
pub const CHAR_LIMIT: usize = 32;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Query text changed; carries the full new value
    Changed(String),
    /// Enter pressed (an empty query is still a submit)
    Submit,
    /// Esc pressed
    Cancel,
}

/// Query input.
///
/// # Props
///
/// - `color`: prompt and text color (primary color)
///
/// # State
///
/// - `buffer`: current query
/// - `cursor`: byte offset of the caret
pub struct SearchBox {
    buffer: String,
    cursor: CursorState,
    pub color: Color,
}

impl SearchBox {
    pub fn new(color: Color) -> Self {
        Self {
            buffer: String::new(),
            cursor: CursorState::new(),
            color,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    /// Caret column relative to the start of the box.
    pub fn cursor_column(&self) -> u16 {
        PROMPT.len() as u16 + self.cursor.column(&self.buffer)
    }

    pub fn line(&self) -> Line<'static> {
        let prompt = Span::styled(PROMPT, Style::default().fg(self.color));
        let body = if self.buffer.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(self.buffer.clone(), Style::default().fg(self.color))
        };
        Line::from(vec![prompt, body])
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
        let x = area.x.saturating_add(self.cursor_column());
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                if self.buffer.chars().count() >= CHAR_LIMIT {
                    return None;
                }
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                self.changed()
            }
            // Cursor moves re-send the unchanged query so the caller redraws
            TuiEvent::CursorLeft => {
                let moved = self.cursor.move_left(&self.buffer);
                if moved { self.changed() } else { None }
            }
            TuiEvent::CursorRight => {
                let moved = self.cursor.move_right(&self.buffer);
                if moved { self.changed() } else { None }
            }
            TuiEvent::Home => {
                let moved = self.cursor.move_home();
                if moved { self.changed() } else { None }
            }
            TuiEvent::End => {
                let moved = self.cursor.move_end(&self.buffer);
                if moved { self.changed() } else { None }
            }
            TuiEvent::Submit => {
                self.reset();
                Some(SearchEvent::Submit)
            }
            TuiEvent::Escape => {
                self.reset();
                Some(SearchEvent::Cancel)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(search: &mut SearchBox, text: &str) {
        for c in text.chars() {
            search.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_emits_changed() {
        let mut search = SearchBox::new(Color::Cyan);
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('q')),
            Some(SearchEvent::Changed("q".to_string()))
        );
        type_str(&mut search, "ueen");
        assert_eq!(search.value(), "queen");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut search = SearchBox::new(Color::Cyan);
        type_str(&mut search, "abc");
        assert_eq!(
            search.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("ab".to_string()))
        );
        search.handle_event(&TuiEvent::Home);
        assert_eq!(
            search.handle_event(&TuiEvent::Delete),
            Some(SearchEvent::Changed("b".to_string()))
        );
        // Cursor at start: nothing to erase
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut search = SearchBox::new(Color::Cyan);
        type_str(&mut search, "ac");
        search.handle_event(&TuiEvent::CursorLeft);
        type_str(&mut search, "b");
        assert_eq!(search.value(), "abc");
    }

    #[test]
    fn test_char_limit() {
        let mut search = SearchBox::new(Color::Cyan);
        type_str(&mut search, &"x".repeat(CHAR_LIMIT));
        assert_eq!(search.handle_event(&TuiEvent::InputChar('y')), None);
        assert_eq!(search.value().chars().count(), CHAR_LIMIT);
    }

    #[test]
    fn test_submit_and_cancel_reset() {
        let mut search = SearchBox::new(Color::Cyan);
        type_str(&mut search, "abc");
        assert_eq!(search.handle_event(&TuiEvent::Submit), Some(SearchEvent::Submit));
        assert_eq!(search.value(), "");
        assert_eq!(search.cursor_column(), 2);

        type_str(&mut search, "x");
        assert_eq!(search.handle_event(&TuiEvent::Escape), Some(SearchEvent::Cancel));
        assert_eq!(search.value(), "");
    }

    #[test]
    fn test_empty_submit_still_submits() {
        let mut search = SearchBox::new(Color::Cyan);
        assert_eq!(search.handle_event(&TuiEvent::Submit), Some(SearchEvent::Submit));
    }

    #[test]
    fn test_render_placeholder_and_cursor() {
        let backend = TestBackend::new(20, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new(Color::Cyan);

        terminal
            .draw(|f| {
                search.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.starts_with(">  Search"));
        assert_eq!(buffer[(3, 0)].fg, Color::DarkGray);
    }
}
