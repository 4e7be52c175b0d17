//! # TitleBar Component
//!
//! Top rule with the application name centred in it:
//!
//! ```text
//! ──────────────── menutree ────────────────
//! ```
//!
//! Stateless: all data comes in as props. Drawn in the primary color.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

const RULE: &str = "─";

pub struct TitleBar {
    /// Application name shown in the middle of the rule
    pub app_name: String,
    pub color: Color,
}

impl TitleBar {
    pub fn new(app_name: impl Into<String>, color: Color) -> Self {
        Self {
            app_name: app_name.into(),
            color,
        }
    }

    /// The rule text for a terminal `width` cells wide.
    pub fn text(&self, width: u16) -> String {
        let width = usize::from(width);
        let label_width = self.app_name.width() + 2;
        let prefix = width.saturating_sub(label_width) / 2;
        let suffix = width.saturating_sub(prefix + label_width);
        format!(
            "{} {} {}",
            RULE.repeat(prefix),
            self.app_name,
            RULE.repeat(suffix)
        )
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.text(area.width);
        frame.render_widget(Span::styled(text, Style::default().fg(self.color)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_is_centred() {
        let title_bar = TitleBar::new("menu", Color::Cyan);
        // 20 - 6 = 14 → 7 left, 7 right
        assert_eq!(title_bar.text(20), format!("{} menu {}", "─".repeat(7), "─".repeat(7)));
    }

    #[test]
    fn test_odd_remainder_goes_right() {
        let title_bar = TitleBar::new("menu", Color::Cyan);
        assert_eq!(title_bar.text(21), format!("{} menu {}", "─".repeat(7), "─".repeat(8)));
    }

    #[test]
    fn test_narrow_terminal_has_no_rule() {
        let title_bar = TitleBar::new("a long name", Color::Cyan);
        assert_eq!(title_bar.text(5), " a long name ");
    }

    #[test]
    fn test_title_bar_renders() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new("menutree", Color::Cyan);

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains(" menutree "));
        assert!(text.starts_with('─'));
        assert_eq!(buffer[(0, 0)].fg, Color::Cyan);
    }
}
