//! # MenuList Component
//!
//! Renders the menu title line and the current page of items.
//!
//! ```text
//!           Main menu  15 entries
//!
//!  => 0. First entry          4. Fourth entry
//!     1. Second entry sub...  5. Fifth entry
//! ```
//!
//! Text fitting (budgets, truncation, marquee) is done by `core::layout`;
//! this component only positions lines and applies styles. Props are
//! borrowed for the duration of one frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::layout::{Geometry, TextMetrics, item_budget, layout_item, layout_title, row_title};
use crate::core::state::NavigationState;
use crate::tui::component::Component;

/// Marker width (` => ` / `    `) rows start with.
const MARKER_WIDTH: u16 = 4;
/// Filler for the right cell of a last row with one item.
const EMPTY_CELL: &str = "    ";

/// Items of one visual row with the column each starts at.
pub type RowCells = Vec<(u16, Line<'static>)>;

pub struct MenuList<'a> {
    pub state: &'a NavigationState,
    pub geometry: Geometry,
    pub metrics: TextMetrics,
    pub color: Color,
    /// Marquee clock
    pub elapsed_millis: u64,
    /// First screen row the list may use (below the title bar)
    pub top: u16,
}

impl MenuList<'_> {
    /// Screen row of the menu title line.
    pub fn title_row(&self) -> u16 {
        self.geometry.title_start_row.max(self.top)
    }

    /// Screen row of the first item row.
    pub fn first_row(&self) -> u16 {
        self.geometry.menu_start_row.max(self.title_row() + 1)
    }

    pub fn title_line(&self) -> Line<'static> {
        let start = self.geometry.title_start_column;
        let max = usize::from(self.geometry.width.saturating_sub(start));
        let title = &self.state.title;
        let fitted = layout_title(&self.metrics, &title.title, &title.subtitle, max);

        let mut text = fitted.title;
        if !title.subtitle.is_empty() && !fitted.subtitle.is_empty() {
            text.push(' ');
            text.push_str(&fitted.subtitle);
        }
        Line::from(vec![
            Span::raw(" ".repeat(usize::from(start))),
            Span::styled(text, Style::default().fg(Color::LightGreen)),
        ])
    }

    /// Column of the left item on every row.
    fn left_column(&self) -> u16 {
        self.geometry.menu_start_column.saturating_sub(MARKER_WIDTH)
    }

    /// Column of the right item in double-column mode.
    fn right_column(&self) -> u16 {
        let budget = item_budget(
            true,
            usize::from(self.geometry.width),
            usize::from(self.geometry.menu_start_column),
            0,
        );
        self.left_column()
            .saturating_add(u16::try_from(budget).unwrap_or(u16::MAX))
    }

    /// Visual rows of the current page, each item paired with its column.
    ///
    /// Items are placed at fixed columns instead of being joined into one
    /// line, so the right column stays put even when the configured width
    /// of ambiguous characters differs from the one the terminal buffer uses.
    pub fn rows(&self) -> Vec<RowCells> {
        let start = self.state.page_start();
        let count = self.state.page_items().len();
        let left = self.left_column();
        let right = self.right_column();

        let step = if self.geometry.double_column { 2 } else { 1 };
        (0..count)
            .step_by(step)
            .map(|offset| {
                let index = start + offset;
                let mut cells = vec![(left, Line::from(self.item_spans(index)))];
                if self.geometry.double_column {
                    let right_item = if offset + 1 < count {
                        Line::from(self.item_spans(index + 1))
                    } else {
                        Line::raw(EMPTY_CELL)
                    };
                    cells.push((right, right_item));
                }
                cells
            })
            .collect()
    }

    fn item_spans(&self, index: usize) -> Vec<Span<'static>> {
        let item = &self.state.items[index];
        let selected = !self.state.searching && index == self.state.selected;
        let prefix = row_title(index, &item.title, selected, item.has_subtitle());
        let budget = item_budget(
            self.geometry.double_column,
            usize::from(self.geometry.width),
            usize::from(self.geometry.menu_start_column),
            index,
        );
        let fitted = layout_item(
            &self.metrics,
            &prefix,
            &item.subtitle,
            budget,
            self.elapsed_millis,
        );

        let title_style = if selected {
            Style::default().fg(self.color)
        } else {
            Style::default()
        };
        let mut spans = vec![Span::styled(fitted.title, title_style)];
        if !fitted.subtitle.is_empty() {
            spans.push(Span::styled(
                fitted.subtitle,
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans
    }
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_row = area.y + self.title_row();
        if title_row < area.bottom() {
            let row = Rect::new(area.x, title_row, area.width, 1);
            frame.render_widget(self.title_line(), row);
        }

        let first_row = area.y + self.first_row();
        for (i, cells) in self.rows().into_iter().enumerate() {
            let y = first_row.saturating_add(i as u16);
            if y >= area.bottom() {
                break;
            }
            for (column, line) in cells {
                if column >= area.width {
                    continue;
                }
                let cell = Rect::new(area.x + column, y, area.width - column, 1);
                frame.render_widget(line, cell);
            }
        }
    }
}
