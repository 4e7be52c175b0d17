//! # Menu Layout
//!
//! Width-aware text layout for menu rows and screen geometry. Everything here
//! is pure: inputs are strings, cell budgets and an elapsed time, outputs are
//! plain strings. Styling is the TUI adapter's job.
//!
//! Widths are display cells (`unicode-width`). East-Asian ambiguous
//! characters count as one cell unless `TextMetrics::ambiguous_wide` is set.
//! Budgets and padding follow that setting; the renderer places each item at
//! a fixed column so the buffer's own width rules cannot shift the columns.
//!
//! ## Row budget
//!
//! ```text
//! single column:            width - start_column
//! double column, <= 88:     (width - start_column - 4) / 2
//! double column, >  88:     left 44, right width - start_column - 44
//! ```
//!
//! ## Subtitle marquee
//!
//! When the title fits but title + subtitle does not, the subtitle scrolls.
//! It is read as a ring (`subtitle + "   "`) and a window of
//! `budget - title_width` cells is shown, starting one character further
//! every 500 ms.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal width from which two items share a row.
pub const DOUBLE_COLUMN_MIN_WIDTH: u16 = 75;
/// Above this width the left column has a fixed budget.
pub const FIXED_COLUMN_THRESHOLD: usize = 88;
pub const FIXED_LEFT_COLUMN_WIDTH: usize = 44;
/// Time the marquee rests on each offset.
pub const MARQUEE_STEP_MILLIS: u64 = 500;
const MARQUEE_GAP: &str = "   ";

/// Display width rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub ambiguous_wide: bool,
}

impl TextMetrics {
    pub fn new(ambiguous_wide: bool) -> Self {
        Self { ambiguous_wide }
    }

    pub fn width(&self, s: &str) -> usize {
        if self.ambiguous_wide {
            s.width_cjk()
        } else {
            s.width()
        }
    }

    fn char_width(&self, c: char) -> usize {
        let width = if self.ambiguous_wide {
            c.width_cjk()
        } else {
            c.width()
        };
        width.unwrap_or(0)
    }

    /// Longest prefix of `s` no wider than `max` cells.
    pub fn truncate(&self, s: &str, max: usize) -> String {
        let mut used = 0;
        let mut out = String::new();
        for c in s.chars() {
            let w = self.char_width(c);
            if used + w > max {
                break;
            }
            used += w;
            out.push(c);
        }
        out
    }

    /// Pad `s` with spaces on the right up to `width` cells.
    pub fn fill_right(&self, s: &str, width: usize) -> String {
        let current = self.width(s);
        if current >= width {
            return s.to_string();
        }
        format!("{s}{}", " ".repeat(width - current))
    }
}

/// Cell budget of the row item at absolute `index`.
pub fn item_budget(double_column: bool, width: usize, start_column: usize, index: usize) -> usize {
    let available = width.saturating_sub(start_column);
    if !double_column {
        return available;
    }
    if width <= FIXED_COLUMN_THRESHOLD {
        available.saturating_sub(4) / 2
    } else if index % 2 == 0 {
        FIXED_LEFT_COLUMN_WIDTH
    } else {
        available.saturating_sub(FIXED_LEFT_COLUMN_WIDTH)
    }
}

/// A laid-out row item. `title` and `subtitle` together fill the budget
/// exactly unless the title alone had to be cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLayout {
    pub title: String,
    pub subtitle: String,
}

/// Fit a row title and subtitle into `budget` cells.
pub fn layout_item(
    metrics: &TextMetrics,
    title: &str,
    subtitle: &str,
    budget: usize,
    elapsed_millis: u64,
) -> ItemLayout {
    let title_width = metrics.width(title);
    let subtitle_width = metrics.width(subtitle);

    if title_width > budget {
        let cut = metrics.truncate(title, budget);
        return ItemLayout {
            // Cutting a wide char can leave one cell short
            title: metrics.fill_right(&cut, budget),
            subtitle: String::new(),
        };
    }

    let room = budget - title_width;
    let subtitle = if title_width + subtitle_width > budget {
        marquee_window(metrics, subtitle, room, elapsed_millis)
    } else {
        metrics.fill_right(subtitle, room)
    };
    ItemLayout {
        title: title.to_string(),
        subtitle,
    }
}

/// `room`-cell window over the subtitle ring at the offset for `elapsed_millis`.
pub fn marquee_window(metrics: &TextMetrics, subtitle: &str, room: usize, elapsed_millis: u64) -> String {
    let ring: Vec<char> = subtitle.chars().chain(MARQUEE_GAP.chars()).collect();
    let offset = marquee_offset(ring.len(), elapsed_millis);
    let window: String = (offset..offset + room).map(|i| ring[i % ring.len()]).collect();
    let cut = metrics.truncate(&window, room);
    metrics.fill_right(&cut, room)
}

/// Ring offset after `elapsed_millis`: one step per `MARQUEE_STEP_MILLIS`.
pub fn marquee_offset(ring_len: usize, elapsed_millis: u64) -> usize {
    if ring_len == 0 {
        return 0;
    }
    ((elapsed_millis / MARQUEE_STEP_MILLIS) % ring_len as u64) as usize
}

/// Row prefix: ` => N. title` when selected, `    N. title` otherwise, plus a
/// separating space when a subtitle follows.
pub fn row_title(index: usize, title: &str, selected: bool, has_subtitle: bool) -> String {
    let marker = if selected { " => " } else { "    " };
    let separator = if has_subtitle { " " } else { "" };
    format!("{marker}{index}. {title}{separator}")
}

/// Fit the menu title line (title item above the list) into `max` cells.
/// Title is cut first; if it fits, the subtitle is cut. A line that fits is
/// padded to exactly `max` cells.
pub fn layout_title(metrics: &TextMetrics, title: &str, subtitle: &str, max: usize) -> ItemLayout {
    let separator = if subtitle.is_empty() { 0 } else { 1 };
    let raw_width = metrics.width(title) + separator + metrics.width(subtitle);
    if raw_width <= max {
        let title_part = metrics.width(title) + separator;
        return ItemLayout {
            title: title.to_string(),
            subtitle: metrics.fill_right(subtitle, max.saturating_sub(title_part)),
        };
    }

    let title_width = metrics.width(title);
    let limit = max.saturating_sub(1);
    if title_width >= limit {
        ItemLayout {
            title: metrics.truncate(title, limit),
            subtitle: String::new(),
        }
    } else {
        ItemLayout {
            title: title.to_string(),
            subtitle: metrics.truncate(subtitle, limit - title_width),
        }
    }
}

/// Where things go on screen for a given terminal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
    pub double_column: bool,
    pub menu_start_row: u16,
    pub menu_start_column: u16,
    pub menu_bottom_row: u16,
    pub title_start_row: u16,
    pub title_start_column: u16,
}

impl Geometry {
    pub fn compute(
        width: u16,
        height: u16,
        dual_column: bool,
        show_title: bool,
        page_size: usize,
    ) -> Self {
        // Column parity follows the absolute index, so pages must hold whole rows
        let double_column =
            dual_column && width >= DOUBLE_COLUMN_MIN_WIDTH && page_size % 2 == 0;

        let mut menu_start_row = height / 3;
        if !show_title && menu_start_row > 1 {
            menu_start_row -= 1;
        }

        let rows_per_page = page_rows(double_column, page_size);
        let menu_start_column = if double_column {
            width.saturating_sub(60) / 2
        } else {
            width.saturating_sub(20) / 2
        };
        let menu_bottom_row =
            (menu_start_row as usize + rows_per_page).saturating_sub(1) as u16;

        let min_row = if show_title { 2 } else { 1 };
        let title_start_row = if menu_start_row > min_row {
            if menu_start_row > min_row + 2 {
                menu_start_row - 3
            } else {
                2
            }
        } else {
            0
        };

        Self {
            width,
            height,
            double_column,
            menu_start_row,
            menu_start_column,
            menu_bottom_row,
            title_start_row,
            title_start_column: menu_start_column,
        }
    }

    /// Visual rows one page occupies.
    pub fn rows_per_page(&self, page_size: usize) -> usize {
        page_rows(self.double_column, page_size)
    }
}

fn page_rows(double_column: bool, page_size: usize) -> usize {
    if double_column {
        page_size.div_ceil(2)
    } else {
        page_size
    }
}
