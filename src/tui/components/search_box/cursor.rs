//! Cursor position tracking for the SearchBox.
//!
//! The cursor is a byte offset into the buffer owned by `SearchBox`; every
//! method takes the buffer explicitly.

use unicode_width::UnicodeWidthStr;

pub(super) struct CursorState {
    /// Byte offset in buffer (0..=buffer.len())
    pub pos: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0 }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Returns `true` if the cursor moved.
    pub fn move_left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    /// Returns `true` if the cursor moved.
    pub fn move_right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    pub fn move_home(&mut self) -> bool {
        std::mem::replace(&mut self.pos, 0) != 0
    }

    pub fn move_end(&mut self, buffer: &str) -> bool {
        std::mem::replace(&mut self.pos, buffer.len()) != buffer.len()
    }

    /// Display cells between the start of the buffer and the cursor.
    pub fn column(&self, buffer: &str) -> u16 {
        buffer[..self.pos].width() as u16
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_char_boundary_multibyte() {
        // "café": 'é' starts at byte 3, len 2
        let s = "café";
        assert_eq!(prev_char_boundary(s, 5), 3);
        assert_eq!(prev_char_boundary(s, 3), 2);
    }

    #[test]
    fn next_char_boundary_cjk() {
        // Each of these is 3 bytes
        let s = "周杰伦";
        assert_eq!(next_char_boundary(s, 0), 3);
        assert_eq!(next_char_boundary(s, 6), 9);
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut cursor = CursorState::new();
        assert!(!cursor.move_left("ab"));
        assert!(cursor.move_end("ab"));
        assert!(!cursor.move_right("ab"));
        assert!(!cursor.move_end("ab"));
        assert!(cursor.move_home());
    }

    #[test]
    fn column_counts_cells_not_bytes() {
        let mut cursor = CursorState::new();
        cursor.move_end("a周");
        assert_eq!(cursor.pos, 4);
        assert_eq!(cursor.column("a周"), 3);
    }
}
