//! # Menu Items
//!
//! A `MenuItem` is one selectable row: a title plus an optional subtitle.
//! Items are plain values. The engine never shares an item between the live
//! title and a stack frame; every hand-off is a clone.

/// A single row of a menu, or the title line above it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub subtitle: String,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Item with a title only.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(title, "")
    }

    pub fn has_subtitle(&self) -> bool {
        !self.subtitle.is_empty()
    }

    /// Unstyled `title subtitle` concatenation used for width measurement
    /// and search matching.
    pub fn raw(&self) -> String {
        if self.subtitle.is_empty() {
            return self.title.clone();
        }
        format!("{} {}", self.title, self.subtitle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_without_subtitle() {
        let item = MenuItem::titled("Daily picks");
        assert_eq!(item.raw(), "Daily picks");
        assert!(!item.has_subtitle());
    }

    #[test]
    fn test_raw_with_subtitle() {
        let item = MenuItem::new("Playlist", "42 tracks");
        assert_eq!(item.raw(), "Playlist 42 tracks");
    }
}
