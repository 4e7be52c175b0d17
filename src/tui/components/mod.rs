//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: rule with the application name
//! - `MenuList`: menu title line and the rows of the current page
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: query input, emits `SearchEvent`s
//!
//! ### Out-of-band
//!
//! - `LoadingOverlay`: paints to the terminal directly while a hook blocks
//!   the event loop; plugged into the navigator as its `LoadingIndicator`
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top rule)
//! ├── menu_list.rs        (Menu title + rows)
//! ├── loading_overlay.rs  (Spinner during hooks)
//! └── search_box/         (Query input)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod loading_overlay;
pub mod menu_list;
pub mod search_box;
pub use loading_overlay::LoadingOverlay;
pub use menu_list::MenuList;
pub use search_box::{SearchBox, SearchEvent};
