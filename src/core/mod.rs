//! # Core Navigation Logic
//!
//! This module contains the menu engine: items, the `Menu` capability trait,
//! the navigator and its history stack, paging, search, and the layout math
//! the renderer relies on. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Menu (capabilities)  │
//!                    │  • Navigator (stack)    │
//!                    │  • Action / update()    │
//!                    │  • Layout (cell math)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Tests    │
//!            │  Adapter   │            │ (headless) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`]: The `Menu` trait and hook types
//! - [`navigator`]: The `Navigator`: cursor, paging and menu history
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`layout`]: Cell-width measurement, marquee and screen geometry
//! - [`ticker`]: Background repaint clock

pub mod action;
pub mod config;
pub mod item;
pub mod layout;
pub mod loading;
pub mod menu;
pub mod navigator;
pub mod search;
pub mod state;
pub mod ticker;

// Re-export commonly used types for convenience
pub use item::MenuItem;
pub use menu::{Hook, Menu, MenuRef, hook};
pub use navigator::Navigator;
pub use state::NavigationState;
