//! # Actions
//!
//! Everything the user can do to the menu becomes an `Action`.
//! Pressing `j`? That's `Action::MoveDown`. Typing in the search box?
//! That's `Action::SearchChanged(text)`.
//!
//! The `update()` function applies an action to the navigator and returns an
//! `Effect` telling the adapter what to do next (redraw, clear, quit).
//!
//! ```text
//! Navigator + Action  →  update()  →  Effect
//! ```
//!
//! While the search box has focus only search actions, `Resize` and `Quit`
//! are honoured; movement is dropped.

use log::debug;

use crate::core::navigator::Navigator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveTop,
    MoveBottom,
    PrevPage,
    NextPage,
    /// Digit key: select that row of the current page.
    JumpTo(u8),
    Enter,
    Back,
    /// Repaint from scratch.
    Rerender,
    StartSearch,
    SearchChanged(String),
    SubmitSearch,
    CancelSearch,
    /// New terminal size; `double_column` is already derived from it.
    Resize {
        width: u16,
        height: u16,
        double_column: bool,
    },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    /// Clear the whole screen before drawing.
    ClearAndRedraw,
    Quit,
}

pub fn update(nav: &mut Navigator, action: Action) -> Effect {
    if nav.state().searching {
        return update_searching(nav, action);
    }

    match action {
        Action::MoveUp => nav.move_up(),
        Action::MoveDown => nav.move_down(),
        Action::MoveLeft => nav.move_left(),
        Action::MoveRight => nav.move_right(),
        Action::MoveTop => nav.move_top(),
        Action::MoveBottom => nav.move_bottom(),
        Action::PrevPage => {
            nav.prev_page();
        }
        Action::NextPage => {
            nav.next_page();
        }
        Action::JumpTo(digit) => nav.jump_to(usize::from(digit)),
        Action::Enter => nav.enter_menu(),
        Action::Back => nav.back_menu(),
        Action::Rerender => return Effect::ClearAndRedraw,
        Action::StartSearch => {
            if !nav.start_search() {
                return Effect::None;
            }
        }
        Action::Resize {
            width,
            height,
            double_column,
        } => return resize(nav, width, height, double_column),
        Action::Quit => return Effect::Quit,
        // Search actions without an active search box
        Action::SearchChanged(_) | Action::SubmitSearch | Action::CancelSearch => {
            return Effect::None;
        }
    }
    Effect::Redraw
}

fn update_searching(nav: &mut Navigator, action: Action) -> Effect {
    match action {
        Action::SearchChanged(text) => {
            nav.set_search_text(text);
            Effect::Redraw
        }
        Action::SubmitSearch => {
            nav.submit_search();
            Effect::ClearAndRedraw
        }
        Action::CancelSearch => {
            nav.cancel_search();
            Effect::ClearAndRedraw
        }
        Action::Resize {
            width,
            height,
            double_column,
        } => resize(nav, width, height, double_column),
        Action::Quit => Effect::Quit,
        other => {
            debug!("Dropping {:?} while searching", other);
            Effect::None
        }
    }
}

fn resize(nav: &mut Navigator, width: u16, height: u16, double_column: bool) -> Effect {
    debug!(
        "Resize to {}x{} (double column: {})",
        width, height, double_column
    );
    nav.set_double_column(double_column);
    Effect::ClearAndRedraw
}
