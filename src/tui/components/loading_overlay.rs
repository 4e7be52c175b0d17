//! # LoadingOverlay Component
//!
//! Terminal-backed `LoadingIndicator`. While a hook runs, the navigation
//! thread is blocked inside it and ratatui can't draw, so the overlay paints
//! straight to stdout with crossterm from its own tokio task:
//!
//! ```text
//! ⠹ Loading...
//! ```
//!
//! The line replaces the menu title. Frames are picked from the ticker's
//! shared clock. On `complete()` the painter is stopped and `needs_clear` is
//! raised; the event loop then clears the screen and redraws from state.

use std::cell::Cell;
use std::io::{self, Write, stdout};
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use log::warn;
use tokio::task::AbortHandle;

use crate::core::loading::LoadingIndicator;
use crate::core::ticker::SharedClock;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_MILLIS: u64 = 80;

/// Spinner glyph for the given clock reading.
pub fn spinner_frame(elapsed_millis: u64) -> &'static str {
    SPINNER[((elapsed_millis / FRAME_MILLIS) % SPINNER.len() as u64) as usize]
}

/// Everything one paint needs. Owned so it can move into the painter task.
#[derive(Debug, Clone)]
struct Paint {
    text: String,
    column: u16,
    row: u16,
}

impl Paint {
    fn line(&self, elapsed_millis: u64) -> String {
        format!("{} {}", spinner_frame(elapsed_millis), self.text)
    }

    fn draw(&self, elapsed_millis: u64) -> io::Result<()> {
        let mut out = stdout();
        queue!(
            out,
            MoveTo(self.column, self.row),
            SetForegroundColor(Color::Green),
            Print(self.line(elapsed_millis)),
            ResetColor
        )?;
        out.flush()
    }
}

fn lock(active: &Mutex<bool>) -> MutexGuard<'_, bool> {
    match active.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub struct LoadingOverlay {
    text: String,
    clock: SharedClock,
    /// Screen position (column, row), kept current by the event loop
    anchor: Rc<Cell<(u16, u16)>>,
    needs_clear: Rc<Cell<bool>>,
    /// Held while painting; `false` once complete() has run
    active: Arc<Mutex<bool>>,
    task: Option<AbortHandle>,
}

impl LoadingOverlay {
    pub fn new(text: impl Into<String>, clock: SharedClock) -> Self {
        Self {
            text: text.into(),
            clock,
            anchor: Rc::new(Cell::new((0, 0))),
            needs_clear: Rc::new(Cell::new(false)),
            active: Arc::new(Mutex::new(false)),
            task: None,
        }
    }

    /// Handle the event loop uses to move the overlay on resize.
    pub fn anchor(&self) -> Rc<Cell<(u16, u16)>> {
        self.anchor.clone()
    }

    /// Raised by `complete()`; the event loop resets it after clearing.
    pub fn needs_clear(&self) -> Rc<Cell<bool>> {
        self.needs_clear.clone()
    }

    fn paint(&self) -> Paint {
        let (column, row) = self.anchor.get();
        Paint {
            text: self.text.clone(),
            column,
            row,
        }
    }
}

impl LoadingIndicator for LoadingOverlay {
    fn start(&mut self) {
        *lock(&self.active) = true;
        let paint = self.paint();
        if let Err(e) = paint.draw(self.clock.elapsed_millis()) {
            warn!("Loading overlay paint failed: {}", e);
        }

        // No runtime (e.g. headless use): the first frame is all we show
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let clock = self.clock.clone();
        let active = self.active.clone();
        let task = runtime.spawn(async move {
            let mut ticks = tokio::time::interval(Duration::from_millis(FRAME_MILLIS));
            loop {
                ticks.tick().await;
                let guard = lock(&active);
                if !*guard {
                    break;
                }
                if let Err(e) = paint.draw(clock.elapsed_millis()) {
                    warn!("Loading overlay paint failed: {}", e);
                    break;
                }
            }
        });
        self.task = Some(task.abort_handle());
    }

    fn complete(&mut self) {
        // Waits out a paint in progress so it can't land after the redraw
        *lock(&self.active) = false;
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.needs_clear.set(true);
    }
}

impl Drop for LoadingOverlay {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
