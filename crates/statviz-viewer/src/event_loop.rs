use std::io;

use crossterm::event;

use crate::event::TuiEvent;

/// Event loop state management.
///
/// Renders only after a state change: the first call to `next()` yields
/// `Render`, and so does every call following a crossterm event.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        Self {
            dirty: true, // Initial render is required on startup
        }
    }

    /// Returns the next event.
    ///
    /// Blocks until a crossterm event occurs unless a render is pending.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}
