use std::io;

use crate::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Owns the terminal for the duration of `run()` and restores it afterwards.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the application until `app.should_exit()` returns true.
    ///
    /// - `Render`: calls `app.draw()`
    /// - `Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App + ?Sized,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&event);
                    }
                }
            }
            Ok(())
        })
    }
}
