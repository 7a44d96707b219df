//! Terminal figure viewer.
//!
//! Figures are ratatui widgets wrapped in the [`Page`] trait. A [`Pager`]
//! shows them one at a time and closes after the last one, so a caller can
//! treat [`show`] like a blocking plot window.

use std::io;

pub use self::{
    app::App,
    pager::{Page, Pager},
    runtime::Runtime,
};

mod app;
mod event;
mod event_loop;
mod pager;
mod runtime;

/// Displays `pages` in the terminal and returns once the pager is closed.
///
/// Returns immediately without touching the terminal when `pages` is empty.
pub fn show<'a>(pages: Vec<Box<dyn Page + 'a>>) -> io::Result<()> {
    if pages.is_empty() {
        return Ok(());
    }
    Runtime::new().run(&mut Pager::new(pages))
}
