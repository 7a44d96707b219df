use std::fmt;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Widget,
};

use crate::App;

/// One figure shown by a [`Pager`].
pub trait Page: fmt::Debug {
    /// Short name of the page, used for diagnostics.
    fn title(&self) -> &str;

    /// Renders the page into `area`.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Shows pages one at a time.
///
/// | key                               | action                                  |
/// |-----------------------------------|-----------------------------------------|
/// | `→` / `l` / `Space` / `Enter`     | next page; past the last page closes    |
/// | `←` / `h`                         | previous page                           |
/// | `q` / `Esc`                       | close                                   |
///
/// The bottom line shows `figure i/n` and the key help.
#[derive(Debug)]
pub struct Pager<'a> {
    pages: Vec<Box<dyn Page + 'a>>,
    current: usize,
    closed: bool,
}

impl<'a> Pager<'a> {
    #[must_use]
    pub fn new(pages: Vec<Box<dyn Page + 'a>>) -> Self {
        Self {
            pages,
            current: 0,
            closed: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Index of the page currently shown.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<&(dyn Page + 'a)> {
        self.pages.get(self.current).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Advances to the next page, closing the pager after the last one.
    pub fn next_page(&mut self) {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
        } else {
            self.closed = true;
        }
    }

    /// Goes back one page, staying on the first one.
    pub fn previous_page(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Right | KeyCode::Char('l' | ' ') | KeyCode::Enter => self.next_page(),
            KeyCode::Left | KeyCode::Char('h') => self.previous_page(),
            KeyCode::Char('q') | KeyCode::Esc => self.close(),
            _ => {}
        }
    }

    fn footer(&self) -> String {
        format!(
            "figure {}/{} | →/l/Space/Enter: Next | ←/h: Previous | q/Esc: Close",
            self.current + 1,
            self.pages.len()
        )
    }
}

impl App for Pager<'_> {
    fn should_exit(&self) -> bool {
        self.closed || self.pages.is_empty()
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(key) = event.as_key_event() {
            self.handle_key(&key);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &Pager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [page_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        if let Some(page) = self.current() {
            page.render(page_area, buf);
        }

        Line::from(self.footer())
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .render(help_area, buf);
    }
}
