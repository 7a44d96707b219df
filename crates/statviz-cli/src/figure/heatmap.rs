use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize as _},
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, Widget},
};
use statviz_analysis::ColumnCorrelation;
use statviz_viewer::Page;

use crate::figure::colormap;

const COLORBAR_WIDTH: u16 = 8;

/// Annotated correlation heatmap with a color bar on the right.
#[derive(Debug)]
pub(crate) struct CorrelationFigure {
    title: String,
    correlation: ColumnCorrelation,
}

impl CorrelationFigure {
    pub(crate) fn new(domain_title: &str, correlation: ColumnCorrelation) -> Self {
        Self {
            title: format!("{domain_title}: Correlation Matrix"),
            correlation,
        }
    }
}

impl Page for CorrelationFigure {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        Widget::render(self, area, buf);
    }
}

impl Widget for &CorrelationFigure {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title(self.title.as_str());
        let inner = block.inner(area);
        block.render(area, buf);

        let [grid_area, _, colorbar_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(COLORBAR_WIDTH),
        ])
        .areas(inner);

        render_grid(&self.correlation, grid_area, buf);
        render_colorbar(colorbar_area, buf);
    }
}

/// Formats one cell annotation.
fn annotation(value: f64) -> String {
    if value.is_nan() {
        "nan".to_owned()
    } else {
        format!("{value:.2}")
    }
}

#[expect(clippy::cast_possible_truncation)]
fn render_grid(correlation: &ColumnCorrelation, area: Rect, buf: &mut Buffer) {
    let n = correlation.columns.len();
    if n == 0 || area.is_empty() {
        return;
    }

    let label_width = correlation
        .columns
        .iter()
        .map(|name| name.chars().count() + 1)
        .max()
        .unwrap_or(0)
        .min(usize::from(area.width / 3)) as u16;

    let col_areas = Layout::horizontal(
        iter::once(Constraint::Length(label_width)).chain(iter::repeat_n(Constraint::Fill(1), n)),
    )
    .split(area);
    let row_areas =
        Layout::vertical(iter::once(Constraint::Length(1)).chain(iter::repeat_n(Constraint::Fill(1), n)))
            .split(area);

    for (name, col_area) in correlation.columns.iter().zip(&col_areas[1..]) {
        let header = Rect {
            y: row_areas[0].y,
            height: row_areas[0].height,
            ..*col_area
        };
        Line::from(name.as_str()).centered().render(header, buf);
    }

    for (row, (name, row_area)) in correlation.columns.iter().zip(&row_areas[1..]).enumerate() {
        if row_area.height == 0 {
            continue;
        }
        let middle = row_area.y + row_area.height / 2;
        let label = Rect {
            y: middle,
            height: 1,
            ..col_areas[0]
        };
        Line::from(name.as_str()).render(label, buf);

        for (col, col_area) in col_areas[1..].iter().enumerate() {
            let value = correlation.matrix.get(row, col);
            let background = colormap::coolwarm(value);
            let cell = Rect {
                y: row_area.y,
                height: row_area.height,
                ..*col_area
            };
            buf.set_style(cell, Style::default().bg(background));
            Line::from(annotation(value))
                .fg(colormap::contrast_text(background))
                .centered()
                .render(Rect { y: middle, height: 1, ..cell }, buf);
        }
    }
}

fn render_colorbar(area: Rect, buf: &mut Buffer) {
    if area.height == 0 || area.width < 2 {
        return;
    }
    let last = f64::from(area.height.saturating_sub(1).max(1));
    for dy in 0..area.height {
        let value = 1.0 - 2.0 * f64::from(dy) / last;
        let strip = Rect::new(area.x, area.y + dy, 2, 1);
        buf.set_style(strip, Style::default().bg(colormap::coolwarm(value)));
    }

    // Strip, one blank column, then the tick labels
    if area.width <= 3 {
        return;
    }
    let label_area = Rect {
        x: area.x + 3,
        width: area.width - 3,
        ..area
    };
    let ticks = [
        (0, " 1.00"),
        (label_area.height / 2, " 0.00"),
        (label_area.height.saturating_sub(1), "-1.00"),
    ];
    for (dy, text) in ticks {
        let tick = Rect {
            y: label_area.y + dy,
            height: 1,
            ..label_area
        };
        Line::from(text).render(tick, buf);
    }
}

#[cfg(test)]
mod tests {
    use statviz_analysis::correlation_matrix;
    use statviz_data::{Column, Table};

    use super::*;
    use crate::figure::tests::buffer_text;

    fn correlation(columns: &[&str]) -> ColumnCorrelation {
        let table = Table::new([
            Column::integer("up", vec![1, 2, 3]),
            Column::integer("down", vec![3, 2, 1]),
            Column::integer("flat", vec![5, 5, 5]),
        ])
        .unwrap();
        correlation_matrix(&table, columns).unwrap()
    }

    fn render(figure: &CorrelationFigure) -> Buffer {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        Widget::render(figure, area, &mut buf);
        buf
    }

    #[test]
    fn test_annotation() {
        assert_eq!(annotation(-1.0), "-1.00");
        assert_eq!(annotation(0.123), "0.12");
        assert_eq!(annotation(f64::NAN), "nan");
    }

    #[test]
    fn test_renders_labels_and_values() {
        let figure = CorrelationFigure::new("Computing", correlation(&["up", "down"]));
        assert_eq!(figure.title(), "Computing: Correlation Matrix");

        let text = buffer_text(&render(&figure));
        assert!(text.contains("Computing: Correlation Matrix"));
        assert!(text.contains("up"));
        assert!(text.contains("down"));
        assert!(text.contains("-1.00"));
        assert!(text.contains("1.00"));
    }

    #[test]
    fn test_cells_are_colored_by_value() {
        let figure = CorrelationFigure::new("Computing", correlation(&["up", "down"]));
        let buf = render(&figure);

        let backgrounds = buf
            .content()
            .iter()
            .map(|cell| cell.bg)
            .collect::<Vec<_>>();
        assert!(backgrounds.contains(&colormap::POSITIVE));
        assert!(backgrounds.contains(&colormap::NEGATIVE));
    }

    #[test]
    fn test_renders_in_narrow_areas() {
        let figures = [
            CorrelationFigure::new("Computing", correlation(&["up", "down"])),
            CorrelationFigure::new("Medical", correlation(&["up", "down", "flat"])),
        ];
        for figure in &figures {
            for width in 1..=20 {
                for height in 1..=8 {
                    let area = Rect::new(0, 0, width, height);
                    let mut buf = Buffer::empty(area);
                    Widget::render(figure, area, &mut buf);
                }
            }
        }
    }

    #[test]
    fn test_colorbar_without_room_for_labels() {
        for width in 0..=4 {
            let area = Rect::new(0, 0, width, 5);
            let mut buf = Buffer::empty(Rect::new(0, 0, 4, 5));
            render_colorbar(area, &mut buf);
        }
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 5));
        render_colorbar(Rect::new(0, 0, 8, 5), &mut buf);
        assert!(buffer_text(&buf).contains("-1.00"));
    }

    #[test]
    fn test_constant_column_shows_nan() {
        let figure = CorrelationFigure::new("Medical", correlation(&["up", "flat"]));
        let buf = render(&figure);
        assert!(buffer_text(&buf).contains("nan"));
        assert!(buf.content().iter().any(|cell| cell.bg == colormap::MISSING));
    }
}
