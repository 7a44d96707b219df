use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::{Marker, merge::MergeStrategy},
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};
use statviz_analysis::ColumnDistribution;
use statviz_stats::histogram::Histogram;
use statviz_viewer::Page;

/// Frequency bars of one column with the density curve drawn on top.
#[derive(Debug)]
pub(crate) struct HistogramFigure {
    title: String,
    distribution: ColumnDistribution,
}

impl HistogramFigure {
    pub(crate) fn new(domain_title: &str, distribution: ColumnDistribution) -> Self {
        Self {
            title: format!("{domain_title}: Histogram of {}", distribution.column),
            distribution,
        }
    }
}

impl Page for HistogramFigure {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        Widget::render(self, area, buf);
    }
}

impl Widget for &HistogramFigure {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (x_min, x_max) = self.distribution.x_bounds();
        let y_max = self.distribution.y_max().max(1.0) * 1.1;
        let bars = bar_points(&self.distribution.histogram, usize::from(area.width) * 2);

        let bar_dataset = Dataset::default()
            .name("count")
            .marker(Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Blue))
            .data(&bars);
        let density_dataset = Dataset::default()
            .name("density")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&self.distribution.density);

        let x_axis = Axis::default()
            .title(self.distribution.column.as_str())
            .bounds([x_min, x_max])
            .labels(axis_labels(x_min, x_max));
        let y_axis = Axis::default()
            .title("Frequency")
            .bounds([0.0, y_max])
            .labels(axis_labels(0.0, y_max));

        let chart = Chart::new(vec![bar_dataset, density_dataset])
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(self.title.as_str()),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);

        Widget::render(chart, area, buf);
    }
}

/// Number of labels per axis, evenly spaced from `min` to `max`.
const AXIS_TICKS: usize = 5;

#[expect(clippy::cast_precision_loss)]
fn axis_labels(min: f64, max: f64) -> Vec<String> {
    (0..AXIS_TICKS)
        .map(|i| {
            let value = min + (max - min) * i as f64 / (AXIS_TICKS - 1) as f64;
            format!("{value:.2}")
        })
        .collect()
}

/// Samples the histogram outline at `resolution` evenly spaced x positions.
///
/// Drawn as a bar graph, the points fill the area under every bin.
#[expect(clippy::cast_precision_loss)]
fn bar_points(histogram: &Histogram, resolution: usize) -> Vec<(f64, f64)> {
    let (Some(first), Some(last)) = (histogram.bins.first(), histogram.bins.last()) else {
        return vec![];
    };
    let (start, end) = (first.range.start, last.range.end);
    let steps = resolution.max(histogram.bins.len()).max(2) - 1;

    let mut bins = histogram.bins.iter().peekable();
    (0..=steps)
        .filter_map(|i| {
            let x = start + (end - start) * i as f64 / steps as f64;
            while bins.next_if(|bin| x >= bin.range.end && x < end).is_some() {}
            let bin = bins.peek()?;
            Some((x, bin.count as f64))
        })
        .collect()
}
