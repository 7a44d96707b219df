//! Distribution of a single column: histogram and smoothed density.

use statviz_data::Table;
use statviz_stats::{histogram::Histogram, kde::GaussianKde};

use crate::error::{AnalysisError, numeric_values};

/// Number of points the density curve is evaluated at.
pub const DENSITY_POINTS: usize = 200;

/// Histogram of a column plus a density curve on the same count scale.
#[derive(Debug, Clone)]
pub struct ColumnDistribution {
    pub column: String,
    pub histogram: Histogram,
    /// `(x, expected count)` pairs spanning the observed range.
    ///
    /// Empty when no density can be estimated (fewer than two distinct values).
    pub density: Vec<(f64, f64)>,
}

impl ColumnDistribution {
    /// Returns the `(min, max)` of the x-axis: the outer bin edges.
    #[must_use]
    pub fn x_bounds(&self) -> (f64, f64) {
        let start = self.histogram.bins.first().map_or(0.0, |bin| bin.range.start);
        let end = self.histogram.bins.last().map_or(1.0, |bin| bin.range.end);
        (start, end)
    }

    /// Returns the largest count shown, bars or density.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn y_max(&self) -> f64 {
        let bars = self.histogram.max_count() as f64;
        self.density
            .iter()
            .map(|&(_, y)| y)
            .fold(bars, f64::max)
    }
}

/// Bins the values of `column` and estimates its density.
///
/// The density is a Gaussian KDE scaled by `n * bin_width`, so that it
/// overlays the bar heights of the histogram.
///
/// # Examples
///
/// ```
/// use statviz_analysis::column_distribution;
/// use statviz_data::{Column, Table};
///
/// let table = Table::new([Column::integer("Age", vec![23, 35, 41, 41, 58, 62, 70])]).unwrap();
/// let distribution = column_distribution(&table, "Age").unwrap();
/// assert_eq!(distribution.histogram.total_count(), 7);
/// assert!(!distribution.density.is_empty());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn column_distribution(table: &Table, column: &str) -> Result<ColumnDistribution, AnalysisError> {
    let values = numeric_values(table, column)?;
    let histogram = Histogram::new(values.iter().copied());

    let density = match (GaussianKde::new(values.iter().copied()), histogram.bin_width()) {
        (Some(kde), Some(bin_width)) => {
            let scale = values.len() as f64 * bin_width;
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            kde.evaluate_grid(min, max, DENSITY_POINTS)
                .into_iter()
                .map(|(x, d)| (x, d * scale))
                .collect()
        }
        _ => vec![],
    };

    Ok(ColumnDistribution {
        column: column.to_owned(),
        histogram,
        density,
    })
}
