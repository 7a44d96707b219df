use std::ops::Range;

use crate::percentiles;

/// Counts of values in equal-width bins spanning `[min, max]`.
///
/// Every bin is half-open except the last one, which also includes the
/// maximum value.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Bins in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// One bin and the number of values inside it.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// Covered values, start inclusive.
    pub range: Range<f64>,
    pub count: u64,
}

impl HistogramBin {
    /// Returns the midpoint of the bin.
    #[must_use]
    pub fn center(&self) -> f64 {
        f64::midpoint(self.range.start, self.range.end)
    }
}

impl Histogram {
    /// Creates a histogram from unsorted values with an automatically chosen bin count.
    ///
    /// See [`auto_bin_count`] for how the number of bins is selected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statviz_stats::histogram::Histogram;
    /// let values = [4.5, 1.0, 7.25, 3.0, 9.0, 2.0, 6.5, 8.0, 5.0, 10.0];
    /// let histogram = Histogram::new(values);
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        let num_bins = auto_bin_count(&sorted);
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram with `num_bins` equal-width bins from pre-sorted values.
    ///
    /// A dataset concentrated at a single value produces one bin of width 1
    /// centered on that value, regardless of `num_bins`.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statviz_stats::histogram::Histogram;
    /// let values = [0.0, 1.0, 2.0, 3.0, 4.0];
    /// let histogram = Histogram::from_sorted(&values, 2);
    /// assert_eq!(histogram.bins.len(), 2);
    /// assert_eq!(histogram.bins[0].count, 2);
    /// assert_eq!(histogram.bins[1].count, 3);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self { bins: vec![] };
        };
        if num_bins == 0 {
            return Self { bins: vec![] };
        }

        if max - min < f64::EPSILON * max.abs().max(1.0) {
            return Self {
                bins: vec![HistogramBin {
                    range: (min - 0.5)..(min + 0.5),
                    count: sorted_values.len() as u64,
                }],
            };
        }

        let bin_width = (max - min) / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute boundaries from `min` to avoid accumulation errors
                let start = min + (max - min) * bin_idx as f64 / num_bins as f64;
                let end = if bin_idx + 1 == num_bins {
                    max
                } else {
                    min + (max - min) * (bin_idx + 1) as f64 / num_bins as f64
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in sorted_values {
            let idx = (((val - min) / bin_width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Returns the common width of the bins, or `None` for an empty histogram.
    #[must_use]
    pub fn bin_width(&self) -> Option<f64> {
        self.bins.first().map(|bin| bin.range.end - bin.range.start)
    }

    /// Returns the largest bin count.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Returns the number of values counted by the histogram.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// Chooses a bin count for sorted data.
///
/// Takes the larger of the Sturges estimate `ceil(log2(n) + 1)` and the
/// Freedman–Diaconis estimate `ceil(range / (2 * IQR * n^(-1/3)))`. When the
/// IQR is zero only the Sturges estimate is used. Empty data yields zero bins
/// and a single distinct value yields one bin.
///
/// # Examples
///
/// ```
/// use statviz_stats::histogram::auto_bin_count;
///
/// assert_eq!(auto_bin_count(&[]), 0);
/// assert_eq!(auto_bin_count(&[3.0, 3.0]), 1);
/// assert_eq!(auto_bin_count(&[1.0, 2.0, 3.0, 4.0, 5.0]), 5);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn auto_bin_count(sorted_values: &[f64]) -> usize {
    let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
        return 0;
    };
    let range = max - min;
    if range <= 0.0 {
        return 1;
    }

    let n = sorted_values.len() as f64;
    let sturges = (n.log2() + 1.0).ceil() as usize;

    let iqr = percentiles::interquartile_range(sorted_values);
    let freedman_diaconis = if iqr > 0.0 {
        let width = 2.0 * iqr * n.powf(-1.0 / 3.0);
        (range / width).ceil() as usize
    } else {
        0
    };

    usize::max(sturges, freedman_diaconis).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let histogram = Histogram::new([]);
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.bin_width(), None);
        assert_eq!(histogram.max_count(), 0);
    }

    #[test]
    fn test_zero_bins_requested() {
        let histogram = Histogram::from_sorted(&[1.0, 2.0], 0);
        assert!(histogram.bins.is_empty());
    }

    #[test]
    fn test_constant_values_single_centered_bin() {
        let histogram = Histogram::new([4.0, 4.0, 4.0]);
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].range, 3.5..4.5);
        assert_eq!(histogram.bins[0].center(), 4.0);
        assert_eq!(histogram.bins[0].count, 3);
    }

    #[test]
    fn test_counts_sum_to_len() {
        let values = [1.0, 1.5, 2.0, 7.0, 7.5, 8.0, 9.0, 9.5, 10.0, 3.3];
        let histogram = Histogram::new(values);
        assert_eq!(histogram.total_count(), values.len() as u64);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let histogram = Histogram::from_sorted(&[0.0, 10.0], 5);
        assert_eq!(histogram.bins.len(), 5);
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[4].count, 1);
        assert_eq!(histogram.bins[4].range.end, 10.0);
    }

    #[test]
    fn test_bins_are_contiguous_and_equal_width() {
        let histogram = Histogram::from_sorted(&[2.0, 3.0, 5.0, 11.0], 3);
        let width = histogram.bin_width().unwrap();
        assert!((width - 3.0).abs() < 1e-12);
        for pair in histogram.bins.windows(2) {
            assert!((pair[0].range.end - pair[1].range.start).abs() < 1e-12);
        }
    }

    #[test]
    fn test_auto_bin_count_uses_freedman_diaconis_for_large_spread() {
        // 32 evenly spaced values: Sturges gives 6, FD gives more
        let values = (0..32).map(f64::from).collect::<Vec<_>>();
        let bins = auto_bin_count(&values);
        assert!(bins >= 6);
    }

    #[test]
    fn test_auto_bin_count_falls_back_to_sturges_on_zero_iqr() {
        let values = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 9.0];
        assert_eq!(auto_bin_count(&values), 4);
    }
}
