use crate::percentiles;

/// Location and spread of a set of `f64` values.
///
/// Dispersion is measured over the
/// whole population (divisor `n`), not as a sample estimate (divisor `n - 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value. For an even number of values this is the average of the two middle values.
    pub median: f64,
    /// The most frequent value of the dataset.
    ///
    /// When several values are equally frequent, the smallest one is reported.
    pub mode: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Collects and sorts `values`, then summarizes them.
    ///
    /// Returns `None` for an empty input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statviz_stats::descriptive::DescriptiveStats;
    /// let values = [40.0, 10.0, 30.0, 20.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 10.0);
    /// assert_eq!(stats.max, 40.0);
    /// assert_eq!(stats.mean, 25.0);
    /// assert_eq!(stats.median, 25.0);
    /// assert_eq!(stats.variance, 125.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Summarizes values that are already in ascending order.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statviz_stats::descriptive::DescriptiveStats;
    /// let mut values = [5.0, 2.0, 4.0, 2.0, 3.0];
    /// values.sort_by(f64::total_cmp);
    /// let stats = DescriptiveStats::from_sorted(&values).unwrap();
    /// assert_eq!(stats.min, 2.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mode, 2.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let n = sorted_values.len() as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = percentiles::compute_percentile(sorted_values, 50.0);
        let mode = compute_mode(sorted_values)?;
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        Some(Self {
            min,
            max,
            mean,
            median,
            mode,
            variance,
            std_dev,
        })
    }
}

/// Returns the most frequent value of sorted data.
///
/// Equal values are adjacent in sorted data, so the mode is the value of the
/// longest run. The first longest run wins, which makes the smallest of
/// several equally frequent values the mode.
///
/// # Returns
///
/// `None` if the input is empty.
///
/// # Examples
///
/// ```
/// use statviz_stats::descriptive::compute_mode;
///
/// assert_eq!(compute_mode(&[1.0, 2.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(compute_mode(&[1.0, 1.0, 3.0, 3.0]), Some(1.0));
/// assert_eq!(compute_mode(&[]), None);
/// ```
#[must_use]
pub fn compute_mode(sorted_values: &[f64]) -> Option<f64> {
    sorted_values
        .chunk_by(|a, b| a.total_cmp(b).is_eq())
        .fold(None, |best: Option<&[f64]>, run| match best {
            Some(best) if best.len() >= run.len() => Some(best),
            _ => Some(run),
        })
        .map(|run| run[0])
}
