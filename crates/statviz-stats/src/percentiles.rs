/// Computes a single percentile value from sorted data.
///
/// This function uses linear interpolation between the two closest ranks.
/// For a dataset with n values, the k-th percentile lies at the fractional
/// position `(n - 1) * k / 100`, and the result is interpolated between the
/// values on either side of that position.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `percentile` - The percentile to compute (0.0 to 100.0)
///
/// # Returns
///
/// The value at the specified percentile. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use statviz_stats::percentiles::compute_percentile;
///
/// let values = [10.0, 20.0, 30.0, 40.0];
///
/// let median = compute_percentile(&values, 50.0);
/// assert_eq!(median, 25.0);
///
/// let p25 = compute_percentile(&values, 25.0);
/// assert_eq!(p25, 17.5);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );

    let Some(last) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let rank = (last as f64 * percentile.clamp(0.0, 100.0)) / 100.0;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - rank.floor();
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * fraction
}

/// Computes the interquartile range (P75 - P25) of sorted data.
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use statviz_stats::percentiles::interquartile_range;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(interquartile_range(&values), 2.0);
/// ```
#[must_use]
pub fn interquartile_range(sorted_values: &[f64]) -> f64 {
    compute_percentile(sorted_values, 75.0) - compute_percentile(sorted_values, 25.0)
}
