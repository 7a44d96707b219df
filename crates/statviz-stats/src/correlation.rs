//! Pearson product-moment correlation.

/// Computes the Pearson correlation coefficient of two equally long series.
///
/// Returns `f64::NAN` when the series differ in length, have fewer than two
/// values, or either of them has zero variance.
///
/// # Examples
///
/// ```
/// use statviz_stats::correlation::pearson;
///
/// assert_eq!(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 1.0);
/// assert_eq!(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0);
/// assert!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    (cov / denom).clamp(-1.0, 1.0)
}

/// Square matrix of pairwise Pearson correlations.
///
/// Entry `(i, j)` holds the correlation between series `i` and `j`. The
/// matrix is symmetric; the diagonal is `1.0` for every series with a
/// positive variance and `NaN` otherwise.
///
/// # Examples
///
/// ```
/// use statviz_stats::correlation::CorrelationMatrix;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [3.0, 2.0, 1.0];
/// let matrix = CorrelationMatrix::from_series(&[&a, &b]);
/// assert_eq!(matrix.size(), 2);
/// assert_eq!(matrix.get(0, 0), 1.0);
/// assert_eq!(matrix.get(0, 1), -1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    size: usize,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Computes the correlation of every pair of `series`.
    #[must_use]
    pub fn from_series(series: &[&[f64]]) -> Self {
        let size = series.len();
        let mut values = vec![f64::NAN; size * size];
        for i in 0..size {
            for j in i..size {
                let r = if i == j {
                    // Self-correlation without the rounding of the general formula
                    if pearson(series[i], series[i]).is_nan() {
                        f64::NAN
                    } else {
                        1.0
                    }
                } else {
                    pearson(series[i], series[j])
                };
                values[i * size + j] = r;
                values[j * size + i] = r;
            }
        }
        Self { size, values }
    }

    /// Returns the number of series (rows and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the correlation between series `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.size && col < self.size, "index out of bounds");
        self.values[row * self.size + col]
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.size.max(1))
    }
}
