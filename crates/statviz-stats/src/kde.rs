//! Gaussian kernel density estimation.
//!
//! The estimator places a normal kernel on every sample and averages them.
//! The kernel bandwidth follows Scott's rule: `n^(-1/5)` times the sample
//! standard deviation (divisor `n - 1`).

use std::f64::consts::PI;

/// Gaussian kernel density estimate of a one-dimensional dataset.
///
/// # Examples
///
/// ```
/// use statviz_stats::kde::GaussianKde;
///
/// let kde = GaussianKde::new([1.0, 2.0, 2.5, 3.0, 7.0]).unwrap();
/// assert!(kde.bandwidth() > 0.0);
/// assert!(kde.density(2.0) > kde.density(5.0));
/// ```
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Builds an estimator over `values`.
    ///
    /// # Returns
    ///
    /// * `Some(GaussianKde)` - if the dataset has a positive spread
    /// * `None` - if it has fewer than two samples or all samples are equal,
    ///   since no bandwidth can be derived
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let samples = values.into_iter().collect::<Vec<_>>();
        if samples.len() < 2 {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let sample_variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let bandwidth = n.powf(-0.2) * sample_variance.sqrt();
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return None;
        }

        Some(Self { samples, bandwidth })
    }

    /// Returns the kernel bandwidth.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Evaluates the probability density at `x`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn density(&self, x: f64) -> f64 {
        let norm = 1.0 / ((2.0 * PI).sqrt() * self.bandwidth * self.samples.len() as f64);
        let sum = self
            .samples
            .iter()
            .map(|s| {
                let z = (x - s) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>();
        norm * sum
    }

    /// Evaluates the density on `points` evenly spaced positions covering `[start, end]`.
    ///
    /// Returns `(x, density)` pairs in ascending `x` order. Fewer than two
    /// points yield the density at `start` only (or nothing for zero points).
    ///
    /// # Examples
    ///
    /// ```
    /// use statviz_stats::kde::GaussianKde;
    ///
    /// let kde = GaussianKde::new([0.0, 1.0, 2.0]).unwrap();
    /// let curve = kde.evaluate_grid(0.0, 2.0, 5);
    /// assert_eq!(curve.len(), 5);
    /// assert_eq!(curve[0].0, 0.0);
    /// assert_eq!(curve[4].0, 2.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn evaluate_grid(&self, start: f64, end: f64, points: usize) -> Vec<(f64, f64)> {
        match points {
            0 => vec![],
            1 => vec![(start, self.density(start))],
            _ => {
                let step = (end - start) / (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        let x = if i + 1 == points {
                            end
                        } else {
                            start + step * i as f64
                        };
                        (x, self.density(x))
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_inputs() {
        assert!(GaussianKde::new([]).is_none());
        assert!(GaussianKde::new([1.0]).is_none());
        assert!(GaussianKde::new([2.0, 2.0, 2.0]).is_none());
    }

    #[test]
    fn test_scott_bandwidth() {
        // sample std dev of [1, 2, 3, 4, 5] is sqrt(2.5)
        let kde = GaussianKde::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let expected = 5.0_f64.powf(-0.2) * 2.5_f64.sqrt();
        assert!((kde.bandwidth() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let kde = GaussianKde::new([1.0, 2.0, 4.0, 8.0, 9.0]).unwrap();
        let margin = 8.0 * kde.bandwidth();
        let curve = kde.evaluate_grid(1.0 - margin, 9.0 + margin, 4001);
        let integral = curve
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum::<f64>();
        assert!((integral - 1.0).abs() < 1e-3, "integral = {integral}");
    }

    #[test]
    fn test_density_is_symmetric_for_symmetric_data() {
        let kde = GaussianKde::new([-2.0, -1.0, 1.0, 2.0]).unwrap();
        assert!((kde.density(-1.5) - kde.density(1.5)).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_grid_small_point_counts() {
        let kde = GaussianKde::new([0.0, 1.0]).unwrap();
        assert!(kde.evaluate_grid(0.0, 1.0, 0).is_empty());
        let single = kde.evaluate_grid(0.5, 1.0, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].0, 0.5);
    }
}
