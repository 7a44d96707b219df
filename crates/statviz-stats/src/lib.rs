//! Statistical routines for the statviz project.
//!
//! This crate provides the numeric building blocks behind the summaries and figures:
//!
//! - **Descriptive statistics**: mean, median, mode, population variance and standard deviation, min, max
//! - **Percentiles**: linearly interpolated percentiles and the interquartile range
//! - **Histogram generation**: equal-width binning with an automatic bin count
//! - **Kernel density estimation**: Gaussian KDE with Scott's bandwidth
//! - **Correlation**: Pearson coefficients and correlation matrices
//!
//! Nothing here knows about tables or rendering; every function works on plain `f64` slices.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation
//! - [`histogram`]: Histogram construction for visualizing data distributions
//! - [`kde`]: Smoothed density curves
//! - [`correlation`]: Pairwise linear correlation
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use statviz_stats::descriptive::DescriptiveStats;
//!
//! let values = [10.0, 20.0, 30.0, 40.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 25.0);
//! assert_eq!(stats.variance, 125.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use statviz_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::new(values);
//! assert_eq!(histogram.total_count(), 10);
//! ```
//!
//! ## Correlating two series
//!
//! ```
//! use statviz_stats::correlation::CorrelationMatrix;
//!
//! let x = [1.0, 2.0, 3.0];
//! let y = [3.0, 2.0, 1.0];
//! let matrix = CorrelationMatrix::from_series(&[&x, &y]);
//! assert_eq!(matrix.get(1, 0), -1.0);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod histogram;
pub mod kde;
pub mod percentiles;
