//! Table-level statistics for the statviz pipeline.
//!
//! This crate connects the [`statviz_data`] tables to the numeric routines of
//! [`statviz_stats`]:
//!
//! - [`summarize`]: seven summary statistics per numeric column
//! - [`correlation_matrix`]: pairwise Pearson correlations between columns
//! - [`column_distribution`]: histogram and density curve of one column
//!
//! All functions only borrow the table and report missing, categorical or
//! empty columns as [`AnalysisError`]. Nothing here renders anything, so the
//! results can be checked without a terminal.

pub use self::{
    correlation::{ColumnCorrelation, correlation_matrix},
    distribution::{ColumnDistribution, column_distribution},
    error::{AnalysisError, numeric_values},
    summary::{ColumnSummary, Statistic, StatisticsSummary, summarize},
};

pub mod correlation;
pub mod distribution;
pub mod error;
pub mod summary;
