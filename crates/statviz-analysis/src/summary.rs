//! Per-column summary statistics.
//!
//! [`summarize`] computes seven statistics for each requested column of a
//! table and returns them in request order.

use serde::{Serialize, Serializer, ser::SerializeMap as _};
use statviz_data::Table;
use statviz_stats::descriptive::DescriptiveStats;

use crate::error::{AnalysisError, numeric_values};

/// One of the statistics reported for each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Statistic {
    #[display("Mean")]
    Mean,
    #[display("Median")]
    Median,
    #[display("Mode")]
    Mode,
    #[display("Standard Deviation")]
    StdDev,
    #[display("Variance")]
    Variance,
    #[display("Min")]
    Min,
    #[display("Max")]
    Max,
}

impl Statistic {
    /// All statistics in report order.
    pub const ALL: [Self; 7] = [
        Self::Mean,
        Self::Median,
        Self::Mode,
        Self::StdDev,
        Self::Variance,
        Self::Min,
        Self::Max,
    ];
}

/// Summary statistics of one column.
///
/// Variance and standard deviation are population measures (divisor `n`).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnSummary {
    #[must_use]
    pub fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Mean => self.mean,
            Statistic::Median => self.median,
            Statistic::Mode => self.mode,
            Statistic::StdDev => self.std_dev,
            Statistic::Variance => self.variance,
            Statistic::Min => self.min,
            Statistic::Max => self.max,
        }
    }
}

impl From<DescriptiveStats> for ColumnSummary {
    fn from(stats: DescriptiveStats) -> Self {
        let DescriptiveStats {
            min,
            max,
            mean,
            median,
            mode,
            variance,
            std_dev,
        } = stats;
        Self {
            mean,
            median,
            mode,
            std_dev,
            variance,
            min,
            max,
        }
    }
}

impl Serialize for ColumnSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Statistic::ALL.len()))?;
        for statistic in Statistic::ALL {
            map.serialize_entry(&statistic.to_string(), &self.get(statistic))?;
        }
        map.end()
    }
}

/// Summaries of several columns, keyed by column name in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsSummary {
    columns: Vec<(String, ColumnSummary)>,
}

impl StatisticsSummary {
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the summary of the column named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns
            .iter()
            .find_map(|(column, summary)| (column == name).then_some(summary))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnSummary)> + '_ {
        self.columns
            .iter()
            .map(|(name, summary)| (name.as_str(), summary))
    }
}

impl Serialize for StatisticsSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, summary) in &self.columns {
            map.serialize_entry(name, summary)?;
        }
        map.end()
    }
}

/// Computes summary statistics for each of `columns` in `table`.
///
/// The result lists the columns in the order given. An empty column list
/// yields an empty summary. Missing, categorical and empty columns are
/// rejected with an [`AnalysisError`] instead of producing undefined values.
///
/// # Examples
///
/// ```
/// use statviz_analysis::summarize;
/// use statviz_data::{Column, Table};
///
/// let table = Table::new([Column::integer("Score", vec![10, 20, 30, 40])]).unwrap();
/// let summary = summarize(&table, &["Score"]).unwrap();
/// let score = summary.get("Score").unwrap();
/// assert_eq!(score.mean, 25.0);
/// assert_eq!(score.median, 25.0);
/// assert_eq!(score.variance, 125.0);
/// ```
pub fn summarize<S>(table: &Table, columns: &[S]) -> Result<StatisticsSummary, AnalysisError>
where
    S: AsRef<str>,
{
    let columns = columns
        .iter()
        .map(|name| -> Result<_, AnalysisError> {
            let name = name.as_ref();
            let values = numeric_values(table, name)?;
            let stats = DescriptiveStats::new(values).ok_or_else(|| AnalysisError::EmptyColumn {
                name: name.to_owned(),
            })?;
            Ok((name.to_owned(), ColumnSummary::from(stats)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StatisticsSummary { columns })
}

#[cfg(test)]
mod tests {
    use statviz_data::{Column, ColumnKind};

    use super::*;

    fn survey() -> Table {
        Table::new([
            Column::integer("Respondent ID", vec![1, 2, 3, 4]),
            Column::float("Happiness Score", vec![2.5, 7.0, 7.0, 9.5]),
            Column::integer("Income (k)", vec![10, 20, 30, 40]),
            Column::categorical(
                "Education Level",
                ["PhD", "Master", "High School", "Bachelor"],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_known_values() {
        let summary = summarize(&survey(), &["Income (k)"]).unwrap();
        let income = summary.get("Income (k)").unwrap();
        assert_eq!(income.mean, 25.0);
        assert_eq!(income.median, 25.0);
        assert_eq!(income.min, 10.0);
        assert_eq!(income.max, 40.0);
        assert_eq!(income.variance, 125.0);
        assert!((income.std_dev - 125.0_f64.sqrt()).abs() < 1e-12);
        // Every value occurs once, so the smallest one is the mode
        assert_eq!(income.mode, 10.0);
    }

    #[test]
    fn test_float_column_mode() {
        let summary = summarize(&survey(), &["Happiness Score"]).unwrap();
        let happiness = summary.get("Happiness Score").unwrap();
        assert_eq!(happiness.mode, 7.0);
        assert_eq!(happiness.median, 7.0);
        assert_eq!(happiness.mean, 6.5);
    }

    #[test]
    fn test_preserves_request_order() {
        let summary = summarize(&survey(), &["Income (k)", "Happiness Score"]).unwrap();
        assert_eq!(
            summary.column_names().collect::<Vec<_>>(),
            ["Income (k)", "Happiness Score"]
        );
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_empty_column_list() {
        let summary = summarize::<&str>(&survey(), &[]).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_categorical_column_is_rejected() {
        let err = summarize(&survey(), &["Happiness Score", "Education Level"]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::NonNumericColumn {
                name: "Education Level".to_owned(),
                kind: ColumnKind::Categorical,
            }
        );
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let err = summarize(&survey(), &["Weight"]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::ColumnNotFound {
                name: "Weight".to_owned()
            }
        );
        assert_eq!(err.to_string(), "column 'Weight' not found");
    }

    #[test]
    fn test_empty_column_is_rejected() {
        let table = Table::new([Column::float("Nothing", vec![])]).unwrap();
        let err = summarize(&table, &["Nothing"]).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyColumn { .. }));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let table = Table::new([Column::float("x", vec![1.0, bad, 3.0])]).unwrap();
            let err = summarize(&table, &["x"]).unwrap_err();
            assert_eq!(
                err,
                AnalysisError::NonFiniteValue {
                    name: "x".to_owned()
                }
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let table = survey();
        let columns = ["Happiness Score", "Income (k)"];
        let first = summarize(&table, &columns).unwrap();
        let second = summarize(&table, &columns).unwrap();
        assert_eq!(first, second);
        assert_eq!(table, survey());
    }

    #[test]
    fn test_statistic_labels() {
        let labels = Statistic::ALL.map(|s| s.to_string());
        assert_eq!(
            labels,
            [
                "Mean",
                "Median",
                "Mode",
                "Standard Deviation",
                "Variance",
                "Min",
                "Max"
            ]
        );
    }

    #[test]
    fn test_serializes_in_request_order() {
        let summary = summarize(&survey(), &["Income (k)"]).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.starts_with(r#"{"Income (k)":{"Mean":25.0,"Median":25.0,"Mode":10.0,"#));
        assert!(json.ends_with(r#""Min":10.0,"Max":40.0}}"#));
    }
}
