//! Correlation matrices over table columns.

use statviz_data::Table;
use statviz_stats::correlation::CorrelationMatrix;

use crate::error::{AnalysisError, numeric_values};

/// Pearson correlation matrix labeled with the columns it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCorrelation {
    pub columns: Vec<String>,
    pub matrix: CorrelationMatrix,
}

impl ColumnCorrelation {
    /// Returns the correlation between the columns named `a` and `b`.
    #[must_use]
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let row = self.columns.iter().position(|name| name == a)?;
        let col = self.columns.iter().position(|name| name == b)?;
        Some(self.matrix.get(row, col))
    }
}

/// Computes the Pearson correlation of every pair of `columns` in `table`.
///
/// Zero-variance columns produce `NaN` entries rather than an error.
///
/// # Examples
///
/// ```
/// use statviz_analysis::correlation_matrix;
/// use statviz_data::{Column, Table};
///
/// let table = Table::new([
///     Column::integer("x", vec![1, 2, 3]),
///     Column::integer("y", vec![3, 2, 1]),
/// ])
/// .unwrap();
/// let correlation = correlation_matrix(&table, &["x", "y"]).unwrap();
/// assert_eq!(correlation.between("x", "y"), Some(-1.0));
/// ```
pub fn correlation_matrix<S>(table: &Table, columns: &[S]) -> Result<ColumnCorrelation, AnalysisError>
where
    S: AsRef<str>,
{
    let series = columns
        .iter()
        .map(|name| numeric_values(table, name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let series_refs = series.iter().map(Vec::as_slice).collect::<Vec<_>>();

    Ok(ColumnCorrelation {
        columns: columns.iter().map(|name| name.as_ref().to_owned()).collect(),
        matrix: CorrelationMatrix::from_series(&series_refs),
    })
}

#[cfg(test)]
mod tests {
    use statviz_data::Column;

    use super::*;

    fn patients() -> Table {
        Table::new([
            Column::integer("Patient ID", vec![1, 2, 3, 4, 5]),
            Column::integer("Age", vec![25, 35, 45, 55, 65]),
            Column::integer("Blood Pressure", vec![120, 125, 140, 150, 170]),
            Column::integer("Cholesterol", vec![200, 200, 200, 200, 200]),
            Column::categorical("Ward", ["a", "b", "a", "b", "a"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_anti_correlated_columns() {
        let table = Table::new([
            Column::float("up", vec![1.0, 2.0, 3.0]),
            Column::float("down", vec![3.0, 2.0, 1.0]),
        ])
        .unwrap();
        let correlation = correlation_matrix(&table, &["up", "down"]).unwrap();
        assert_eq!(correlation.matrix.get(0, 1), -1.0);
        assert_eq!(correlation.matrix.get(1, 0), -1.0);
        assert_eq!(correlation.matrix.get(0, 0), 1.0);
    }

    #[test]
    fn test_restricted_to_requested_columns() {
        let correlation = correlation_matrix(&patients(), &["Blood Pressure", "Age"]).unwrap();
        assert_eq!(correlation.columns, ["Blood Pressure", "Age"]);
        assert_eq!(correlation.matrix.size(), 2);
        let r = correlation.between("Age", "Blood Pressure").unwrap();
        assert!(r > 0.9 && r <= 1.0);
        assert_eq!(correlation.between("Age", "Patient ID"), None);
    }

    #[test]
    fn test_single_column_is_degenerate() {
        let correlation = correlation_matrix(&patients(), &["Age"]).unwrap();
        assert_eq!(correlation.matrix.size(), 1);
        assert_eq!(correlation.matrix.get(0, 0), 1.0);
    }

    #[test]
    fn test_constant_column_is_nan() {
        let correlation = correlation_matrix(&patients(), &["Age", "Cholesterol"]).unwrap();
        assert!(correlation.between("Age", "Cholesterol").unwrap().is_nan());
    }

    #[test]
    fn test_rejects_categorical_and_missing_columns() {
        assert!(matches!(
            correlation_matrix(&patients(), &["Age", "Ward"]),
            Err(AnalysisError::NonNumericColumn { .. })
        ));
        assert!(matches!(
            correlation_matrix(&patients(), &["Age", "Weight"]),
            Err(AnalysisError::ColumnNotFound { .. })
        ));
    }
}
