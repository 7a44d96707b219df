use statviz_data::{ColumnKind, Table};

/// Errors raised when a requested column cannot be analyzed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("column '{name}' not found")]
    ColumnNotFound { name: String },
    #[display("column '{name}' is {kind}, expected a numeric column")]
    NonNumericColumn { name: String, kind: ColumnKind },
    #[display("column '{name}' is empty")]
    EmptyColumn { name: String },
    #[display("column '{name}' contains a NaN or infinite value")]
    NonFiniteValue { name: String },
}

/// Returns the values of a numeric, non-empty column as `f64`.
///
/// Columns holding NaN or infinite values are rejected.
///
/// # Examples
///
/// ```
/// use statviz_analysis::{AnalysisError, numeric_values};
/// use statviz_data::{Column, Table};
///
/// let table = Table::new([
///     Column::integer("Age", vec![34, 58]),
///     Column::categorical("Education Level", ["PhD", "Master"]),
/// ])
/// .unwrap();
///
/// assert_eq!(numeric_values(&table, "Age").unwrap(), vec![34.0, 58.0]);
/// assert!(matches!(
///     numeric_values(&table, "Education Level"),
///     Err(AnalysisError::NonNumericColumn { .. })
/// ));
/// ```
pub fn numeric_values(table: &Table, name: &str) -> Result<Vec<f64>, AnalysisError> {
    let column = table
        .column(name)
        .ok_or_else(|| AnalysisError::ColumnNotFound {
            name: name.to_owned(),
        })?;
    let values = column
        .data()
        .to_f64()
        .ok_or_else(|| AnalysisError::NonNumericColumn {
            name: name.to_owned(),
            kind: column.data().kind(),
        })?;
    if values.is_empty() {
        return Err(AnalysisError::EmptyColumn {
            name: name.to_owned(),
        });
    }
    if !values.iter().all(|v| v.is_finite()) {
        return Err(AnalysisError::NonFiniteValue {
            name: name.to_owned(),
        });
    }
    Ok(values)
}
