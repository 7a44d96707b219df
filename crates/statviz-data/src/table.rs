//! Named-column tables.
//!
//! A [`Table`] is an ordered list of [`Column`]s sharing one row count. Each
//! column holds values of a single kind: integers, floats or categorical
//! labels. Tables are built once and never mutated; columns are looked up by
//! name.

use std::collections::HashSet;

/// Kind of values held by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ColumnKind {
    #[display("integer")]
    Integer,
    #[display("float")]
    Float,
    #[display("categorical")]
    Categorical,
}

/// Values of a single column.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum ColumnData {
    Integer(Vec<i64>),
    Float(Vec<f64>),
    Categorical(Vec<String>),
}

impl ColumnData {
    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Integer(values) => values.len(),
            Self::Float(values) => values.len(),
            Self::Categorical(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Integer(_) => ColumnKind::Integer,
            Self::Float(_) => ColumnKind::Float,
            Self::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// Returns the values as `f64`, or `None` for a categorical column.
    ///
    /// # Examples
    ///
    /// ```
    /// use statviz_data::table::ColumnData;
    ///
    /// let ages = ColumnData::Integer(vec![31, 47]);
    /// assert_eq!(ages.to_f64(), Some(vec![31.0, 47.0]));
    ///
    /// let labels = ColumnData::Categorical(vec!["PhD".to_owned()]);
    /// assert_eq!(labels.to_f64(), None);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            Self::Integer(values) => Some(values.iter().map(|&v| v as f64).collect()),
            Self::Float(values) => Some(values.clone()),
            Self::Categorical(_) => None,
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    #[must_use]
    pub fn integer(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self::new(name, ColumnData::Integer(values))
    }

    #[must_use]
    pub fn float(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, ColumnData::Float(values))
    }

    #[must_use]
    pub fn categorical<S>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self::new(
            name,
            ColumnData::Categorical(values.into_iter().map(Into::into).collect()),
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn data(&self) -> &ColumnData {
        &self.data
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableError {
    #[display("column '{name}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[display("duplicate column '{name}'")]
    DuplicateColumn { name: String },
}

/// An ordered collection of equally long named columns.
///
/// # Examples
///
/// ```
/// use statviz_data::table::{Column, Table};
///
/// let table = Table::new([
///     Column::integer("Patient ID", vec![1, 2, 3]),
///     Column::float("Weight", vec![71.5, 64.0, 88.2]),
/// ])
/// .unwrap();
/// assert_eq!(table.row_count(), 3);
/// assert!(table.column("Weight").is_some());
/// assert!(table.column("Height").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Builds a table, checking that all columns have the same length and distinct names.
    ///
    /// The first column fixes the row count; a table without columns has zero rows.
    pub fn new<I>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Column>,
    {
        let columns = columns.into_iter().collect::<Vec<_>>();
        let row_count = columns.first().map_or(0, |column| column.data.len());

        let mut names = HashSet::new();
        for column in &columns {
            if !names.insert(column.name.as_str()) {
                return Err(TableError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
            if column.data.len() != row_count {
                return Err(TableError::LengthMismatch {
                    name: column.name.clone(),
                    expected: row_count,
                    actual: column.data.len(),
                });
            }
        }

        Ok(Self { columns, row_count })
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(Column::name)
    }
}
