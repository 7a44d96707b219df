//! Tabular data model and synthetic datasets.
//!
//! - [`table`]: named-column tables with integer, float and categorical columns
//! - [`domain`]: the three subject areas and their numeric columns
//! - [`generator`]: seedable generation of one table per domain
//!
//! # Example
//!
//! ```
//! use statviz_data::{Datasets, DatasetSeed, Domain};
//!
//! let datasets = Datasets::generate(DatasetSeed::from(2024)).unwrap();
//! for domain in Domain::ALL {
//!     let table = datasets.get(domain);
//!     assert_eq!(table.row_count(), domain.row_count());
//!     for name in domain.numeric_columns() {
//!         assert!(table.column(name).is_some());
//!     }
//! }
//! ```

pub use self::{
    domain::Domain,
    generator::{DatasetSeed, Datasets, GenerateError},
    table::{Column, ColumnData, ColumnKind, Table, TableError},
};

pub mod domain;
pub mod generator;
pub mod table;
