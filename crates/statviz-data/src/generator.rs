//! Synthetic dataset generation.
//!
//! [`Datasets::generate`] builds the three domain tables from a
//! [`DatasetSeed`]. Every table is drawn from the same `Pcg32` stream, in the
//! order Computing, Medical, Social Sciences, so a seed fully determines all
//! three tables.
//!
//! # Distributions
//!
//! | Table     | Column                | Distribution                          |
//! |-----------|-----------------------|---------------------------------------|
//! | Computing | `Algorithm`           | labels `A`..`E`                       |
//! | Computing | `Execution Time (ms)` | normal, mean 200, std dev 50          |
//! | Computing | `Memory Usage (MB)`   | normal, mean 120, std dev 15          |
//! | Medical   | `Patient ID`          | `1..=10`                              |
//! | Medical   | `Age`                 | uniform integer in `[20, 80)`         |
//! | Medical   | `Blood Pressure`      | uniform integer in `[110, 180)`       |
//! | Medical   | `Cholesterol`         | uniform integer in `[150, 250)`       |
//! | Social    | `Respondent ID`       | `1..=10`                              |
//! | Social    | `Happiness Score`     | uniform float in `[1, 10)`            |
//! | Social    | `Income (k)`          | uniform integer in `[20, 100)`        |
//! | Social    | `Education Level`     | uniform choice of [`EDUCATION_LEVELS`] |

use std::ops::Range;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_distr::{Normal, NormalError};
use rand_pcg::Pcg32;

use crate::{
    domain::Domain,
    table::{Column, Table, TableError},
};

/// Column names of the generated tables.
pub mod columns {
    pub const ALGORITHM: &str = "Algorithm";
    pub const EXECUTION_TIME: &str = "Execution Time (ms)";
    pub const MEMORY_USAGE: &str = "Memory Usage (MB)";

    pub const PATIENT_ID: &str = "Patient ID";
    pub const AGE: &str = "Age";
    pub const BLOOD_PRESSURE: &str = "Blood Pressure";
    pub const CHOLESTEROL: &str = "Cholesterol";

    pub const RESPONDENT_ID: &str = "Respondent ID";
    pub const HAPPINESS_SCORE: &str = "Happiness Score";
    pub const INCOME: &str = "Income (k)";
    pub const EDUCATION_LEVEL: &str = "Education Level";
}

/// Labels of the `Algorithm` column, one per row.
pub const ALGORITHM_LABELS: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Categories the `Education Level` column is drawn from.
pub const EDUCATION_LEVELS: [&str; 4] = ["High School", "Bachelor", "Master", "PhD"];

pub const AGE_RANGE: Range<i64> = 20..80;
pub const BLOOD_PRESSURE_RANGE: Range<i64> = 110..180;
pub const CHOLESTEROL_RANGE: Range<i64> = 150..250;
pub const HAPPINESS_RANGE: Range<f64> = 1.0..10.0;
pub const INCOME_RANGE: Range<i64> = 20..100;

/// Seed for deterministic dataset generation.
///
/// Using the same seed produces the same three tables. The default run draws
/// a fresh seed from the thread-local generator, so tables differ between
/// runs unless a seed is given explicitly.
///
/// # Example
///
/// ```
/// use rand::Rng as _;
/// use statviz_data::generator::{DatasetSeed, Datasets};
///
/// let seed: DatasetSeed = rand::rng().random();
/// let first = Datasets::generate(seed).unwrap();
/// let second = Datasets::generate(seed).unwrap();
/// assert_eq!(first, second);
///
/// let parsed: DatasetSeed = "42".parse().unwrap();
/// assert_eq!(parsed, DatasetSeed::from(42));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct DatasetSeed(u64);

/// Allows generating random `DatasetSeed` values using the standard random distribution.
impl Distribution<DatasetSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DatasetSeed {
        DatasetSeed(rng.random())
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    #[display("invalid distribution for column '{column}'")]
    Distribution {
        column: &'static str,
        source: NormalError,
    },
    #[display("failed to assemble {domain} table")]
    Table { domain: Domain, source: TableError },
}

/// The three generated tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub computing: Table,
    pub medical: Table,
    pub social: Table,
}

impl Datasets {
    /// Generates all tables from `seed`.
    pub fn generate(seed: DatasetSeed) -> Result<Self, GenerateError> {
        let mut rng = Pcg32::seed_from_u64(seed.0);
        Self::generate_with(&mut rng)
    }

    /// Like [`Self::generate`], but draws from an arbitrary random source.
    pub fn generate_with<R>(rng: &mut R) -> Result<Self, GenerateError>
    where
        R: Rng + ?Sized,
    {
        Ok(Self {
            computing: computing_table(rng)?,
            medical: medical_table(rng)?,
            social: social_table(rng)?,
        })
    }

    /// Returns the table of `domain`.
    #[must_use]
    pub fn get(&self, domain: Domain) -> &Table {
        match domain {
            Domain::Computing => &self.computing,
            Domain::Medical => &self.medical,
            Domain::SocialSciences => &self.social,
        }
    }
}

fn computing_table<R>(rng: &mut R) -> Result<Table, GenerateError>
where
    R: Rng + ?Sized,
{
    let rows = Domain::Computing.row_count();
    assemble(
        Domain::Computing,
        [
            Column::categorical(columns::ALGORITHM, ALGORITHM_LABELS),
            Column::float(
                columns::EXECUTION_TIME,
                normal_values(rng, columns::EXECUTION_TIME, 200.0, 50.0, rows)?,
            ),
            Column::float(
                columns::MEMORY_USAGE,
                normal_values(rng, columns::MEMORY_USAGE, 120.0, 15.0, rows)?,
            ),
        ],
    )
}

fn medical_table<R>(rng: &mut R) -> Result<Table, GenerateError>
where
    R: Rng + ?Sized,
{
    let rows = Domain::Medical.row_count();
    assemble(
        Domain::Medical,
        [
            Column::integer(columns::PATIENT_ID, identifiers(rows)),
            Column::integer(columns::AGE, uniform_values(rng, AGE_RANGE, rows)),
            Column::integer(
                columns::BLOOD_PRESSURE,
                uniform_values(rng, BLOOD_PRESSURE_RANGE, rows),
            ),
            Column::integer(
                columns::CHOLESTEROL,
                uniform_values(rng, CHOLESTEROL_RANGE, rows),
            ),
        ],
    )
}

fn social_table<R>(rng: &mut R) -> Result<Table, GenerateError>
where
    R: Rng + ?Sized,
{
    let rows = Domain::SocialSciences.row_count();
    assemble(
        Domain::SocialSciences,
        [
            Column::integer(columns::RESPONDENT_ID, identifiers(rows)),
            Column::float(
                columns::HAPPINESS_SCORE,
                uniform_values(rng, HAPPINESS_RANGE, rows),
            ),
            Column::integer(columns::INCOME, uniform_values(rng, INCOME_RANGE, rows)),
            Column::categorical(
                columns::EDUCATION_LEVEL,
                (0..rows).map(|_| EDUCATION_LEVELS[rng.random_range(0..EDUCATION_LEVELS.len())]),
            ),
        ],
    )
}

fn assemble<const N: usize>(domain: Domain, table_columns: [Column; N]) -> Result<Table, GenerateError> {
    Table::new(table_columns).map_err(|source| GenerateError::Table { domain, source })
}

/// Sequential identifiers `1..=rows`.
fn identifiers(rows: usize) -> Vec<i64> {
    (1..).take(rows).collect()
}

fn normal_values<R>(
    rng: &mut R,
    column: &'static str,
    mean: f64,
    std_dev: f64,
    rows: usize,
) -> Result<Vec<f64>, GenerateError>
where
    R: Rng + ?Sized,
{
    let normal = Normal::new(mean, std_dev)
        .map_err(|source| GenerateError::Distribution { column, source })?;
    Ok((0..rows).map(|_| rng.sample(normal)).collect())
}

fn uniform_values<R, T>(rng: &mut R, range: Range<T>, rows: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    T: rand::distr::uniform::SampleUniform + PartialOrd + Clone,
{
    (0..rows).map(|_| rng.random_range(range.clone())).collect()
}
