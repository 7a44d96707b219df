use std::fmt;

use crate::generator::columns;

/// Subject area of one synthetic dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Computing,
    Medical,
    SocialSciences,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl Domain {
    /// All domains in the order the pipeline processes them.
    pub const ALL: [Self; 3] = [Self::Computing, Self::Medical, Self::SocialSciences];

    /// Title used in printed headers and figure titles.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Computing => "Computing",
            Self::Medical => "Medical",
            Self::SocialSciences => "Social Sciences",
        }
    }

    /// Number of rows generated for this domain's table.
    #[must_use]
    pub fn row_count(self) -> usize {
        match self {
            Self::Computing => 5,
            Self::Medical | Self::SocialSciences => 10,
        }
    }

    /// Columns summarized and plotted for this domain.
    ///
    /// Identifier and categorical columns are not part of the list.
    #[must_use]
    pub fn numeric_columns(self) -> &'static [&'static str] {
        match self {
            Self::Computing => &[columns::EXECUTION_TIME, columns::MEMORY_USAGE],
            Self::Medical => &[columns::AGE, columns::BLOOD_PRESSURE, columns::CHOLESTEROL],
            Self::SocialSciences => &[columns::HAPPINESS_SCORE, columns::INCOME],
        }
    }
}
