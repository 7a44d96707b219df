//! Figures shown for each domain: one histogram per column, then a heatmap.

use statviz_analysis::{AnalysisError, column_distribution, correlation_matrix};
use statviz_data::Table;
use statviz_viewer::Page;

use self::{heatmap::CorrelationFigure, histogram::HistogramFigure};

mod colormap;
mod heatmap;
mod histogram;

/// Builds the figures for `columns` of `table`, titled after `domain_title`.
///
/// All columns are validated before anything is displayed.
pub(crate) fn domain_figures(
    domain_title: &str,
    table: &Table,
    columns: &[&str],
) -> Result<Vec<Box<dyn Page>>, AnalysisError> {
    let mut pages = columns
        .iter()
        .map(|column| -> Result<Box<dyn Page>, AnalysisError> {
            let distribution = column_distribution(table, column)?;
            Ok(Box::new(HistogramFigure::new(domain_title, distribution)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let correlation = correlation_matrix(table, columns)?;
    pages.push(Box::new(CorrelationFigure::new(domain_title, correlation)));
    Ok(pages)
}

#[cfg(test)]
pub(crate) mod tests {
    use ratatui::buffer::Buffer;
    use statviz_data::{Column, DatasetSeed, Datasets, Domain};

    use super::*;

    pub(crate) fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_histograms_then_heatmap() {
        let datasets = Datasets::generate(DatasetSeed::from(3)).unwrap();
        let domain = Domain::Medical;
        let pages =
            domain_figures(domain.title(), datasets.get(domain), domain.numeric_columns()).unwrap();

        let titles = pages.iter().map(|page| page.title()).collect::<Vec<_>>();
        assert_eq!(
            titles,
            [
                "Medical: Histogram of Age",
                "Medical: Histogram of Blood Pressure",
                "Medical: Histogram of Cholesterol",
                "Medical: Correlation Matrix",
            ]
        );
    }

    #[test]
    fn test_rejects_categorical_column() {
        let table = Table::new([
            Column::float("Happiness Score", vec![2.0, 8.5]),
            Column::categorical("Education Level", ["PhD", "Master"]),
        ])
        .unwrap();
        let err = domain_figures("Social Sciences", &table, &["Happiness Score", "Education Level"])
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NonNumericColumn { .. }));
    }
}
