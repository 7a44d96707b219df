//! Statistics tables printed to standard output.

use statviz_analysis::{Statistic, StatisticsSummary};
use statviz_data::Domain;

const COLUMN_GAP: &str = "  ";

/// Returns the banner printed before each domain's output.
pub(crate) fn header(domain: Domain) -> String {
    format!("---------- {} Domain ----------", domain.title())
}

/// Formats `summary` with one column per analyzed column and one row per statistic.
///
/// Row labels are left-aligned; values are right-aligned with six decimals.
pub(crate) fn text_table(summary: &StatisticsSummary) -> String {
    let label_width = Statistic::ALL
        .iter()
        .map(|s| s.to_string().len())
        .max()
        .unwrap_or(0);

    let columns = summary
        .iter()
        .map(|(name, column)| {
            let cells = Statistic::ALL.map(|s| format!("{:.6}", column.get(s)));
            let width = cells
                .iter()
                .map(String::len)
                .chain([name.chars().count()])
                .max()
                .unwrap_or(0);
            (name, cells, width)
        })
        .collect::<Vec<_>>();

    let mut out = format!("{:label_width$}", "");
    for (name, _, width) in &columns {
        out.push_str(&format!("{COLUMN_GAP}{name:>width$}"));
    }
    out.push('\n');

    for (row, statistic) in Statistic::ALL.iter().enumerate() {
        out.push_str(&format!("{:<label_width$}", statistic.to_string()));
        for (_, cells, width) in &columns {
            out.push_str(&format!("{COLUMN_GAP}{:>width$}", cells[row]));
        }
        out.push('\n');
    }
    out
}

/// Formats `summary` as pretty-printed JSON keyed by column, then statistic.
pub(crate) fn json(summary: &StatisticsSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
