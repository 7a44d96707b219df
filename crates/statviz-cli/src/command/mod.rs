use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use rand::Rng as _;
use statviz_analysis::summarize;
use statviz_data::{DatasetSeed, Datasets, Domain};

use crate::{figure, report};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Seed for the generated datasets [default: random]
    #[arg(long)]
    seed: Option<DatasetSeed>,
    /// How to print the statistics tables
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Do not show figures in the terminal
    #[arg(long)]
    no_display: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let CommandArgs {
        seed,
        format,
        no_display,
    } = args;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Generating datasets with seed {seed}");
    let datasets = Datasets::generate(seed).context("failed to generate datasets")?;

    for (i, domain) in Domain::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        analyze_domain(&datasets, domain, format, no_display)
            .with_context(|| format!("failed to analyze {domain} domain"))?;
    }

    Ok(())
}

fn analyze_domain(
    datasets: &Datasets,
    domain: Domain,
    format: OutputFormat,
    no_display: bool,
) -> anyhow::Result<()> {
    let table = datasets.get(domain);
    let columns = domain.numeric_columns();

    println!("{}", report::header(domain));

    log::debug!("Summarizing {} columns of {domain}", columns.len());
    let summary = summarize(table, columns).context("failed to compute statistics")?;
    match format {
        OutputFormat::Text => print!("{}", report::text_table(&summary)),
        OutputFormat::Json => println!("{}", report::json(&summary)?),
    }

    let pages = figure::domain_figures(domain.title(), table, columns)
        .context("failed to prepare figures")?;
    if no_display {
        log::debug!("Skipping display of {} {domain} figures", pages.len());
        return Ok(());
    }

    log::info!("Showing {} {domain} figures", pages.len());
    statviz_viewer::show(pages).context("failed to display figures")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CommandArgs::try_parse_from(["statviz"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.no_display);
    }

    #[test]
    fn test_all_flags() {
        let args = CommandArgs::try_parse_from([
            "statviz",
            "--seed",
            "42",
            "--format",
            "json",
            "--no-display",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(DatasetSeed::from(42)));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.no_display);
    }

    #[test]
    fn test_rejects_invalid_seed() {
        assert!(CommandArgs::try_parse_from(["statviz", "--seed", "-1"]).is_err());
        assert!(CommandArgs::try_parse_from(["statviz", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_headless_pipeline() {
        let datasets = Datasets::generate(DatasetSeed::from(7)).unwrap();
        for domain in Domain::ALL {
            analyze_domain(&datasets, domain, OutputFormat::Json, true).unwrap();
        }
    }
}
