#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the food map enrichment pipeline.
//!
//! Runs a pipeline pass and prints the result as JSON on stdout. Logs go
//! to stderr through `pretty_env_logger` (`RUST_LOG=info` to see which
//! data source was used).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use food_map_enrichment::{dataset_statistics, search_regions};
use food_map_pipeline::{Pipeline, PipelineConfig, RecordSelection};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "food_map", about = "Regional food expenditure enrichment")]
struct Cli {
    /// TOML config file. Without it, `FOOD_MAP_*` environment variables
    /// are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Clustering API root (overrides config)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Use the embedded dataset only
    #[arg(long, global = true)]
    mock: bool,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct SelectionArgs {
    /// Numeric cluster id
    #[arg(long)]
    cluster: Option<i32>,
    /// Observation year
    #[arg(long)]
    year: Option<i32>,
}

impl SelectionArgs {
    const fn selection(&self) -> RecordSelection {
        RecordSelection {
            cluster: self.cluster,
            year: self.year,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich all regions in a scope and print the analysis
    Analyze {
        /// Scope token: `All`, `Jawa`, `Sumatera`, or a grouping fragment
        #[arg(long)]
        region: Option<String>,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// List available groupings
    Regions,
    /// Print dataset statistics for a scope
    Statistics {
        /// Scope token: `All`, `Jawa`, `Sumatera`, or a grouping fragment
        #[arg(long)]
        region: Option<String>,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Search enriched regions by place name
    Search {
        /// Case-insensitive place-name fragment
        query: String,
    },
}

impl Cli {
    fn pipeline_config(&self) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::from_env()?,
        };
        if let Some(url) = &self.api_url {
            config.api_base_url.clone_from(url);
        }
        if self.mock {
            config.use_mock_data = true;
        }
        Ok(config)
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = cli.pipeline_config()?;
    log::debug!("Pipeline config: {config:?}");
    let pipeline = Pipeline::new(&config)?;

    match &cli.command {
        Commands::Analyze { region, selection } => {
            let result = pipeline
                .analyze_selected(region.as_deref(), selection.selection())
                .await;
            print_json(&result, cli.pretty)?;
        }
        Commands::Regions => {
            print_json(&pipeline.available_groupings().await, cli.pretty)?;
        }
        Commands::Statistics { region, selection } => {
            let result = pipeline
                .analyze_selected(region.as_deref(), selection.selection())
                .await;
            print_json(&dataset_statistics(&result.regions), cli.pretty)?;
        }
        Commands::Search { query } => {
            let result = pipeline.analyze(None).await;
            let hits = search_regions(&result.regions, query);
            log::info!("{} regions match {query:?}", hits.len());
            print_json(&hits, cli.pretty)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_accepts_cluster_and_year() {
        let cli = Cli::try_parse_from([
            "food_map", "--mock", "analyze", "--region", "Papua", "--cluster", "2", "--year",
            "2024",
        ])
        .unwrap();

        assert!(cli.mock);
        let Commands::Analyze { region, selection } = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(region.as_deref(), Some("Papua"));
        assert_eq!(
            selection.selection(),
            RecordSelection {
                cluster: Some(2),
                year: Some(2024),
            }
        );
    }

    #[test]
    fn statistics_selection_defaults_to_unrestricted() {
        let cli = Cli::try_parse_from(["food_map", "statistics"]).unwrap();
        let Commands::Statistics { selection, .. } = cli.command else {
            panic!("expected statistics");
        };
        assert_eq!(selection.selection(), RecordSelection::default());
    }

    #[test]
    fn cluster_must_be_numeric() {
        assert!(Cli::try_parse_from(["food_map", "analyze", "--cluster", "high"]).is_err());
    }
}
