use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::analysis::{DashboardRequest, FilterOptions};
use crate::config::{DashboardConfig, DEFAULT_LOG_FILTER};
use crate::dashboard::build_dashboard;
use crate::data::{DatasetCache, ExperienceLevel};
use crate::server;

#[derive(Debug, Parser)]
#[command(name = "salary-insights", version, about = "AI/ML salary insights dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Serve the dashboard over HTTP.
    Serve {
        /// Salary CSV to load (overrides SALARY_INSIGHTS_DATA).
        #[arg(long)]
        data: Option<PathBuf>,
        /// Listen address (overrides SALARY_INSIGHTS_BIND).
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the dashboard for one filter selection as JSON.
    Summary {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        year: Option<i32>,
        /// Country name; repeat to select several. Defaults to all.
        #[arg(long = "country")]
        countries: Vec<String>,
        /// Experience level code (EN, MI, SE, EX); repeat to select several. Defaults to all.
        #[arg(long = "level", value_parser = parse_level)]
        levels: Vec<ExperienceLevel>,
        /// Leave rendered SVG out of the output.
        #[arg(long)]
        no_svg: bool,
    },
    /// Load the dataset and report what it contains.
    Validate {
        path: Option<PathBuf>,
    },
}

fn parse_level(raw: &str) -> Result<ExperienceLevel, String> {
    ExperienceLevel::from_code(raw)
        .ok_or_else(|| format!("unknown experience level '{raw}' (expected EN, MI, SE or EX)"))
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    init_logging();
    let config = DashboardConfig::from_env();

    match cli.command {
        Command::Serve { data, bind } => {
            handle_serve(config.with_data_path(data).with_bind_addr(bind))
        }
        Command::Summary {
            data,
            year,
            countries,
            levels,
            no_svg,
        } => {
            let request = DashboardRequest {
                year,
                countries: (!countries.is_empty()).then_some(countries),
                levels: (!levels.is_empty()).then_some(levels),
            };
            handle_summary(config.with_data_path(data), &request, !no_svg)
        }
        Command::Validate { path } => handle_validate(config.with_data_path(path)),
    }
}

/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn handle_serve(config: DashboardConfig) -> i32 {
    let cache = Arc::new(DatasetCache::with_iso_registry(config.data_path.clone()));
    match server::run_server(&config, cache) {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "server error");
            eprintln!("server error: {err:#}");
            1
        }
    }
}

fn handle_summary(config: DashboardConfig, request: &DashboardRequest, with_svg: bool) -> i32 {
    let cache = DatasetCache::with_iso_registry(config.data_path);
    let table = match cache.table() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("dataset error: {err}");
            return 1;
        }
    };

    let selection = FilterOptions::from_table(table).resolve(request);
    let view = build_dashboard(table, &selection, with_svg);
    match serde_json::to_string_pretty(&view) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize dashboard: {err}");
            1
        }
    }
}

fn handle_validate(config: DashboardConfig) -> i32 {
    let cache = DatasetCache::with_iso_registry(config.data_path);
    match cache.table() {
        Ok(table) => {
            let years = table.distinct_years();
            println!("validation passed: {}", cache.path().display());
            println!("records: {}", table.len());
            println!(
                "years: {}",
                years.iter().map(i32::to_string).collect::<Vec<_>>().join(", ")
            );
            println!("countries: {}", table.distinct_countries().len());
            if table.unresolved_codes().is_empty() {
                println!("unresolved country codes: none");
            } else {
                println!("unresolved country codes: {}", table.unresolved_codes().join(", "));
            }
            0
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn summary_collects_repeated_filters() {
        let cli = parse(&[
            "salary-insights",
            "summary",
            "--year",
            "2023",
            "--country",
            "United States",
            "--country",
            "Germany",
            "--level",
            "se",
            "--level",
            "EN",
            "--no-svg",
        ])
        .expect("summary args should parse");
        assert_eq!(
            cli.command,
            Command::Summary {
                data: None,
                year: Some(2023),
                countries: vec!["United States".to_string(), "Germany".to_string()],
                levels: vec![ExperienceLevel::Senior, ExperienceLevel::Entry],
                no_svg: true,
            }
        );
    }

    #[test]
    fn unknown_level_is_a_usage_error() {
        let err = parse(&["salary-insights", "summary", "--level", "XX"]).expect_err("XX is invalid");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn validate_takes_optional_path() {
        let cli = parse(&["salary-insights", "validate", "data.csv"]).expect("validate args");
        assert_eq!(
            cli.command,
            Command::Validate {
                path: Some(PathBuf::from("data.csv"))
            }
        );
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(parse(&["salary-insights"]).is_err());
    }
}
