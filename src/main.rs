//! Pagescope main entry point
//!
//! This is the command-line interface for the Pagescope page inspector.

use anyhow::Context;
use clap::Parser;
use pagescope::config::{load_config, Config};
use pagescope::report::{analyze_page, fetch_failure_message, render_json, render_text};
use pagescope::{AnalyzerError, PageAnalyzer};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Pagescope: inspect the structure and links of a web page
///
/// Fetches one page and reports its HTML version, title, heading counts,
/// login-form presence, and internal/external/broken link counts.
#[derive(Parser, Debug)]
#[command(name = "pagescope")]
#[command(version)]
#[command(about = "Inspect the structure and links of a web page", long_about = None)]
struct Cli {
    /// URL of the page to analyze
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagescope=info,warn"),
            1 => EnvFilter::new("pagescope=debug,info"),
            2 => EnvFilter::new("pagescope=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };

    let analyzer = PageAnalyzer::from_config(&config).context("failed to build HTTP client")?;

    let result = match analyze_page(&analyzer, &cli.url).await {
        Ok(result) => result,
        Err(AnalyzerError::FetchFailed { reason, .. }) => {
            eprintln!("{}", fetch_failure_message(&reason));
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };

    if cli.json {
        println!("{}", render_json(&result)?);
    } else {
        print!("{}", render_text(&result));
    }

    Ok(ExitCode::SUCCESS)
}
