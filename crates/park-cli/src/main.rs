//! # parkctl entry point
//!
//! Parses command-line arguments, resolves the configuration, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use park_cli::enter::{run_enter, EnterArgs};
use park_cli::exit::{run_exit, ExitArgs};
use park_cli::query::{run_query, QueryArgs};
use park_cli::status::{run_status, StatusArgs};
use park_core::ParkConfig;

/// Parkstack CLI — car park occupancy toolchain.
///
/// Tracks spaces and tickets for a fixed-capacity car park over a flat
/// record file. State lives entirely in the record file; each invocation
/// reconstructs it, runs one operation, and writes it back.
#[derive(Parser, Debug)]
#[command(name = "parkctl", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the record data file.
    #[arg(long, global = true, default_value = park_cli::DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured capacity.
    #[arg(long, global = true)]
    capacity: Option<u32>,

    /// Override the configured hourly rate.
    #[arg(long, global = true)]
    hourly_rate: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Admit a vehicle and issue a ticket.
    Enter(EnterArgs),

    /// Settle a ticket and free its space.
    Exit(ExitArgs),

    /// Look up a parking record by ticket number.
    Query(QueryArgs),

    /// Report free spaces and open tickets.
    Status(StatusArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    tracing::debug!(
        capacity = config.capacity,
        hourly_rate = config.hourly_rate,
        data_file = %cli.data_file.display(),
        "configuration resolved"
    );

    let result = match &cli.command {
        Commands::Enter(args) => run_enter(args, &cli.data_file, &config),
        Commands::Exit(args) => run_exit(args, &cli.data_file, &config),
        Commands::Query(args) => run_query(args, &cli.data_file, &config),
        Commands::Status(args) => run_status(args, &cli.data_file, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Resolve the effective configuration: defaults, then the config file,
/// then command-line overrides, validated once at the end.
fn resolve_config(cli: &Cli) -> anyhow::Result<ParkConfig> {
    let mut config = match &cli.config {
        Some(path) => ParkConfig::load(path)?,
        None => ParkConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    if let Some(hourly_rate) = cli.hourly_rate {
        config.hourly_rate = hourly_rate;
    }
    config.validate()?;
    Ok(config)
}
