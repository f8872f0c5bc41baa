//! Brownian CLI - Path Simulation and Figures
//!
//! This is the operational entry point for the Brownian path simulator.
//!
//! # Commands
//!
//! - `brownian` / `brownian simulate` - Simulate ABM/GBM paths and render figures
//! - `brownian check` - Validate the resolved settings
//!
//! Without flags, config file or `BROWNIAN_*` variables the simulation runs
//! with 500 paths, 500 steps, T = 1, r = 0.05, σ = 0.4, S₀ = 100, seed 72.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires settings into
//! `brownian_core` (simulation) and `brownian_viz` (figures).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use crate::config::Settings;

/// Brownian path simulator CLI
#[derive(Parser)]
#[command(name = "brownian")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output directory for figures (overrides settings)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate ABM/GBM paths and render the figures (default)
    Simulate,

    /// Validate the resolved settings without simulating
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        settings.output.dir = dir;
    }

    match cli.command.unwrap_or(Commands::Simulate) {
        Commands::Simulate => commands::simulate::run(&settings),
        Commands::Check => commands::check::run(&settings),
    }
}
