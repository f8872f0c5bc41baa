//! CLI error type.

use brownian_viz::PlotError;
use thiserror::Error;

/// Errors surfaced by the `brownian` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded or deserialised.
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    /// Resolved settings are not valid simulation parameters.
    #[error("Invalid simulation parameters: {0}")]
    Simulation(#[from] brownian_core::ConfigError),

    /// A figure could not be rendered.
    #[error("Rendering failed: {0}")]
    Plot(#[from] PlotError),

    /// Output directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
