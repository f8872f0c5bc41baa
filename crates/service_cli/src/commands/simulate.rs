//! Simulate command implementation
//!
//! Generates ABM/GBM paths, logs the terminal summary and renders both
//! figures.

use brownian_core::analysis::TerminalSummary;
use brownian_core::{generate_paths, PathRng};
use brownian_viz::{plot_distribution, plot_paths};
use tracing::info;

use crate::config::Settings;
use crate::Result;

/// Run the simulate command
pub fn run(settings: &Settings) -> Result<()> {
    let params = settings.simulation.to_parameters()?;

    info!("Starting simulation...");
    info!("  Paths: {}", params.n_paths());
    info!("  Steps: {}", params.n_steps());
    info!("  Horizon: {}", params.maturity());
    info!("  Rate: {}", params.rate());
    info!("  Volatility: {}", params.volatility());
    info!("  Spot: {}", params.spot());
    info!("  Seed: {}", settings.simulation.seed);

    let mut rng = PathRng::from_seed(settings.simulation.seed);
    let paths = generate_paths(&params, &mut rng)?;

    let summary = TerminalSummary::from_paths(&params, &paths);
    info!(
        "  E[X(T)] = {:.4} (theory {:.4}), Sd[X(T)] = {:.4} (theory {:.4})",
        summary.abm_mean, summary.abm_mean_theory, summary.abm_std, summary.abm_std_theory
    );
    info!(
        "  E[S(T)] = {:.4} (theory {:.4}, rel. error {:.2}%)",
        summary.gbm_mean,
        summary.gbm_mean_theory,
        100.0 * summary.gbm_mean_relative_error()
    );

    std::fs::create_dir_all(&settings.output.dir)?;
    let options = settings.output.plot_options();

    plot_paths(
        &settings.output.paths_figure(),
        paths.time.as_slice(),
        &paths.abm,
        &paths.gbm,
        &options,
    )?;
    plot_distribution(
        &settings.output.distribution_figure(),
        params.n_paths(),
        params.n_steps(),
        &paths.abm,
        &paths.gbm,
        &options,
    )?;

    info!("Simulation complete");
    Ok(())
}
