//! # Brownian Path Figures
//!
//! Renders the output of [`brownian_core::generate_paths`] as SVG figures:
//!
//! - [`plot_paths`]: ABM and GBM trajectories side by side, one line per path
//! - [`plot_distribution`]: terminal histograms of X and S, each overlaid
//!   with its fitted Normal / Log-Normal density on a secondary axis
//!
//! ```rust,no_run
//! use brownian_core::{generate_paths_seeded, SimulationParameters};
//! use brownian_viz::{plot_distribution, plot_paths, PlotOptions};
//! use std::path::Path;
//!
//! let params = SimulationParameters::default();
//! let paths = generate_paths_seeded(&params).unwrap();
//! let options = PlotOptions::default();
//!
//! plot_paths(Path::new("paths.svg"), paths.time.as_slice(), &paths.abm, &paths.gbm, &options)
//!     .unwrap();
//! plot_distribution(
//!     Path::new("distribution.svg"),
//!     params.n_paths(),
//!     params.n_steps(),
//!     &paths.abm,
//!     &paths.gbm,
//!     &options,
//! )
//! .unwrap();
//! ```

mod distribution;
pub mod error;
mod trajectories;

pub use distribution::plot_distribution;
pub use error::PlotError;
pub use trajectories::plot_paths;

/// Figure layout options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotOptions {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Histogram bin count for terminal distributions.
    pub bins: usize,
    /// Number of points on each fitted density curve.
    pub density_points: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            bins: 25,
            density_points: 100,
        }
    }
}

/// Widens a `(lo, hi)` range by 5% on each side, or by ±0.5 when flat.
pub(crate) fn padded_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span > f64::EPSILON * hi.abs().max(1.0) {
        (lo - 0.05 * span, hi + 0.05 * span)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}
