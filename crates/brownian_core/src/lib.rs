//! # Brownian Path Kernel
//!
//! Simulates Arithmetic Brownian Motion X(t) and Geometric Brownian Motion
//! S(t) = exp(X(t)) on a uniform time grid, with per-step moment matching of
//! the normal draws and an explicitly threaded, seeded random source.
//!
//! ## Architecture
//!
//! ```text
//! generate_paths()
//! ├── SimulationParameters  (validated inputs)
//! ├── PathRng               (seeded normal source)
//! ├── standardised_normals  (moment-matched Z, n_paths × n_steps)
//! └── SimulatedPaths        (time grid, X, S = exp(X))
//!
//! analysis
//! ├── NormalFit / LogNormalFit  (terminal-distribution fits)
//! ├── Histogram                 (density bins)
//! └── TerminalSummary           (empirical vs theoretical moments)
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use brownian_core::{generate_paths_seeded, SimulationParameters};
//!
//! let params = SimulationParameters::builder()
//!     .n_paths(2)
//!     .n_steps(2)
//!     .maturity(1.0)
//!     .rate(0.05)
//!     .volatility(0.0)
//!     .spot(100.0)
//!     .build()
//!     .unwrap();
//!
//! let paths = generate_paths_seeded(&params).unwrap();
//! assert_eq!(paths.time.as_slice(), &[0.0, 0.5, 1.0]);
//! assert!((paths.gbm.get(0, 2) - 105.127).abs() < 1e-3);
//! ```
//!
//! ## Known Constraints
//!
//! - No overflow handling: large `volatility` or `maturity` can drive
//!   `exp(X)` to infinity.
//! - Sequences are reproducible for a given seed within this crate only.

pub mod analysis;
pub mod error;
pub mod grid;
pub mod matrix;
pub mod moments;
pub mod params;
pub mod paths;
pub mod rng;

pub use error::{AnalysisError, ConfigError};
pub use grid::TimeGrid;
pub use matrix::PathMatrix;
pub use params::{
    SimulationParameters, SimulationParametersBuilder, DEFAULT_SEED, MAX_PATHS, MAX_STEPS,
};
pub use paths::{generate_paths, generate_paths_seeded, standardised_normals, SimulatedPaths};
pub use rng::PathRng;
