//! Terminal-distribution analysis.
//!
//! Fits the theoretical families to the terminal column of the simulated
//! paths (Normal for X, Log-Normal for S), bins samples into density
//! histograms and compares empirical terminal moments with their closed
//! forms.

mod fit;
mod histogram;
mod summary;

pub use fit::{LogNormalFit, NormalFit};
pub use histogram::{linspace, Histogram};
pub use summary::TerminalSummary;
