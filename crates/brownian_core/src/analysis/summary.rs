//! Empirical versus theoretical terminal moments.

use crate::moments::{mean, population_std};
use crate::params::SimulationParameters;
use crate::paths::SimulatedPaths;

/// Terminal moments of X and S alongside their closed forms.
///
/// Under the simulated dynamics
/// ```text
/// X(T) ~ N(ln S₀ + (r - ½σ²)T, σ²T),    E[S(T)] = S₀ e^{rT}
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalSummary {
    /// Sample mean of X(T).
    pub abm_mean: f64,
    /// Sample standard deviation of X(T).
    pub abm_std: f64,
    /// Theoretical mean of X(T).
    pub abm_mean_theory: f64,
    /// Theoretical standard deviation of X(T).
    pub abm_std_theory: f64,
    /// Sample mean of S(T).
    pub gbm_mean: f64,
    /// Theoretical mean of S(T).
    pub gbm_mean_theory: f64,
}

impl TerminalSummary {
    /// Computes the summary for paths generated from `params`.
    pub fn from_paths(params: &SimulationParameters, paths: &SimulatedPaths) -> Self {
        let xt = paths.terminal_abm();
        let st = paths.terminal_gbm();
        let t = params.maturity();
        let sigma = params.volatility();

        Self {
            abm_mean: mean(&xt),
            abm_std: population_std(&xt),
            abm_mean_theory: params.spot().ln() + (params.rate() - 0.5 * sigma * sigma) * t,
            abm_std_theory: sigma * t.sqrt(),
            gbm_mean: mean(&st),
            gbm_mean_theory: params.spot() * (params.rate() * t).exp(),
        }
    }

    /// Relative error of the sample mean of S(T) against theory.
    #[inline]
    pub fn gbm_mean_relative_error(&self) -> f64 {
        (self.gbm_mean - self.gbm_mean_theory).abs() / self.gbm_mean_theory
    }
}
