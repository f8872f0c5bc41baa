//! Uniform simulation time grid.

use crate::params::SimulationParameters;

/// Ordered grid of `n_steps + 1` times from 0 to the horizon.
///
/// Points are accumulated as `t[i+1] = t[i] + dt` with `dt = T / n_steps`
/// computed once, so `t[n_steps]` equals `T` up to rounding.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    points: Vec<f64>,
    dt: f64,
}

impl TimeGrid {
    /// Builds the grid for the given parameters.
    pub fn new(params: &SimulationParameters) -> Self {
        Self::uniform(params.maturity(), params.n_steps())
    }

    /// Builds a uniform grid with `n_steps` intervals over `[0, maturity]`.
    ///
    /// Callers are expected to pass validated inputs; `n_steps` is at least 1
    /// for every grid built from [`SimulationParameters`].
    pub fn uniform(maturity: f64, n_steps: usize) -> Self {
        let dt = maturity / n_steps as f64;
        let mut points = Vec::with_capacity(n_steps + 1);
        let mut t = 0.0;
        points.push(t);
        for _ in 0..n_steps {
            t += dt;
            points.push(t);
        }
        Self { points, dt }
    }

    /// Returns the step size.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of grid points (`n_steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the grid has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of intervals.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the final time.
    #[inline]
    pub fn terminal(&self) -> f64 {
        self.points.last().copied().unwrap_or(0.0)
    }

    /// Returns the grid points.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Consumes the grid, returning its points.
    pub fn into_vec(self) -> Vec<f64> {
        self.points
    }
}

impl AsRef<[f64]> for TimeGrid {
    fn as_ref(&self) -> &[f64] {
        &self.points
    }
}
