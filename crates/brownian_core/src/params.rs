//! Simulation parameters.
//!
//! This module provides the immutable parameter record for path generation
//! and a builder that validates it at build time.

use crate::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 1_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 100_000;

/// Seed used by [`generate_paths_seeded`](crate::paths::generate_paths_seeded).
///
/// Changing it changes every simulated path, so it is kept as a named
/// configuration default.
pub const DEFAULT_SEED: u64 = 72;

/// Parameters for Arithmetic/Geometric Brownian Motion path generation.
///
/// # Model
///
/// The log-level X follows an arithmetic Brownian motion
/// ```text
/// dX = (r - ½σ²) dt + σ dW,   X(0) = ln S₀
/// ```
/// and S = exp(X) is the corresponding geometric Brownian motion.
///
/// # Examples
///
/// ```rust
/// use brownian_core::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .n_paths(500)
///     .n_steps(500)
///     .maturity(1.0)
///     .rate(0.05)
///     .volatility(0.4)
///     .spot(100.0)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.n_paths(), 500);
/// assert_eq!(params.dt(), 1.0 / 500.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Number of simulated paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Horizon (T) in years.
    maturity: f64,
    /// Drift rate (r).
    rate: f64,
    /// Volatility (σ).
    volatility: f64,
    /// Initial level (S₀).
    spot: f64,
}

impl SimulationParameters {
    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the horizon T.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the drift rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the initial level S₀.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the time step `T / n_steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.maturity / self.n_steps as f64
    }

    /// Returns the per-step drift of X: `(r - ½σ²) dt`.
    #[inline]
    pub fn drift_dt(&self) -> f64 {
        (self.rate - 0.5 * self.volatility * self.volatility) * self.dt()
    }

    /// Returns the per-step diffusion scale of X: `σ √dt`.
    #[inline]
    pub fn vol_sqrt_dt(&self) -> f64 {
        self.volatility * self.dt().sqrt()
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `n_steps` is 0 or greater than [`MAX_STEPS`]
    /// - `spot` is not strictly positive and finite
    /// - `maturity` is not strictly positive and finite
    /// - `volatility` is negative or not finite
    /// - `rate` is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(invalid("spot", "must be positive and finite", self.spot));
        }
        if !(self.maturity > 0.0 && self.maturity.is_finite()) {
            return Err(invalid(
                "maturity",
                "must be positive and finite",
                self.maturity,
            ));
        }
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(invalid(
                "volatility",
                "must be non-negative and finite",
                self.volatility,
            ));
        }
        if !self.rate.is_finite() {
            return Err(invalid("rate", "must be finite", self.rate));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, rule: &str, got: f64) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        value: format!("{}, got {}", rule, got),
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            n_paths: 500,
            n_steps: 500,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.4,
            spot: 100.0,
        }
    }
}

/// Builder for [`SimulationParameters`].
///
/// Path and step counts must be set explicitly; the real-valued
/// parameters fall back to the [`Default`] values when omitted.
///
/// # Examples
///
/// ```rust
/// use brownian_core::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .n_paths(2)
///     .n_steps(2)
///     .volatility(0.0)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.spot(), 100.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationParametersBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    maturity: Option<f64>,
    rate: Option<f64>,
    volatility: Option<f64>,
    spot: Option<f64>,
}

impl SimulationParametersBuilder {
    /// Sets the number of simulated paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the horizon T.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the drift rate r.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the volatility σ.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the initial level S₀.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` or `n_steps` is not set, or if
    /// [`SimulationParameters::validate`] fails.
    pub fn build(self) -> Result<SimulationParameters, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let defaults = SimulationParameters::default();
        let params = SimulationParameters {
            n_paths,
            n_steps,
            maturity: self.maturity.unwrap_or(defaults.maturity),
            rate: self.rate.unwrap_or(defaults.rate),
            volatility: self.volatility.unwrap_or(defaults.volatility),
            spot: self.spot.unwrap_or(defaults.spot),
        };

        params.validate()?;
        Ok(params)
    }
}
