//! Path generation for Arithmetic and Geometric Brownian Motion.
//!
//! The log-level X is advanced with the exact transition of an arithmetic
//! Brownian motion,
//! ```text
//! X(t+dt) = X(t) + (r - ½σ²) dt + σ √dt Z
//! ```
//! which is also the exact law of ln S for a geometric Brownian motion, so
//! S = exp(X) needs no separate simulation.
//!
//! Before each step the normal draws for that step are moment matched across
//! paths (mean 0, standard deviation 1) whenever more than one path is
//! simulated.

use crate::error::ConfigError;
use crate::grid::TimeGrid;
use crate::matrix::PathMatrix;
use crate::moments::standardise;
use crate::params::{SimulationParameters, DEFAULT_SEED};
use crate::rng::PathRng;

/// Output of a single simulation.
///
/// Owned by the caller; the generator keeps no reference to it.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedPaths {
    /// Time grid, `n_steps + 1` points.
    pub time: TimeGrid,
    /// Arithmetic Brownian motion X, `n_paths × (n_steps + 1)`.
    pub abm: PathMatrix,
    /// Geometric Brownian motion S = exp(X), same shape as `abm`.
    pub gbm: PathMatrix,
}

impl SimulatedPaths {
    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.abm.n_rows()
    }

    /// Returns the number of time steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.time.n_steps()
    }

    /// Terminal values of X, one per path.
    pub fn terminal_abm(&self) -> Vec<f64> {
        self.abm.terminal()
    }

    /// Terminal values of S, one per path.
    pub fn terminal_gbm(&self) -> Vec<f64> {
        self.gbm.terminal()
    }
}

/// Draws an `n_paths × n_steps` matrix of standard normals, moment matched
/// per step.
///
/// The raw draws fill the matrix row by row (path by path). When
/// `n_paths > 1`, every column is then replaced by its standardised copy so
/// that its sample mean is 0 and its population standard deviation is 1.
/// With a single path the draws are returned as drawn.
pub fn standardised_normals(n_paths: usize, n_steps: usize, rng: &mut PathRng) -> PathMatrix {
    let mut raw = vec![0.0; n_paths * n_steps];
    rng.fill_normal(&mut raw);

    let mut normals = PathMatrix::zeros(n_paths, n_steps);
    for step in 0..n_steps {
        let column: Vec<f64> = (0..n_paths).map(|path| raw[path * n_steps + step]).collect();
        let corrected = if n_paths > 1 {
            standardise(&column)
        } else {
            column
        };
        for (path, z) in corrected.into_iter().enumerate() {
            normals.set(path, step, z);
        }
    }
    normals
}

/// Generates ABM and GBM paths with the supplied random source.
///
/// # Errors
///
/// Returns `ConfigError` if the parameters fail
/// [`SimulationParameters::validate`]; nothing is allocated in that case.
///
/// # Examples
///
/// ```rust
/// use brownian_core::{generate_paths, PathRng, SimulationParameters};
///
/// let params = SimulationParameters::builder()
///     .n_paths(100)
///     .n_steps(50)
///     .build()
///     .unwrap();
/// let mut rng = PathRng::from_seed(72);
///
/// let paths = generate_paths(&params, &mut rng).unwrap();
/// assert_eq!(paths.abm.shape(), (100, 51));
/// assert_eq!(paths.time.len(), 51);
/// ```
pub fn generate_paths(
    params: &SimulationParameters,
    rng: &mut PathRng,
) -> Result<SimulatedPaths, ConfigError> {
    params.validate()?;

    let n_paths = params.n_paths();
    let n_steps = params.n_steps();

    let normals = standardised_normals(n_paths, n_steps, rng);

    // Precompute drift and diffusion terms (outside loop)
    let drift_dt = params.drift_dt();
    let vol_sqrt_dt = params.vol_sqrt_dt();
    let x0 = params.spot().ln();

    let mut abm = PathMatrix::zeros(n_paths, n_steps + 1);
    for path in 0..n_paths {
        abm.set(path, 0, x0);
    }

    for step in 0..n_steps {
        for path in 0..n_paths {
            let x = abm.get(path, step) + drift_dt + vol_sqrt_dt * normals.get(path, step);
            abm.set(path, step + 1, x);
        }
    }

    let gbm = abm.map(f64::exp);

    Ok(SimulatedPaths {
        time: TimeGrid::new(params),
        abm,
        gbm,
    })
}

/// Generates paths with a fresh source seeded from [`DEFAULT_SEED`].
///
/// Every call starts from the same seed, so identical parameters always
/// produce identical output regardless of earlier calls.
pub fn generate_paths_seeded(params: &SimulationParameters) -> Result<SimulatedPaths, ConfigError> {
    let mut rng = PathRng::from_seed(DEFAULT_SEED);
    generate_paths(params, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moments::{mean, population_std};
    use approx::assert_relative_eq;

    fn params(n_paths: usize, n_steps: usize, volatility: f64) -> SimulationParameters {
        SimulationParameters::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .maturity(1.0)
            .rate(0.05)
            .volatility(volatility)
            .spot(100.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_shapes() {
        let paths = generate_paths_seeded(&params(7, 5, 0.4)).unwrap();
        assert_eq!(paths.time.len(), 6);
        assert_eq!(paths.abm.shape(), (7, 6));
        assert_eq!(paths.gbm.shape(), (7, 6));
        assert_eq!(paths.n_paths(), 7);
        assert_eq!(paths.n_steps(), 5);
    }

    #[test]
    fn test_initial_condition() {
        let paths = generate_paths_seeded(&params(10, 5, 0.4)).unwrap();
        for path in 0..10 {
            assert_eq!(paths.abm.get(path, 0), 100.0_f64.ln());
            assert_relative_eq!(paths.gbm.get(path, 0), 100.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gbm_is_exp_of_abm() {
        let paths = generate_paths_seeded(&params(5, 10, 0.4)).unwrap();
        for (x, s) in paths.abm.as_slice().iter().zip(paths.gbm.as_slice()) {
            assert_eq!(*s, x.exp());
        }
    }

    #[test]
    fn test_seeded_calls_are_independent() {
        let p = params(20, 10, 0.4);
        let first = generate_paths_seeded(&p).unwrap();

        // Consuming another source in between must not matter
        let mut other = PathRng::from_seed(1);
        let _ = other.gen_normal();

        let second = generate_paths_seeded(&p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_explicit_source_matches_default_seed() {
        let p = params(4, 3, 0.2);
        let mut rng = PathRng::from_seed(DEFAULT_SEED);
        assert_eq!(
            generate_paths(&p, &mut rng).unwrap(),
            generate_paths_seeded(&p).unwrap()
        );
    }

    #[test]
    fn test_standardised_columns() {
        let mut rng = PathRng::from_seed(DEFAULT_SEED);
        let normals = standardised_normals(25, 8, &mut rng);
        assert_eq!(normals.shape(), (25, 8));
        for step in 0..8 {
            let column = normals.column(step);
            assert_relative_eq!(mean(&column), 0.0, epsilon = 1e-12);
            assert_relative_eq!(population_std(&column), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_single_path_skips_moment_matching() {
        let mut rng = PathRng::from_seed(9);
        let normals = standardised_normals(1, 6, &mut rng);

        let mut raw = vec![0.0; 6];
        PathRng::from_seed(9).fill_normal(&mut raw);
        assert_eq!(normals.row(0), raw.as_slice());
    }

    #[test]
    fn test_single_path_evolves() {
        let paths = generate_paths_seeded(&params(1, 4, 0.4)).unwrap();
        assert_eq!(paths.abm.shape(), (1, 5));
        assert!(paths.abm.row(0).iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_zero_volatility_deterministic() {
        let paths = generate_paths_seeded(&params(3, 4, 0.0)).unwrap();
        let x0 = 100.0_f64.ln();
        for path in 0..3 {
            for (step, &t) in paths.time.as_slice().iter().enumerate() {
                assert_relative_eq!(paths.abm.get(path, step), x0 + 0.05 * t, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_default_parameters_generate() {
        let paths = generate_paths_seeded(&SimulationParameters::default()).unwrap();
        assert_eq!(paths.abm.shape(), (500, 501));
        assert!(paths.gbm.as_slice().iter().all(|&s| s > 0.0));
    }

    #[test]
    fn test_terminal_accessors() {
        let paths = generate_paths_seeded(&params(6, 3, 0.4)).unwrap();
        let xt = paths.terminal_abm();
        let st = paths.terminal_gbm();
        assert_eq!(xt.len(), 6);
        for (row, (&x, &s)) in xt.iter().zip(st.iter()).enumerate() {
            assert_eq!(x, paths.abm.get(row, 3));
            assert_eq!(s, paths.gbm.get(row, 3));
        }
    }
}
