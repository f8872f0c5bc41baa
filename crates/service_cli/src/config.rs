//! Driver settings.
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional TOML file, then `BROWNIAN_`-prefixed environment variables
//! (`BROWNIAN_SIMULATION__N_PATHS=1000`). With no file and no variables the
//! driver runs the fixed reference parameters.

use std::path::{Path, PathBuf};

use brownian_core::{SimulationParameters, DEFAULT_SEED};
use brownian_viz::PlotOptions;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BROWNIAN";

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation inputs.
    pub simulation: SimulationSettings,
    /// Figure output.
    pub output: OutputSettings,
}

/// Simulation inputs, validated when converted to [`SimulationParameters`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub n_paths: usize,
    pub n_steps: usize,
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
    pub spot: f64,
    pub seed: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        let params = SimulationParameters::default();
        Self {
            n_paths: params.n_paths(),
            n_steps: params.n_steps(),
            maturity: params.maturity(),
            rate: params.rate(),
            volatility: params.volatility(),
            spot: params.spot(),
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationSettings {
    /// Converts to validated simulation parameters.
    pub fn to_parameters(&self) -> Result<SimulationParameters, brownian_core::ConfigError> {
        SimulationParameters::builder()
            .n_paths(self.n_paths)
            .n_steps(self.n_steps)
            .maturity(self.maturity)
            .rate(self.rate)
            .volatility(self.volatility)
            .spot(self.spot)
            .build()
    }
}

/// Where and how figures are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory receiving `paths.svg` and `distribution.svg`.
    pub dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bins: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        let options = PlotOptions::default();
        Self {
            dir: PathBuf::from("plots"),
            width: options.width,
            height: options.height,
            bins: options.bins,
        }
    }
}

impl OutputSettings {
    /// Returns the figure options.
    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions {
            width: self.width,
            height: self.height,
            bins: self.bins,
            ..PlotOptions::default()
        }
    }

    /// Path of the trajectory figure.
    pub fn paths_figure(&self) -> PathBuf {
        self.dir.join("paths.svg")
    }

    /// Path of the terminal-distribution figure.
    pub fn distribution_figure(&self) -> PathBuf {
        self.dir.join("distribution.svg")
    }
}

impl Settings {
    /// Loads settings from defaults, `path` (if any) and the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, environment())
    }

    /// Loads settings with an explicit environment source.
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder.add_source(env).build()?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn test_defaults_are_reference_run() {
        let settings = Settings::load_with_env(None, env_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());

        let params = settings.simulation.to_parameters().unwrap();
        assert_eq!(params, SimulationParameters::default());
        assert_eq!(settings.simulation.seed, 72);
        assert_eq!(settings.output.dir, PathBuf::from("plots"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brownian.toml");
        std::fs::write(
            &path,
            "[simulation]\nn_paths = 10\nvolatility = 0.0\n\n[output]\nbins = 5\n",
        )
        .unwrap();

        let settings = Settings::load_with_env(Some(&path), env_from(&[])).unwrap();
        assert_eq!(settings.simulation.n_paths, 10);
        assert_eq!(settings.simulation.volatility, 0.0);
        assert_eq!(settings.simulation.n_steps, 500);
        assert_eq!(settings.output.bins, 5);
        assert_eq!(settings.output.width, 1200);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brownian.toml");
        std::fs::write(&path, "[simulation]\nn_paths = 10\n").unwrap();

        let env = env_from(&[
            ("BROWNIAN_SIMULATION__N_PATHS", "25"),
            ("BROWNIAN_SIMULATION__SEED", "7"),
        ]);
        let settings = Settings::load_with_env(Some(&path), env).unwrap();
        assert_eq!(settings.simulation.n_paths, 25);
        assert_eq!(settings.simulation.seed, 7);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Settings::load_with_env(Some(&path), env_from(&[])).is_err());
    }

    #[test]
    fn test_invalid_values_rejected_on_conversion() {
        let settings = SimulationSettings {
            n_steps: 0,
            ..SimulationSettings::default()
        };
        assert!(matches!(
            settings.to_parameters(),
            Err(brownian_core::ConfigError::InvalidStepCount(0))
        ));
    }

    #[test]
    fn test_output_paths() {
        let output = OutputSettings {
            dir: PathBuf::from("out"),
            ..OutputSettings::default()
        };
        assert_eq!(output.paths_figure(), PathBuf::from("out/paths.svg"));
        assert_eq!(
            output.distribution_figure(),
            PathBuf::from("out/distribution.svg")
        );
        assert_eq!(output.plot_options(), PlotOptions::default());
    }
}
