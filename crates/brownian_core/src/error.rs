//! Error types for path generation and terminal-distribution analysis.
//!
//! This module defines structured error types for parameter validation
//! in the path generator and for fitting routines applied to its output.

use thiserror::Error;

use crate::params::{MAX_PATHS, MAX_STEPS};

/// Configuration error for the path generator.
///
/// These errors occur before any matrix is allocated, when invalid
/// simulation parameters are provided. They are never retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, MAX_PATHS].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Step count outside valid range [1, MAX_STEPS].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Errors raised while fitting or binning terminal samples.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// No samples were supplied.
    #[error("Cannot analyse an empty sample")]
    EmptySample,

    /// A log-normal fit received a value outside its support.
    #[error("Log-normal fit requires strictly positive samples, found {value}")]
    NonPositiveSample {
        /// The offending sample value.
        value: f64,
    },

    /// All samples are identical, so no dispersion can be fitted.
    #[error("Sample has zero dispersion (all values equal {value})")]
    DegenerateSample {
        /// The common sample value.
        value: f64,
    },

    /// Histogram bin count of zero.
    #[error("Histogram requires at least one bin")]
    InvalidBins,

    /// The underlying distribution rejected the fitted parameters.
    #[error("Distribution error: {0}")]
    Distribution(String),
}
