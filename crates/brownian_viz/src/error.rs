//! Error types for figure rendering.

use brownian_core::AnalysisError;
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Input arrays disagree on their path/step dimensions.
    #[error("Dimension mismatch for {what}: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        /// Which input failed the check.
        what: &'static str,
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Actual `(rows, cols)`.
        found: (usize, usize),
    },

    /// Nothing to draw.
    #[error("Cannot plot an empty path matrix")]
    EmptyInput,

    /// The drawing backend failed.
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// Histogram or fit failure on the terminal samples.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing(err.to_string())
    }
}
