//! Density histograms and evaluation grids.

use crate::error::AnalysisError;

/// Equal-width histogram normalised to unit area.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// Bin edges, `bins + 1` values.
    pub edges: Vec<f64>,
    /// Density per bin; `Σ density[i] × width = 1`.
    pub density: Vec<f64>,
}

impl Histogram {
    /// Bins `samples` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// The last bin is closed on the right so the maximum is counted. When
    /// every sample is equal the range is widened to `[v - ½, v + ½]`.
    ///
    /// # Errors
    ///
    /// - `InvalidBins` if `bins == 0`
    /// - `EmptySample` if `samples` is empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use brownian_core::analysis::Histogram;
    ///
    /// let hist = Histogram::from_samples(&[0.0, 0.5, 1.0, 1.0], 2).unwrap();
    /// assert_eq!(hist.edges, vec![0.0, 0.5, 1.0]);
    /// assert_eq!(hist.density, vec![0.5, 1.5]);
    /// ```
    pub fn from_samples(samples: &[f64], bins: usize) -> Result<Self, AnalysisError> {
        if bins == 0 {
            return Err(AnalysisError::InvalidBins);
        }
        let first = *samples.first().ok_or(AnalysisError::EmptySample)?;
        let (mut lo, mut hi) = samples
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in samples {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let norm = samples.len() as f64 * width;
        let edges = (0..=bins).map(|i| lo + i as f64 * width).collect();
        let density = counts.into_iter().map(|c| c as f64 / norm).collect();

        Ok(Self { edges, density })
    }

    /// Returns the number of bins.
    #[inline]
    pub fn bins(&self) -> usize {
        self.density.len()
    }

    /// Returns the bin width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Returns the covered range `(first edge, last edge)`.
    #[inline]
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Returns the largest bin density.
    pub fn max_density(&self) -> f64 {
        self.density.iter().copied().fold(0.0, f64::max)
    }

    /// Iterates over `(left edge, right edge, density)` triples.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.density)
            .map(|(e, &d)| (e[0], e[1], d))
    }
}

/// Returns `n` evenly spaced points from `start` to `end` inclusive.
///
/// `n == 1` yields `[start]`; `n == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}
