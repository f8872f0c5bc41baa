//! Sample moments and moment matching.
//!
//! Standard deviations here are population (maximum-likelihood) estimates,
//! dividing by `n` rather than `n - 1`.

/// Arithmetic mean. Returns `NaN` for an empty sample.
#[inline]
pub fn mean(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Population standard deviation around `mean`.
#[inline]
pub fn population_std_with_mean(sample: &[f64], mean: f64) -> f64 {
    let ss = sample.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>();
    (ss / sample.len() as f64).sqrt()
}

/// Population standard deviation. Returns `NaN` for an empty sample.
#[inline]
pub fn population_std(sample: &[f64]) -> f64 {
    population_std_with_mean(sample, mean(sample))
}

/// Returns a copy of `sample` rescaled to mean 0 and standard deviation 1.
///
/// Samples with fewer than two values are returned unchanged, since their
/// dispersion is undefined. A sample with zero dispersion is centred only.
///
/// # Examples
///
/// ```rust
/// use brownian_core::moments::{mean, population_std, standardise};
///
/// let z = standardise(&[1.0, 2.0, 3.0, 6.0]);
/// assert!(mean(&z).abs() < 1e-12);
/// assert!((population_std(&z) - 1.0).abs() < 1e-12);
/// ```
pub fn standardise(sample: &[f64]) -> Vec<f64> {
    if sample.len() < 2 {
        return sample.to_vec();
    }

    let m = mean(sample);
    let sd = population_std_with_mean(sample, m);
    if sd > 0.0 {
        sample.iter().map(|&v| (v - m) / sd).collect()
    } else {
        sample.iter().map(|&v| v - m).collect()
    }
}
