//! Maximum-likelihood fits of the terminal distributions.

use statrs::distribution::{Continuous, LogNormal, Normal};

use crate::error::AnalysisError;
use crate::moments::{mean, population_std_with_mean};

/// Normal distribution fitted by maximum likelihood.
///
/// `mu` is the sample mean and `sigma` the population standard deviation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalFit {
    /// Fitted mean.
    pub mu: f64,
    /// Fitted standard deviation.
    pub sigma: f64,
    dist: Normal,
}

impl NormalFit {
    /// Fits a Normal distribution to `samples`.
    ///
    /// # Errors
    ///
    /// - `EmptySample` if `samples` is empty
    /// - `DegenerateSample` if all samples are equal
    pub fn fit(samples: &[f64]) -> Result<Self, AnalysisError> {
        let (mu, sigma) = location_scale(samples)?;
        let dist = Normal::new(mu, sigma).map_err(|e| AnalysisError::Distribution(e.to_string()))?;
        Ok(Self { mu, sigma, dist })
    }

    /// Evaluates the fitted density at `x`.
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        self.dist.pdf(x)
    }
}

/// Two-parameter Log-Normal distribution fitted by maximum likelihood.
///
/// `mu` and `sigma` are the mean and population standard deviation of
/// `ln(samples)`; the location is fixed at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogNormalFit {
    /// Mean of the log-values.
    pub mu: f64,
    /// Standard deviation of the log-values.
    pub sigma: f64,
    dist: LogNormal,
}

impl LogNormalFit {
    /// Fits a Log-Normal distribution to strictly positive `samples`.
    ///
    /// # Errors
    ///
    /// - `EmptySample` if `samples` is empty
    /// - `NonPositiveSample` if any sample is `<= 0` or not finite
    /// - `DegenerateSample` if all samples are equal
    pub fn fit(samples: &[f64]) -> Result<Self, AnalysisError> {
        if let Some(&value) = samples.iter().find(|&&v| !(v > 0.0 && v.is_finite())) {
            return Err(AnalysisError::NonPositiveSample { value });
        }
        let logs: Vec<f64> = samples.iter().map(|v| v.ln()).collect();
        let (mu, sigma) = location_scale(&logs).map_err(|e| match e {
            AnalysisError::DegenerateSample { value } => {
                AnalysisError::DegenerateSample { value: value.exp() }
            }
            other => other,
        })?;
        let dist =
            LogNormal::new(mu, sigma).map_err(|e| AnalysisError::Distribution(e.to_string()))?;
        Ok(Self { mu, sigma, dist })
    }

    /// Evaluates the fitted density at `x` (zero for `x <= 0`).
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        self.dist.pdf(x)
    }

    /// Mean of the fitted distribution, `exp(mu + ½σ²)`.
    #[inline]
    pub fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }
}

fn location_scale(samples: &[f64]) -> Result<(f64, f64), AnalysisError> {
    let first = *samples.first().ok_or(AnalysisError::EmptySample)?;
    let mu = mean(samples);
    let sigma = population_std_with_mean(samples, mu);
    if sigma.is_nan() || sigma <= 0.0 {
        return Err(AnalysisError::DegenerateSample { value: first });
    }
    Ok((mu, sigma))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PathRng;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_normal_fit_known_sample() {
        let fit = NormalFit::fit(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(fit.mu, 5.0);
        assert_relative_eq!(fit.sigma, 2.0);

        let peak = 1.0 / (2.0 * (2.0 * PI).sqrt());
        assert_relative_eq!(fit.pdf(5.0), peak, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_fit_recovers_parameters() {
        let mut rng = PathRng::from_seed(3);
        let samples: Vec<f64> = (0..50_000).map(|_| 1.5 + 0.3 * rng.gen_normal()).collect();

        let fit = NormalFit::fit(&samples).unwrap();
        assert_relative_eq!(fit.mu, 1.5, epsilon = 0.01);
        assert_relative_eq!(fit.sigma, 0.3, epsilon = 0.01);
    }

    #[test]
    fn test_lognormal_fit_recovers_parameters() {
        let mut rng = PathRng::from_seed(5);
        let samples: Vec<f64> = (0..50_000)
            .map(|_| (4.6 + 0.4 * rng.gen_normal()).exp())
            .collect();

        let fit = LogNormalFit::fit(&samples).unwrap();
        assert_relative_eq!(fit.mu, 4.6, epsilon = 0.01);
        assert_relative_eq!(fit.sigma, 0.4, epsilon = 0.01);
        assert_relative_eq!(fit.mean(), (4.6_f64 + 0.08).exp(), max_relative = 0.02);
    }

    #[test]
    fn test_lognormal_pdf_support() {
        let fit = LogNormalFit::fit(&[1.0, 2.0, 4.0]).unwrap();
        assert_eq!(fit.pdf(0.0), 0.0);
        assert_eq!(fit.pdf(-1.0), 0.0);
        assert!(fit.pdf(2.0) > 0.0);
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(NormalFit::fit(&[]), Err(AnalysisError::EmptySample));
        assert_eq!(LogNormalFit::fit(&[]), Err(AnalysisError::EmptySample));
    }

    #[test]
    fn test_lognormal_rejects_non_positive() {
        assert_eq!(
            LogNormalFit::fit(&[1.0, 0.0, 2.0]),
            Err(AnalysisError::NonPositiveSample { value: 0.0 })
        );
    }

    #[test]
    fn test_degenerate_samples() {
        assert!(matches!(
            NormalFit::fit(&[4.0, 4.0, 4.0]),
            Err(AnalysisError::DegenerateSample { .. })
        ));
        assert!(matches!(
            LogNormalFit::fit(&[105.0, 105.0]),
            Err(AnalysisError::DegenerateSample { .. })
        ));
    }
}
