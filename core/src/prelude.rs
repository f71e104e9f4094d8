use serde::{Deserialize, Serialize};

use crate::math::convolution::convolve_same;

/// Harmonic-signal parameters supplied on every recompute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalParameters {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub show_noise: bool,
}

impl Default for SignalParameters {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
            show_noise: true,
        }
    }
}

/// Normal-distribution parameters for the additive noise vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParameters {
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 0.1,
        }
    }
}

impl NoiseParameters {
    /// The standard deviation must be finite and non-negative; zero is a
    /// valid degenerate draw of all-mean samples.
    pub fn validate(&self) -> PipelineResult<()> {
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(PipelineError::InvalidParameter(format!(
                "noise std dev must be finite and non-negative, got {}",
                self.std_dev
            )));
        }
        Ok(())
    }
}

/// Common error type for pipeline operations.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Trait describing kernel-based smoothing filters.
///
/// Implementations only build the normalized kernel; the provided `apply`
/// convolves it against the input with same-length, zero-padded semantics.
pub trait SmoothingFilter {
    /// Build the normalized smoothing kernel for an input of `input_len`
    /// samples.
    fn kernel(&self, input_len: usize) -> PipelineResult<Vec<f64>>;

    /// Smooth `raw`, returning a series of the same length.
    fn apply(&self, raw: &[f64]) -> PipelineResult<Vec<f64>> {
        let kernel = self.kernel(raw.len())?;
        Ok(convolve_same(raw, &kernel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reset_values() {
        let signal = SignalParameters::default();
        assert_eq!(signal.amplitude, 1.0);
        assert_eq!(signal.frequency, 1.0);
        assert_eq!(signal.phase, 0.0);
        assert!(signal.show_noise);

        let noise = NoiseParameters::default();
        assert_eq!(noise.mean, 0.0);
        assert_eq!(noise.std_dev, 0.1);
    }

    #[test]
    fn negative_noise_std_is_rejected() {
        let noise = NoiseParameters {
            mean: 0.0,
            std_dev: -0.5,
        };
        assert!(noise.validate().is_err());
    }

    #[test]
    fn nan_noise_std_is_rejected() {
        let noise = NoiseParameters {
            mean: 0.0,
            std_dev: f64::NAN,
        };
        assert!(noise.validate().is_err());
    }

    #[test]
    fn infinite_noise_std_is_rejected() {
        for std_dev in [f64::INFINITY, f64::NEG_INFINITY] {
            let noise = NoiseParameters { mean: 0.0, std_dev };
            assert!(noise.validate().is_err());
        }
    }
}
