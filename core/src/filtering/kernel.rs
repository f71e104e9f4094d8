//! Normalized smoothing-kernel builders.

use crate::prelude::{PipelineError, PipelineResult};

/// Symmetric Gaussian window of `len` weights centered at `(len - 1) / 2`
/// with spread `sigma`, normalized to sum to one.
pub fn gaussian_kernel(len: usize, sigma: f64) -> PipelineResult<Vec<f64>> {
    if !(sigma > 0.0) {
        return Err(PipelineError::InvalidParameter(format!(
            "gaussian sigma must be positive, got {sigma}"
        )));
    }
    if len == 0 {
        return Err(PipelineError::InvalidParameter(
            "gaussian kernel length must be positive".to_string(),
        ));
    }

    let center = (len - 1) as f64 / 2.0;
    let mut weights: Vec<f64> = (0..len)
        .map(|i| {
            let distance = (i as f64 - center) / sigma;
            (-0.5 * distance * distance).exp()
        })
        .collect();

    // A spread far below the sample spacing underflows every weight; the
    // normalization below would turn that into NaN output.
    let sum: f64 = weights.iter().sum();
    if !sum.is_normal() {
        return Err(PipelineError::InvalidParameter(format!(
            "gaussian kernel degenerates for sigma {sigma} at length {len}"
        )));
    }
    for weight in &mut weights {
        *weight /= sum;
    }
    Ok(weights)
}

/// Uniform kernel of `window` weights, each `1 / window`.
pub fn moving_average_kernel(window: usize) -> PipelineResult<Vec<f64>> {
    if window == 0 {
        return Err(PipelineError::InvalidParameter(
            "moving-average window must be at least 1".to_string(),
        ));
    }
    Ok(vec![1.0 / window as f64; window])
}
