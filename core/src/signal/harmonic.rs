use std::f64::consts::PI;

use crate::prelude::SignalParameters;
use crate::signal::grid::TimeGrid;

/// Sample `A * sin(2π * f * t + φ)` over the grid, adding the noise vector
/// elementwise when `show_noise` is set.
///
/// Infallible by contract: amplitude, frequency, and phase are taken as
/// given (a non-positive frequency just degenerates the oscillation), and
/// the noise slice is expected to match the grid length.
pub fn generate_harmonic(grid: &TimeGrid, params: &SignalParameters, noise: &[f64]) -> Vec<f64> {
    let mut series: Vec<f64> = grid
        .values()
        .iter()
        .map(|&t| params.amplitude * (2.0 * PI * params.frequency * t + params.phase).sin())
        .collect();
    if params.show_noise {
        for (value, sample) in series.iter_mut().zip(noise) {
            *value += sample;
        }
    }
    series
}
