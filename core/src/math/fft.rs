use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftPlanner};

/// Helper that wraps matched forward/inverse `rustfft` plans of one size.
pub struct FftHelper {
    forward_plan: std::sync::Arc<dyn Fft<f64>>,
    inverse_plan: std::sync::Arc<dyn Fft<f64>>,
}

impl FftHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward_plan = planner.plan_fft_forward(size);
        let inverse_plan = planner.plan_fft_inverse(size);
        Self {
            forward_plan,
            inverse_plan,
        }
    }

    pub fn size(&self) -> usize {
        self.forward_plan.len()
    }

    /// Transform a real sequence, zero-padded to the planned size.
    pub fn forward(&self, input: &[f64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = input
            .iter()
            .map(|&value| Complex64::new(value, 0.0))
            .collect();
        buffer.resize(self.size(), Complex64::zero());
        self.forward_plan.process(&mut buffer);
        buffer
    }

    /// Inverse transform with 1/n scaling, returning the real parts.
    pub fn inverse(&self, mut spectrum: Vec<Complex64>) -> Vec<f64> {
        spectrum.resize(self.size(), Complex64::zero());
        self.inverse_plan.process(&mut spectrum);
        let scale = 1.0 / self.size() as f64;
        spectrum.iter().map(|value| value.re * scale).collect()
    }
}
