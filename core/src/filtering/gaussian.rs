use crate::filtering::kernel::gaussian_kernel;
use crate::prelude::{PipelineResult, SmoothingFilter};

/// Gaussian smoother: the kernel spans the whole input, so the spread alone
/// controls how much of the neighborhood each output sample averages.
#[derive(Debug, Clone, Copy)]
pub struct GaussianSmoother {
    sigma: f64,
}

impl GaussianSmoother {
    pub fn new(sigma: f64) -> Self {
        Self { sigma }
    }
}

impl SmoothingFilter for GaussianSmoother {
    fn kernel(&self, input_len: usize) -> PipelineResult<Vec<f64>> {
        gaussian_kernel(input_len, self.sigma)
    }
}
