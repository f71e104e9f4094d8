//! Smoothing filters applied to the raw series.
//!
//! Both filters reduce to a finite kernel convolved with the raw samples in
//! same mode, so swapping one for the other never changes the series length.

pub mod gaussian;
pub mod kernel;
pub mod moving_average;

pub use gaussian::GaussianSmoother;
pub use kernel::{gaussian_kernel, moving_average_kernel};
pub use moving_average::MovingAverageSmoother;

use serde::{Deserialize, Serialize};

use crate::prelude::{PipelineResult, SmoothingFilter};

pub const DEFAULT_GAUSSIAN_SIGMA: f64 = 1.0;
pub const DEFAULT_WINDOW: usize = 10;

/// Filter selection carried by parameter events and scenario files. A bare
/// `{"kind": ...}` fills the documented default setting for that kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterSpec {
    Gaussian {
        #[serde(default = "default_sigma")]
        sigma: f64,
    },
    MovingAverage {
        #[serde(default = "default_window")]
        window: usize,
    },
}

fn default_sigma() -> f64 {
    DEFAULT_GAUSSIAN_SIGMA
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec::Gaussian {
            sigma: DEFAULT_GAUSSIAN_SIGMA,
        }
    }
}

impl FilterSpec {
    /// Builds the normalized kernel for an input of `input_len` samples.
    pub fn kernel(&self, input_len: usize) -> PipelineResult<Vec<f64>> {
        match *self {
            FilterSpec::Gaussian { sigma } => GaussianSmoother::new(sigma).kernel(input_len),
            FilterSpec::MovingAverage { window } => {
                MovingAverageSmoother::new(window).kernel(input_len)
            }
        }
    }

    /// Smooths `raw` with the selected filter.
    pub fn apply(&self, raw: &[f64]) -> PipelineResult<Vec<f64>> {
        match *self {
            FilterSpec::Gaussian { sigma } => GaussianSmoother::new(sigma).apply(raw),
            FilterSpec::MovingAverage { window } => MovingAverageSmoother::new(window).apply(raw),
        }
    }

    /// Short human-readable label for status lines and summaries.
    pub fn describe(&self) -> String {
        match *self {
            FilterSpec::Gaussian { sigma } => format!("gaussian (sigma {:.2})", sigma),
            FilterSpec::MovingAverage { window } => {
                format!("moving average (window {})", window)
            }
        }
    }
}
