use std::f64::consts::PI;

use crate::prelude::{PipelineError, PipelineResult};

pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Fixed, evenly spaced sampling grid over [0, 2π).
///
/// Built once per pipeline and read-only afterwards: `t[i] = i * 2π/N`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    samples: Vec<f64>,
    step: f64,
}

impl TimeGrid {
    pub fn new(sample_count: usize) -> PipelineResult<Self> {
        if sample_count == 0 {
            return Err(PipelineError::InvalidParameter(
                "sample count must be positive".to_string(),
            ));
        }
        let step = 2.0 * PI / sample_count as f64;
        let samples = (0..sample_count).map(|i| i as f64 * step).collect();
        Ok(Self { samples, step })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Spacing between adjacent samples.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn values(&self) -> &[f64] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_evenly_spaced_over_half_open_interval() {
        let grid = TimeGrid::new(1000).unwrap();
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid.values()[0], 0.0);
        assert!((grid.step() - 2.0 * PI / 1000.0).abs() < 1e-15);
        for window in grid.values().windows(2) {
            assert!((window[1] - window[0] - grid.step()).abs() < 1e-12);
        }
        let last = grid.values()[999];
        assert!(last < 2.0 * PI);
        assert!((last - 999.0 * grid.step()).abs() < 1e-12);
    }

    #[test]
    fn zero_sample_count_is_rejected() {
        assert!(TimeGrid::new(0).is_err());
    }

    #[test]
    fn single_sample_grid_starts_at_zero() {
        let grid = TimeGrid::new(1).unwrap();
        assert_eq!(grid.values(), &[0.0]);
    }
}
