use crate::filtering::kernel::moving_average_kernel;
use crate::prelude::{PipelineResult, SmoothingFilter};

/// Moving-average smoother with a fixed window, independent of the input
/// length.
#[derive(Debug, Clone, Copy)]
pub struct MovingAverageSmoother {
    window: usize,
}

impl MovingAverageSmoother {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl SmoothingFilter for MovingAverageSmoother {
    fn kernel(&self, _input_len: usize) -> PipelineResult<Vec<f64>> {
        moving_average_kernel(self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_window_returns_the_input_unchanged() {
        let raw = vec![0.25, -1.5, 3.0, 0.0, 7.125];
        let smooth = MovingAverageSmoother::new(1).apply(&raw).unwrap();
        assert_eq!(smooth, raw);
    }

    #[test]
    fn averages_the_surrounding_window() {
        let raw = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let smooth = MovingAverageSmoother::new(3).apply(&raw).unwrap();
        let expected = [1.0, 2.0, 3.0, 4.0, 3.0];
        for (got, want) in smooth.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn window_larger_than_the_signal_still_preserves_length() {
        let raw = vec![1.0, 1.0, 1.0];
        let smooth = MovingAverageSmoother::new(8).apply(&raw).unwrap();
        assert_eq!(smooth.len(), raw.len());
        for value in &smooth {
            assert!((value - 3.0 / 8.0).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_window_is_rejected() {
        let raw = vec![1.0; 16];
        assert!(MovingAverageSmoother::new(0).apply(&raw).is_err());
    }
}
