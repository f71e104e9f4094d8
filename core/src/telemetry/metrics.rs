use std::sync::Mutex;

use serde::Serialize;

/// Point-in-time counter values, detached from the live collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub recomputes: usize,
    pub noise_draws: usize,
    pub rejected_updates: usize,
}

/// Counters the pipeline bumps as it works. Interior mutability keeps the
/// recording calls available behind shared references.
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    inner: Mutex<MetricsSnapshot>,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_recompute(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.recomputes += 1;
        }
    }

    pub fn record_noise_draw(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.noise_draws += 1;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected_updates += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().map(|metrics| *metrics).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_independently() {
        let metrics = PipelineMetrics::new();
        metrics.record_recompute();
        metrics.record_recompute();
        metrics.record_noise_draw();
        metrics.record_rejected();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.recomputes, 2);
        assert_eq!(snapshot.noise_draws, 1);
        assert_eq!(snapshot.rejected_updates, 1);
    }
}
