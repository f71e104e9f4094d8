//! Lightweight runtime counters for the pipeline.

pub mod metrics;

pub use metrics::{MetricsSnapshot, PipelineMetrics};
