//! Signal-generation and smoothing core for the harmonic workbench.
//!
//! The modules cover the fixed sampling grid, noisy harmonic synthesis,
//! kernel-based smoothing with same-length convolution, and the
//! parameter-event/snapshot contract consumed by an external control surface.

pub mod filtering;
pub mod math;
pub mod pipeline;
pub mod prelude;
pub mod signal;
pub mod surface;
pub mod telemetry;

pub use pipeline::SignalPipeline;
pub use prelude::{
    NoiseParameters, PipelineError, PipelineResult, SignalParameters, SmoothingFilter,
};
