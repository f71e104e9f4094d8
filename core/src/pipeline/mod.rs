//! The stateful session tying grid, noise, harmonic, and filtering together.

pub mod session;

pub use session::SignalPipeline;
