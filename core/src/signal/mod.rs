pub mod grid;
pub mod harmonic;
pub mod noise;

pub use grid::{TimeGrid, DEFAULT_SAMPLE_COUNT};
pub use harmonic::generate_harmonic;
pub use noise::draw_noise;
