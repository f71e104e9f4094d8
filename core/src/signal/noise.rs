use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::prelude::{NoiseParameters, PipelineError, PipelineResult};

/// Draw `len` independent Normal(mean, std_dev) samples from `rng`.
///
/// The caller owns the RNG so a seeded generator replays the same
/// realization; the vector is always replaced wholesale, never edited.
pub fn draw_noise<R: Rng + ?Sized>(
    params: &NoiseParameters,
    len: usize,
    rng: &mut R,
) -> PipelineResult<Vec<f64>> {
    params.validate()?;
    let normal = Normal::new(params.mean, params.std_dev).map_err(|err| {
        PipelineError::InvalidParameter(format!("noise distribution rejected: {err}"))
    })?;
    Ok((0..len).map(|_| normal.sample(rng)).collect())
}
