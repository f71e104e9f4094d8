use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::filtering::FilterSpec;
use crate::math::{convolve_same, StatsHelper};
use crate::prelude::{NoiseParameters, PipelineResult, SignalParameters};
use crate::signal::{draw_noise, generate_harmonic, TimeGrid};
use crate::surface::{ParameterEvent, SeriesSnapshot};
use crate::telemetry::{MetricsSnapshot, PipelineMetrics};

/// One generate-and-smooth session: a fixed time grid, the current parameter
/// set, the cached noise vector, and the derived raw and filtered series.
///
/// The noise vector is redrawn only when the noise distribution itself
/// changes, on an explicit [`redraw_noise`](Self::redraw_noise), or on
/// [`reset`](Self::reset). Every other parameter change reuses the cached
/// vector, so a seeded session stays reproducible across updates.
pub struct SignalPipeline {
    grid: TimeGrid,
    rng: StdRng,
    signal: SignalParameters,
    noise_params: NoiseParameters,
    filter: FilterSpec,
    noise: Vec<f64>,
    raw: Vec<f64>,
    filtered: Vec<f64>,
    metrics: PipelineMetrics,
}

impl SignalPipeline {
    /// Starts a session with default parameters and entropy-seeded noise.
    pub fn new(sample_count: usize) -> PipelineResult<Self> {
        Self::build(sample_count, StdRng::from_entropy())
    }

    /// Starts a session whose noise stream replays exactly for a given seed.
    pub fn with_seed(sample_count: usize, seed: u64) -> PipelineResult<Self> {
        Self::build(sample_count, StdRng::seed_from_u64(seed))
    }

    fn build(sample_count: usize, rng: StdRng) -> PipelineResult<Self> {
        let grid = TimeGrid::new(sample_count)?;
        let mut pipeline = Self {
            grid,
            rng,
            signal: SignalParameters::default(),
            noise_params: NoiseParameters::default(),
            filter: FilterSpec::default(),
            noise: Vec::new(),
            raw: Vec::new(),
            filtered: Vec::new(),
            metrics: PipelineMetrics::new(),
        };
        let kernel = pipeline.filter.kernel(pipeline.grid.len())?;
        pipeline.draw_noise_vector(pipeline.noise_params)?;
        pipeline.recompute_with(&kernel);
        Ok(pipeline)
    }

    /// Applies a full parameter set and returns the recomputed series.
    ///
    /// The event is validated before any state changes: a rejected noise or
    /// filter setting leaves the previous parameters, noise vector, and
    /// cached series exactly as they were.
    pub fn apply_event(&mut self, event: &ParameterEvent) -> PipelineResult<SeriesSnapshot> {
        let incoming_noise = event.noise();
        incoming_noise.validate().map_err(|err| {
            self.metrics.record_rejected();
            err
        })?;
        let kernel = event.filter.kernel(self.grid.len()).map_err(|err| {
            self.metrics.record_rejected();
            err
        })?;

        if incoming_noise != self.noise_params {
            self.draw_noise_vector(incoming_noise).map_err(|err| {
                self.metrics.record_rejected();
                err
            })?;
            self.noise_params = incoming_noise;
        }
        self.signal = event.signal();
        self.filter = event.filter;
        self.recompute_with(&kernel);
        Ok(self.snapshot())
    }

    /// Redraws the noise vector under the current distribution and
    /// recomputes both series.
    pub fn redraw_noise(&mut self) -> PipelineResult<SeriesSnapshot> {
        let kernel = self.filter.kernel(self.grid.len())?;
        self.draw_noise_vector(self.noise_params)?;
        self.recompute_with(&kernel);
        Ok(self.snapshot())
    }

    /// Returns every parameter to its starting value, redraws the noise, and
    /// recomputes both series.
    pub fn reset(&mut self) -> PipelineResult<SeriesSnapshot> {
        self.signal = SignalParameters::default();
        self.noise_params = NoiseParameters::default();
        self.filter = FilterSpec::default();
        let kernel = self.filter.kernel(self.grid.len())?;
        self.draw_noise_vector(self.noise_params)?;
        self.recompute_with(&kernel);
        info!("pipeline reset to defaults");
        Ok(self.snapshot())
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn noise(&self) -> &[f64] {
        &self.noise
    }

    pub fn raw(&self) -> &[f64] {
        &self.raw
    }

    pub fn filtered(&self) -> &[f64] {
        &self.filtered
    }

    /// The parameter set currently in effect, in event form.
    pub fn parameters(&self) -> ParameterEvent {
        ParameterEvent {
            amplitude: self.signal.amplitude,
            frequency: self.signal.frequency,
            phase: self.signal.phase,
            noise_mean: self.noise_params.mean,
            noise_std: self.noise_params.std_dev,
            show_noise: self.signal.show_noise,
            filter: self.filter,
        }
    }

    pub fn snapshot(&self) -> SeriesSnapshot {
        SeriesSnapshot {
            time: self.grid.values().to_vec(),
            raw: self.raw.clone(),
            filtered: self.filtered.clone(),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn draw_noise_vector(&mut self, params: NoiseParameters) -> PipelineResult<()> {
        self.noise = draw_noise(&params, self.grid.len(), &mut self.rng)?;
        self.metrics.record_noise_draw();
        debug!(
            "drew {} noise samples, empirical mean {:.4}",
            self.noise.len(),
            StatsHelper::mean(&self.noise)
        );
        Ok(())
    }

    fn recompute_with(&mut self, kernel: &[f64]) {
        let raw = generate_harmonic(&self.grid, &self.signal, &self.noise);
        let filtered = convolve_same(&raw, kernel);
        debug!(
            "recomputed series: raw rms {:.4}, filtered rms {:.4}",
            StatsHelper::rms(&raw),
            StatsHelper::rms(&filtered)
        );
        self.raw = raw;
        self.filtered = filtered;
        self.metrics.record_recompute();
    }
}
