use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wavecore::filtering::FilterSpec;
use wavecore::signal::DEFAULT_SAMPLE_COUNT;
use wavecore::surface::ParameterEvent;

/// Scenario settings for one workbench run. Every field defaults, so a YAML
/// file only states what it changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub samples: usize,
    pub seed: u64,
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub noise_mean: f64,
    pub noise_std: f64,
    pub show_noise: bool,
    pub filter: FilterSpec,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let event = ParameterEvent::default();
        Self {
            samples: DEFAULT_SAMPLE_COUNT,
            seed: 0,
            amplitude: event.amplitude,
            frequency: event.frequency,
            phase: event.phase,
            noise_mean: event.noise_mean,
            noise_std: event.noise_std,
            show_noise: event.show_noise,
            filter: event.filter,
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario config {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(samples: usize, seed: u64) -> Self {
        Self {
            samples,
            seed,
            ..Self::default()
        }
    }

    /// The parameter event this scenario asks the pipeline to run with.
    pub fn event(&self) -> ParameterEvent {
        ParameterEvent {
            amplitude: self.amplitude,
            frequency: self.frequency,
            phase: self.phase,
            noise_mean: self.noise_mean,
            noise_std: self.noise_std,
            show_noise: self.show_noise,
            filter: self.filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_keeps_the_event_defaults() {
        let cfg = ScenarioConfig::from_args(250, 7);
        assert_eq!(cfg.samples, 250);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.event(), ParameterEvent::default());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"samples: 250\nseed: 7\nnoise_std: 0.05\nfilter:\n  kind: moving_average\n  window: 5\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = ScenarioConfig::load(&path).unwrap();
        assert_eq!(cfg.samples, 250);
        assert_eq!(cfg.noise_std, 0.05);
        assert_eq!(cfg.filter, FilterSpec::MovingAverage { window: 5 });
        assert_eq!(cfg.amplitude, 1.0);
    }
}
