use serde::{Deserialize, Serialize};

use crate::filtering::FilterSpec;
use crate::prelude::{NoiseParameters, SignalParameters};

/// One round of control-surface input: the full parameter set a caller wants
/// the pipeline to run with. Every field defaults, so a partial update body
/// only has to carry the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterEvent {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub noise_mean: f64,
    pub noise_std: f64,
    pub show_noise: bool,
    pub filter: FilterSpec,
}

impl Default for ParameterEvent {
    fn default() -> Self {
        let signal = SignalParameters::default();
        let noise = NoiseParameters::default();
        Self {
            amplitude: signal.amplitude,
            frequency: signal.frequency,
            phase: signal.phase,
            noise_mean: noise.mean,
            noise_std: noise.std_dev,
            show_noise: signal.show_noise,
            filter: FilterSpec::default(),
        }
    }
}

impl ParameterEvent {
    pub fn signal(&self) -> SignalParameters {
        SignalParameters {
            amplitude: self.amplitude,
            frequency: self.frequency,
            phase: self.phase,
            show_noise: self.show_noise,
        }
    }

    pub fn noise(&self) -> NoiseParameters {
        NoiseParameters {
            mean: self.noise_mean,
            std_dev: self.noise_std,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_keeps_the_remaining_defaults() {
        let event: ParameterEvent = serde_json::from_str(r#"{"amplitude": 2.0}"#).unwrap();
        assert_eq!(event.amplitude, 2.0);
        assert_eq!(event.frequency, 1.0);
        assert_eq!(event.noise_std, 0.1);
        assert!(event.show_noise);
        assert_eq!(event.filter, FilterSpec::default());
    }

    #[test]
    fn filter_selection_parses_from_the_tagged_form() {
        let event: ParameterEvent = serde_json::from_str(
            r#"{"filter": {"kind": "moving_average", "window": 6}}"#,
        )
        .unwrap();
        assert_eq!(event.filter, FilterSpec::MovingAverage { window: 6 });
    }

    #[test]
    fn splits_into_signal_and_noise_views() {
        let event = ParameterEvent {
            phase: 0.5,
            noise_mean: -0.2,
            ..ParameterEvent::default()
        };
        assert_eq!(event.signal().phase, 0.5);
        assert_eq!(event.noise().mean, -0.2);
        assert_eq!(event.noise().std_dev, 0.1);
    }
}
