use serde::{Deserialize, Serialize};

/// The three aligned series a consumer needs to plot one pipeline state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub time: Vec<f64>,
    pub raw: Vec<f64>,
    pub filtered: Vec<f64>,
}

impl SeriesSnapshot {
    pub fn sample_count(&self) -> usize {
        self.time.len()
    }
}
