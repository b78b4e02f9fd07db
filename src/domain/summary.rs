//! Run statistics printed after the artifact is written.

use crate::domain::dataset::Dataset;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub countries: usize,
    pub observations: usize,
    pub artifact_bytes: u64,
}

impl Summary {
    pub fn compute(dataset: &Dataset, artifact_bytes: u64) -> Self {
        Self {
            countries: dataset.country_count(),
            observations: dataset.total_observations(),
            artifact_bytes,
        }
    }

    pub fn megabytes(&self) -> f64 {
        self.artifact_bytes as f64 / BYTES_PER_MB
    }

    /// Size with one decimal place, e.g. `2.4`.
    pub fn size_display(&self) -> String {
        format!("{:.1}", self.megabytes())
    }
}
