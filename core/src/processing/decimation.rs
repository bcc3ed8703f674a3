use crate::math::geometry::planar_distance;
use crate::prelude::Sample;
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimationConfig {
    /// Keep every `stride`-th sample before distance pruning.
    pub stride: usize,
    /// Planar distance a sample must strictly exceed to be kept.
    pub min_distance: f64,
}

impl Default for DecimationConfig {
    fn default() -> Self {
        Self {
            stride: 2,
            min_distance: 100.0,
        }
    }
}

impl DecimationConfig {
    fn normalized_stride(&self) -> usize {
        self.stride.max(1)
    }
}

/// Stride subsampling followed by minimum-distance pruning.
pub struct Decimator {
    config: DecimationConfig,
    logger: LogManager,
}

impl Decimator {
    pub fn new(config: DecimationConfig) -> Self {
        Self {
            config,
            logger: LogManager::for_stage("decimation"),
        }
    }

    /// Returns an order-preserving subsequence of `samples`: every
    /// `stride`-th sample, then distance pruning as in [`Decimator::prune`].
    pub fn apply(&self, samples: &[Sample]) -> Vec<Sample> {
        let strided: Vec<Sample> = samples
            .iter()
            .step_by(self.config.normalized_stride())
            .cloned()
            .collect();
        self.prune(&strided)
    }

    /// Distance pruning only, for input that was already strided while it
    /// was read. The first sample always survives; later ones only when
    /// farther than `min_distance` from the last kept sample.
    pub fn prune(&self, samples: &[Sample]) -> Vec<Sample> {
        let mut kept: Vec<Sample> = Vec::new();

        for candidate in samples {
            let keep = match kept.last() {
                None => true,
                Some(last) => planar_distance(candidate, last) > self.config.min_distance,
            };
            if keep {
                kept.push(candidate.clone());
            }
        }

        self.logger.record(&format!(
            "kept {} of {} samples (min distance {})",
            kept.len(),
            samples.len(),
            self.config.min_distance
        ));
        kept
    }
}
