//! Aggregate statistics over a batch of inference results.

use crate::engine::InferenceResult;
use crate::round2;
use fhub_domain::{FeatherDensity, FertilityLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct DensityDistribution {
    pub low: usize,
    pub high: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct LevelDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Climate averages of the results that ended in one fertility level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentByLevel {
    pub fertility_level: FertilityLevel,
    pub avg_temperature: Option<f64>,
    /// Averaged only over results that carried a humidity reading.
    pub avg_humidity: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilityAnalytics {
    pub total_records: usize,
    pub feather_density_distribution: DensityDistribution,
    pub fertility_level_distribution: LevelDistribution,
    pub average_fertility_score: Option<f64>,
    /// One entry per level, `LOW` first.
    pub environmental_by_fertility: Vec<EnvironmentByLevel>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: f64,
    count: f64,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1.0;
    }

    fn value(self) -> Option<f64> {
        (self.count > 0.0).then(|| round2(self.sum / self.count))
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct LevelAccumulator {
    temperature: Mean,
    humidity: Mean,
    count: usize,
}

impl FertilityAnalytics {
    /// Aggregates `results` in a single pass.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a InferenceResult>) -> Self {
        let mut total_records = 0;
        let mut densities = DensityDistribution::default();
        let mut levels = LevelDistribution::default();
        let mut score = Mean::default();
        let mut by_level = [LevelAccumulator::default(); FertilityLevel::ALL.len()];

        for result in results {
            total_records += 1;
            score.push(result.fertility_score);

            match result.feather_density() {
                FeatherDensity::Low => densities.low += 1,
                FeatherDensity::High => densities.high += 1,
            }

            let slot = match result.fertility_level {
                FertilityLevel::Low => {
                    levels.low += 1;
                    0
                },
                FertilityLevel::Medium => {
                    levels.medium += 1;
                    1
                },
                FertilityLevel::High => {
                    levels.high += 1;
                    2
                },
            };

            let acc = &mut by_level[slot];
            acc.count += 1;
            acc.temperature.push(result.inputs.temperature);
            if let Some(humidity) = result.inputs.humidity {
                acc.humidity.push(humidity);
            }
        }

        let environmental_by_fertility = FertilityLevel::ALL
            .iter()
            .zip(by_level)
            .map(|(&fertility_level, acc)| EnvironmentByLevel {
                fertility_level,
                avg_temperature: acc.temperature.value(),
                avg_humidity: acc.humidity.value(),
                count: acc.count,
            })
            .collect();

        Self {
            total_records,
            feather_density_distribution: densities,
            fertility_level_distribution: levels,
            average_fertility_score: score.value(),
            environmental_by_fertility,
        }
    }
}
