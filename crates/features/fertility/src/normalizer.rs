//! Input validation and crisp normalization.
//!
//! Turns the classifier label into a Feather Density Score (FDS) and the climate readings into a
//! Thermal Comfort Index (TCI). This is the only stage that can reject a query.

use crate::error::{FertilityError, FertilityResult};
use fhub_domain::{FeatherDensity, FertilityQuery, InferenceInputs};
use serde::{Deserialize, Serialize};

/// Crisp values fed into fuzzification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub fds: f64,
    pub tci: f64,
    pub temperature: f64,
    pub humidity: Option<f64>,
}

/// Scores assigned to the two classifier labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatherDensityScores {
    pub low: f64,
    pub high: f64,
}

impl FeatherDensityScores {
    #[must_use]
    pub const fn score(&self, density: FeatherDensity) -> f64 {
        match density {
            FeatherDensity::Low => self.low,
            FeatherDensity::High => self.high,
        }
    }
}

/// Piecewise-linear stress curve: a flat baseline over the comfort band, rising linearly on
/// either side and saturating at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressCurve {
    pub comfort_low: f64,
    pub comfort_high: f64,
    pub baseline: f64,
    /// Distance below the band over which `below_gain` is added.
    pub below_span: f64,
    pub below_gain: f64,
    /// Distance above the band over which `above_gain` is added.
    pub above_span: f64,
    pub above_gain: f64,
}

impl StressCurve {
    #[must_use]
    pub fn stress(&self, x: f64) -> f64 {
        if x < self.comfort_low {
            let deficit = (self.comfort_low - x) / self.below_span;
            (self.baseline + deficit * self.below_gain).min(1.0)
        } else if x > self.comfort_high {
            let excess = (x - self.comfort_high) / self.above_span;
            (self.baseline + excess * self.above_gain).min(1.0)
        } else {
            self.baseline
        }
    }

    /// `true` when `x` lies inside the comfort band.
    #[must_use]
    pub fn is_comfortable(&self, x: f64) -> bool {
        (self.comfort_low..=self.comfort_high).contains(&x)
    }
}

/// Weights combining temperature and humidity stress into the TCI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TciWeights {
    pub temperature: f64,
    pub humidity: f64,
}

/// All constants used by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    pub feather_density: FeatherDensityScores,
    pub temperature: StressCurve,
    pub humidity: StressCurve,
    pub tci_weights: TciWeights,
}

impl Normalization {
    #[must_use]
    pub fn temperature_stress(&self, temperature: f64) -> f64 {
        self.temperature.stress(temperature)
    }

    #[must_use]
    pub fn humidity_stress(&self, humidity: f64) -> f64 {
        self.humidity.stress(humidity)
    }

    /// Thermal Comfort Index in `[0, 1]`. Temperature stress alone when humidity is missing.
    #[must_use]
    pub fn thermal_comfort_index(&self, temperature: f64, humidity: Option<f64>) -> f64 {
        let ts = self.temperature_stress(temperature);
        let tci = match humidity {
            Some(h) => {
                ts * self.tci_weights.temperature + self.humidity_stress(h) * self.tci_weights.humidity
            },
            None => ts,
        };
        tci.clamp(0.0, 1.0)
    }
}

/// Parses the label and validates the readings of a raw query.
///
/// # Errors
/// [`FertilityError::InvalidInput`] for an unknown label, a non-finite reading, or humidity
/// outside `[0, 100]`.
pub fn parse(query: &FertilityQuery) -> FertilityResult<InferenceInputs> {
    let feather_density = FeatherDensity::from_label(&query.feather_density).ok_or_else(|| {
        FertilityError::invalid_input(format!(
            "unrecognized feather density label '{}', expected LOW or HIGH",
            query.feather_density
        ))
    })?;

    let inputs =
        InferenceInputs { feather_density, temperature: query.temperature, humidity: query.humidity };
    check_readings(&inputs)?;
    Ok(inputs)
}

/// Validates the readings and computes FDS and TCI.
///
/// # Errors
/// [`FertilityError::InvalidInput`] for a non-finite reading or humidity outside `[0, 100]`.
pub fn normalize(normalization: &Normalization, inputs: &InferenceInputs) -> FertilityResult<Normalized> {
    check_readings(inputs)?;

    Ok(Normalized {
        fds: normalization.feather_density.score(inputs.feather_density),
        tci: normalization.thermal_comfort_index(inputs.temperature, inputs.humidity),
        temperature: inputs.temperature,
        humidity: inputs.humidity,
    })
}

fn check_readings(inputs: &InferenceInputs) -> FertilityResult<()> {
    if !inputs.temperature.is_finite() {
        return Err(FertilityError::invalid_input(format!(
            "temperature must be a finite number, got {}",
            inputs.temperature
        )));
    }

    match inputs.humidity {
        Some(h) if !h.is_finite() => Err(FertilityError::invalid_input(format!(
            "humidity must be a finite number, got {h}"
        ))),
        Some(h) if !(0.0..=100.0).contains(&h) => Err(FertilityError::invalid_input(format!(
            "humidity must lie within [0, 100], got {h}"
        ))),
        _ => Ok(()),
    }
}
