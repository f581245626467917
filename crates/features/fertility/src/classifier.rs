//! Level thresholds and the human-readable explanation.

use crate::knowledge::KnowledgeBase;
use crate::normalizer::Normalized;
use fhub_domain::{FertilityLevel, InferenceInputs};

const FDS_EXCELLENT: f64 = 0.75;
const FDS_MODERATE: f64 = 0.4;
const TCI_MODERATE: f64 = 0.5;

/// Maps a defuzzified score onto a fertility level.
#[must_use]
pub fn classify(kb: &KnowledgeBase, score: f64) -> FertilityLevel {
    kb.levels.level(score)
}

/// Renders the deterministic explanation of a result.
///
/// `score` is the unrounded centroid; it is printed with one decimal.
#[must_use]
pub fn explain(
    kb: &KnowledgeBase,
    inputs: &InferenceInputs,
    normalized: &Normalized,
    level: FertilityLevel,
    score: f64,
) -> String {
    let mut text = String::with_capacity(512);
    let fds = normalized.fds;
    let tci = normalized.tci;

    text.push_str(&format!("Fertility prediction: {level} ({score:.1}% likelihood). "));
    text.push_str(&format!(
        "Feather Density Score (FDS): {fds:.2} ({} resilience). ",
        inputs.feather_density
    ));
    text.push_str(if fds >= FDS_EXCELLENT {
        "Excellent feather coverage provides superior thermal regulation. "
    } else if fds >= FDS_MODERATE {
        "Moderate feather coverage offers adequate insulation. "
    } else {
        "Low feather coverage may compromise thermal comfort. "
    });

    text.push_str(&format!("Thermal Comfort Index (TCI): {tci:.2}. "));
    text.push_str(if tci >= kb.heat_stress_threshold {
        "High heat stress detected - fertility may be compromised. "
    } else if tci >= TCI_MODERATE {
        "Moderate thermal stress present. "
    } else {
        "Thermal conditions are favorable. "
    });

    let comfort = &kb.normalization.temperature;
    let (low, high) = (comfort.comfort_low, comfort.comfort_high);
    let temperature = inputs.temperature;
    let sentence = if temperature < low {
        format!(
            "Temperature ({temperature}°C) below optimal range ({low}-{high}°C) - cold stress may \
             reduce fertility. "
        )
    } else if temperature > high {
        format!(
            "Temperature ({temperature}°C) above optimal range ({low}-{high}°C) - heat stress may \
             affect fertility. "
        )
    } else {
        format!("Temperature ({temperature}°C) within optimal range. ")
    };
    text.push_str(&sentence);

    if let Some(humidity) = inputs.humidity {
        let comfort = &kb.normalization.humidity;
        let (low, high) = (comfort.comfort_low, comfort.comfort_high);
        let sentence = if humidity < low {
            format!("Low humidity ({humidity}%) may cause respiratory stress and dehydration. ")
        } else if humidity > high {
            format!(
                "High humidity ({humidity}%) may promote pathogen growth and reduce heat \
                 dissipation. "
            )
        } else {
            format!("Humidity ({humidity}%) within optimal range ({low}-{high}%). ")
        };
        text.push_str(&sentence);
    }

    text.trim_end().to_owned()
}
