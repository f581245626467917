//! Max aggregation of the clipped rule consequents and centroid defuzzification.

use crate::knowledge::{KnowledgeBase, OUTPUT_MAX, OUTPUT_MIN};
use crate::rules::RuleStrengths;

/// Score reported when no rule contributes any area.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Integer sample points `0..=100` of the output domain.
const SAMPLES: u32 = 100;

/// Aggregated membership at `z`: the maximum over active rules of
/// `min(strength, consequent(z))`.
#[must_use]
pub fn aggregate(kb: &KnowledgeBase, strengths: &RuleStrengths, z: f64) -> f64 {
    strengths
        .iter()
        .map(|(rule, strength)| strength.min(kb.consequent(rule).degree(z)))
        .fold(0.0, f64::max)
}

/// Discrete centroid of the aggregated output set, clamped to `[0, 100]`.
///
/// Falls back to [`NEUTRAL_SCORE`] when the aggregated set is empty.
#[must_use]
pub fn centroid(kb: &KnowledgeBase, strengths: &RuleStrengths) -> f64 {
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for step in 0..=SAMPLES {
        let z = f64::from(step);
        let mu = aggregate(kb, strengths, z);
        numerator += mu * z;
        denominator += mu;
    }

    let score = if denominator > 0.0 { numerator / denominator } else { NEUTRAL_SCORE };
    score.clamp(OUTPUT_MIN, OUTPUT_MAX)
}
