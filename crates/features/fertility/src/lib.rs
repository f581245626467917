//! # Fertility inference
//!
//! A Mamdani fuzzy inference system estimating poultry fertility from a feather-density label
//! and climate readings.
//!
//! The pipeline is linear and stateless:
//!
//! 1. [`normalizer`]: label to Feather Density Score, readings to Thermal Comfort Index.
//! 2. [`fuzzifier`]: crisp values to membership degrees per linguistic term.
//! 3. [`rules`]: thirteen fixed rules combined with the minimum operator.
//! 4. [`defuzzifier`]: max aggregation and discrete centroid over `0..=100`.
//! 5. [`classifier`]: level thresholds and the explanation text.
//!
//! All numeric constants live in a [`KnowledgeBase`]; [`KnowledgeBase::V1`] is compiled in.
//!
//! ```rust
//! let result = fhub_fertility::infer_fertility("HIGH", 21.0, None)?;
//! assert!(result.fertility_score > 80.0);
//! # Ok::<(), fhub_fertility::FertilityError>(())
//! ```

pub mod analytics;
pub mod classifier;
pub mod defuzzifier;
mod engine;
mod error;
pub mod fuzzifier;
pub mod knowledge;
pub mod membership;
pub mod normalizer;
pub mod observer;
pub mod rules;

pub use analytics::FertilityAnalytics;
pub use engine::{FertilityEngine, FertilityEngineBuilder, InferenceResult, infer_fertility};
pub use error::{FertilityError, FertilityErrorExt, FertilityResult};
pub use fhub_domain::{FeatherDensity, FertilityLevel, FertilityQuery, InferenceInputs};
pub use knowledge::KnowledgeBase;
pub use observer::{InferenceObserver, SilentObserver, TracingObserver};
pub use rules::{RuleId, RuleStrengths};

/// Rounds half away from zero to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
