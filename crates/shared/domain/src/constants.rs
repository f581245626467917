//! Wire labels used by the classifier contract and the inference result.

pub const LOW: &str = "LOW";
pub const MEDIUM: &str = "MEDIUM";
pub const HIGH: &str = "HIGH";

/// Prefix for environment overrides of the application config (`FHUB__LOGGING__LEVEL`).
pub const ENV_PREFIX: &str = "FHUB";
