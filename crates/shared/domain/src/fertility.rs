use crate::constants::{HIGH, LOW, MEDIUM};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Binary feather-density label produced by the upstream image classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatherDensity {
    Low,
    High,
}

impl FeatherDensity {
    /// Parses a classifier label. Surrounding whitespace and ASCII case are ignored.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case(LOW) {
            Some(Self::Low)
        } else if label.eq_ignore_ascii_case(HIGH) {
            Some(Self::High)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => LOW,
            Self::High => HIGH,
        }
    }
}

impl fmt::Display for FeatherDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FeatherDensity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeatherDensity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_label(&raw).ok_or_else(|| serde::de::Error::unknown_variant(&raw, &[LOW, HIGH]))
    }
}

/// Categorical fertility judgment derived from the defuzzified score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FertilityLevel {
    Low,
    Medium,
    High,
}

impl FertilityLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => LOW,
            Self::Medium => MEDIUM,
            Self::High => HIGH,
        }
    }
}

impl fmt::Display for FertilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw request as it arrives from the classifier and the sensors.
///
/// The label is kept as a string so an unknown label surfaces as an inference error rather
/// than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilityQuery {
    pub feather_density: String,
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl FertilityQuery {
    pub fn new(feather_density: impl Into<String>, temperature: f64, humidity: Option<f64>) -> Self {
        Self { feather_density: feather_density.into(), temperature, humidity }
    }
}

/// Validated inputs echoed back in every inference result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceInputs {
    pub feather_density: FeatherDensity,
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl From<InferenceInputs> for FertilityQuery {
    fn from(inputs: InferenceInputs) -> Self {
        Self {
            feather_density: inputs.feather_density.as_str().to_owned(),
            temperature: inputs.temperature,
            humidity: inputs.humidity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_trimmed_and_case_insensitive() {
        assert_eq!(FeatherDensity::from_label("HIGH"), Some(FeatherDensity::High));
        assert_eq!(FeatherDensity::from_label(" low "), Some(FeatherDensity::Low));
        assert_eq!(FeatherDensity::from_label("Medium"), None);
        assert_eq!(FeatherDensity::from_label(""), None);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(FertilityLevel::Low < FertilityLevel::Medium);
        assert!(FertilityLevel::Medium < FertilityLevel::High);
        assert_eq!(FertilityLevel::Medium.to_string(), "MEDIUM");
    }
}
