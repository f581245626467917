//! The compiled-in rule base and its evaluation with the minimum operator.

use crate::fuzzifier::{FeatherTerm, Fuzzified, HumidityTerm, TemperatureTerm};
use crate::knowledge::KnowledgeBase;
use crate::normalizer::Normalized;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};

/// Identifier of one of the fixed fuzzy rules. The string form is the reporting key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCountMacro,
    EnumString,
    IntoStaticStr,
)]
pub enum RuleId {
    #[strum(serialize = "rule1_high_feather_optimal_temp")]
    HighFeatherOptimalTemp,
    #[strum(serialize = "rule2_high_feather_cold_temp")]
    HighFeatherColdTemp,
    #[strum(serialize = "rule3_high_feather_hot_temp")]
    HighFeatherHotTemp,
    #[strum(serialize = "rule4_medium_feather_optimal_temp")]
    MediumFeatherOptimalTemp,
    #[strum(serialize = "rule5_medium_feather_cold_temp")]
    MediumFeatherColdTemp,
    #[strum(serialize = "rule6_medium_feather_hot_temp")]
    MediumFeatherHotTemp,
    #[strum(serialize = "rule7_low_feather_cold_temp")]
    LowFeatherColdTemp,
    #[strum(serialize = "rule8_low_feather_optimal_temp")]
    LowFeatherOptimalTemp,
    #[strum(serialize = "rule9_low_feather_hot_temp")]
    LowFeatherHotTemp,
    #[strum(serialize = "rule10_perfect_conditions")]
    PerfectConditions,
    #[strum(serialize = "rule11_low_humidity_stress")]
    LowHumidityStress,
    #[strum(serialize = "rule12_high_humidity_stress")]
    HighHumidityStress,
    #[strum(serialize = "rule13_high_heat_stress")]
    HighHeatStress,
}

/// One `(variable, term)` reference of a rule antecedent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Antecedent {
    FeatherDensity(FeatherTerm),
    Temperature(TemperatureTerm),
    Humidity(HumidityTerm),
}

impl Antecedent {
    /// Degree of this antecedent, or `None` when it refers to a missing humidity reading.
    #[must_use]
    pub fn degree(self, fuzzified: &Fuzzified) -> Option<f64> {
        match self {
            Self::FeatherDensity(term) => Some(fuzzified.feather_density.get(term)),
            Self::Temperature(term) => Some(fuzzified.temperature.get(term)),
            Self::Humidity(term) => fuzzified.humidity.map(|h| h.get(term)),
        }
    }
}

/// How a rule's firing strength is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Premise {
    /// Minimum over all antecedents.
    All(&'static [Antecedent]),
    /// Fires with strength equal to the TCI once it reaches the heat-stress threshold.
    HeatStress,
}

impl RuleId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Position in declaration order, also the index into the knowledge-base consequents.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn premise(self) -> Premise {
        use Antecedent::{FeatherDensity as F, Humidity as H, Temperature as T};

        match self {
            Self::HighFeatherOptimalTemp => {
                Premise::All(&[F(FeatherTerm::High), T(TemperatureTerm::Optimal)])
            },
            Self::HighFeatherColdTemp => Premise::All(&[F(FeatherTerm::High), T(TemperatureTerm::Cold)]),
            Self::HighFeatherHotTemp => Premise::All(&[F(FeatherTerm::High), T(TemperatureTerm::Hot)]),
            Self::MediumFeatherOptimalTemp => {
                Premise::All(&[F(FeatherTerm::Medium), T(TemperatureTerm::Optimal)])
            },
            Self::MediumFeatherColdTemp => {
                Premise::All(&[F(FeatherTerm::Medium), T(TemperatureTerm::Cold)])
            },
            Self::MediumFeatherHotTemp => Premise::All(&[F(FeatherTerm::Medium), T(TemperatureTerm::Hot)]),
            Self::LowFeatherColdTemp => Premise::All(&[F(FeatherTerm::Low), T(TemperatureTerm::Cold)]),
            Self::LowFeatherOptimalTemp => {
                Premise::All(&[F(FeatherTerm::Low), T(TemperatureTerm::Optimal)])
            },
            Self::LowFeatherHotTemp => Premise::All(&[F(FeatherTerm::Low), T(TemperatureTerm::Hot)]),
            Self::PerfectConditions => Premise::All(&[
                F(FeatherTerm::High),
                T(TemperatureTerm::Optimal),
                H(HumidityTerm::Optimal),
            ]),
            Self::LowHumidityStress => Premise::All(&[F(FeatherTerm::High), H(HumidityTerm::Low)]),
            Self::HighHumidityStress => Premise::All(&[F(FeatherTerm::High), H(HumidityTerm::High)]),
            Self::HighHeatStress => Premise::HeatStress,
        }
    }

    /// Firing strength of this rule, or `None` when the rule does not apply to the inputs.
    #[must_use]
    pub fn strength(self, kb: &KnowledgeBase, normalized: &Normalized, fuzzified: &Fuzzified) -> Option<f64> {
        match self.premise() {
            Premise::All(antecedents) => antecedents
                .iter()
                .map(|antecedent| antecedent.degree(fuzzified))
                .try_fold(f64::INFINITY, |acc, degree| degree.map(|d| acc.min(d))),
            Premise::HeatStress => {
                (normalized.tci >= kb.heat_stress_threshold).then_some(normalized.tci)
            },
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_str(&raw).map_err(|_| de::Error::custom(format!("unknown rule '{raw}'")))
    }
}

/// Sparse firing strengths: only rules with a strength `> 0` are active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleStrengths {
    strengths: [f64; RuleId::COUNT],
}

impl RuleStrengths {
    #[must_use]
    pub const fn empty() -> Self {
        Self { strengths: [0.0; RuleId::COUNT] }
    }

    /// Strength of `rule`, `None` when it is inactive.
    #[must_use]
    pub fn get(&self, rule: RuleId) -> Option<f64> {
        let strength = self.strengths[rule.index()];
        (strength > 0.0).then_some(strength)
    }

    #[must_use]
    pub fn contains(&self, rule: RuleId) -> bool {
        self.get(rule).is_some()
    }

    /// Active rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleId, f64)> + '_ {
        RuleId::iter().filter_map(|rule| self.get(rule).map(|strength| (rule, strength)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identifiers of the active rules, for logging.
    #[must_use]
    pub fn active_ids(&self) -> Vec<&'static str> {
        self.iter().map(|(rule, _)| rule.as_str()).collect()
    }
}

impl Default for RuleStrengths {
    fn default() -> Self {
        Self::empty()
    }
}

/// Keeps only positive, finite strengths; later entries for the same rule win.
impl FromIterator<(RuleId, f64)> for RuleStrengths {
    fn from_iter<I: IntoIterator<Item = (RuleId, f64)>>(iter: I) -> Self {
        let mut strengths = Self::empty();
        for (rule, strength) in iter {
            if strength > 0.0 && strength.is_finite() {
                strengths.strengths[rule.index()] = strength.min(1.0);
            }
        }
        strengths
    }
}

impl Serialize for RuleStrengths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (rule, strength) in self.iter() {
            map.serialize_entry(rule.as_str(), &strength)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleStrengths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<RuleId, f64>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

/// Evaluates every rule in a single pass and keeps the ones that fired.
#[must_use]
pub fn evaluate_rules(kb: &KnowledgeBase, normalized: &Normalized, fuzzified: &Fuzzified) -> RuleStrengths {
    RuleId::iter()
        .filter_map(|rule| rule.strength(kb, normalized, fuzzified).map(|strength| (rule, strength)))
        .collect()
}
