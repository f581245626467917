//! The versioned knowledge base: every numeric constant of the inference pipeline.
//!
//! [`KnowledgeBase::V1`] is compiled in. Alternative tables can be loaded from TOML or JSON and
//! are validated before use; rule antecedents stay fixed in [`crate::rules`].

use crate::error::{FertilityError, FertilityErrorExt, FertilityResult};
use crate::fuzzifier::{FeatherTerm, HumidityTerm, LinguisticVariable, TemperatureTerm, Term};
use crate::membership::MembershipFunction;
use crate::normalizer::{FeatherDensityScores, Normalization, StressCurve, TciWeights};
use crate::rules::RuleId;
use fhub_domain::FertilityLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{EnumCount, IntoEnumIterator};

/// Grid resolution used to look for dead zones in a variable's domain.
const COVERAGE_STEPS: u32 = 1000;

/// Lower and upper bound of the crisp output domain.
pub const OUTPUT_MIN: f64 = 0.0;
pub const OUTPUT_MAX: f64 = 100.0;

/// Output fuzzy set of a rule: `(center - width, center, center + width)` with the right end
/// collapsed onto the third point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Consequent {
    pub center: f64,
    pub width: f64,
}

impl Consequent {
    #[must_use]
    pub const fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    #[must_use]
    pub fn membership(&self) -> MembershipFunction {
        MembershipFunction::truncated(
            self.center - self.width,
            self.center,
            self.center + self.width,
        )
    }

    #[must_use]
    pub fn degree(&self, z: f64) -> f64 {
        self.membership().degree(z)
    }
}

/// Score thresholds separating the fertility levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelThresholds {
    /// Scores below this are `LOW`.
    pub medium: f64,
    /// Scores at or above this are `HIGH`.
    pub high: f64,
}

impl LevelThresholds {
    #[must_use]
    pub fn level(&self, score: f64) -> FertilityLevel {
        if score < self.medium {
            FertilityLevel::Low
        } else if score < self.high {
            FertilityLevel::Medium
        } else {
            FertilityLevel::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub version: u32,
    /// TCI at or above which the heat-stress override fires.
    pub heat_stress_threshold: f64,
    pub levels: LevelThresholds,
    pub normalization: Normalization,
    pub feather_density: LinguisticVariable<FeatherTerm>,
    pub temperature: LinguisticVariable<TemperatureTerm>,
    pub humidity: LinguisticVariable<HumidityTerm>,
    /// Indexed by [`RuleId`] declaration order.
    pub consequents: [Consequent; RuleId::COUNT],
}

impl KnowledgeBase {
    pub const V1: Self = Self {
        version: 1,
        heat_stress_threshold: 0.8,
        levels: LevelThresholds { medium: 40.0, high: 70.0 },
        normalization: Normalization {
            feather_density: FeatherDensityScores { low: 0.25, high: 0.75 },
            temperature: StressCurve {
                comfort_low: 18.0,
                comfort_high: 24.0,
                baseline: 0.2,
                below_span: 18.0,
                below_gain: 0.6,
                above_span: 16.0,
                above_gain: 0.8,
            },
            humidity: StressCurve {
                comfort_low: 50.0,
                comfort_high: 70.0,
                baseline: 0.1,
                below_span: 50.0,
                below_gain: 0.4,
                above_span: 30.0,
                above_gain: 0.5,
            },
            tci_weights: TciWeights { temperature: 0.7, humidity: 0.3 },
        },
        feather_density: LinguisticVariable::new(0.0, 1.0, [
            MembershipFunction::trapezoid(0.0, 0.0, 0.25, 0.5),
            MembershipFunction::trapezoid(0.2, 0.5, 0.7, 0.7),
            MembershipFunction::trapezoid(0.5, 0.75, 1.0, 1.0),
        ]),
        temperature: LinguisticVariable::new(0.0, 50.0, [
            MembershipFunction::trapezoid(0.0, 0.0, 18.0, 24.0),
            MembershipFunction::trapezoid(16.0, 21.0, 24.0, 24.0),
            MembershipFunction::trapezoid(21.0, 30.0, 50.0, 50.0),
        ]),
        humidity: LinguisticVariable::new(0.0, 100.0, [
            MembershipFunction::trapezoid(0.0, 0.0, 40.0, 60.0),
            MembershipFunction::trapezoid(45.0, 60.0, 70.0, 70.0),
            MembershipFunction::trapezoid(65.0, 85.0, 100.0, 100.0),
        ]),
        consequents: [
            Consequent::new(90.0, 10.0),
            Consequent::new(70.0, 15.0),
            Consequent::new(55.0, 15.0),
            Consequent::new(65.0, 15.0),
            Consequent::new(50.0, 15.0),
            Consequent::new(45.0, 15.0),
            Consequent::new(25.0, 15.0),
            Consequent::new(40.0, 15.0),
            Consequent::new(20.0, 15.0),
            Consequent::new(95.0, 5.0),
            Consequent::new(35.0, 10.0),
            Consequent::new(30.0, 10.0),
            Consequent::new(20.0, 10.0),
        ],
    };

    #[must_use]
    pub fn consequent(&self, rule: RuleId) -> &Consequent {
        &self.consequents[rule.index()]
    }

    /// Reads a knowledge base from a TOML or JSON file and validates it.
    ///
    /// # Errors
    /// [`FertilityError::Config`] if the file cannot be read or parsed,
    /// [`FertilityError::InvalidKnowledgeBase`] if the table is inconsistent.
    pub fn load(path: impl AsRef<Path>) -> FertilityResult<Self> {
        let path = path.as_ref();
        let kb: Self = fhub_kernel::config::load_file(path)
            .context(format!("Loading knowledge base {}", path.display()))?;
        kb.validate().context(format!("Validating {}", path.display()))?;
        Ok(kb)
    }

    /// Checks the structural invariants every table must satisfy.
    ///
    /// # Errors
    /// [`FertilityError::InvalidKnowledgeBase`] describing the first violation found.
    pub fn validate(&self) -> FertilityResult<()> {
        validate_variable("feather_density", &self.feather_density)?;
        validate_variable("temperature", &self.temperature)?;
        validate_variable("humidity", &self.humidity)?;
        self.validate_normalization()?;

        for rule in RuleId::iter() {
            let consequent = self.consequent(rule);
            let valid = consequent.width.is_finite()
                && consequent.width > 0.0
                && (OUTPUT_MIN..=OUTPUT_MAX).contains(&consequent.center);
            if !valid {
                return Err(FertilityError::invalid_knowledge_base(format!(
                    "consequent of {rule} needs a positive width and a center within [0, 100], got \
                     center {} width {}",
                    consequent.center, consequent.width
                )));
            }
        }

        if !(self.heat_stress_threshold > 0.0 && self.heat_stress_threshold <= 1.0) {
            return Err(FertilityError::invalid_knowledge_base(format!(
                "heat_stress_threshold must lie within (0, 1], got {}",
                self.heat_stress_threshold
            )));
        }

        let LevelThresholds { medium, high } = self.levels;
        if !(OUTPUT_MIN <= medium && medium <= high && high <= OUTPUT_MAX) {
            return Err(FertilityError::invalid_knowledge_base(format!(
                "level thresholds must satisfy 0 <= medium <= high <= 100, got {medium} and {high}"
            )));
        }

        Ok(())
    }

    fn validate_normalization(&self) -> FertilityResult<()> {
        let n = &self.normalization;
        let FeatherDensityScores { low, high } = n.feather_density;
        if !((0.0..=1.0).contains(&low) && (0.0..=1.0).contains(&high)) {
            return Err(FertilityError::invalid_knowledge_base(format!(
                "feather density scores must lie within [0, 1], got {low} and {high}"
            )));
        }

        validate_curve("temperature", &n.temperature)?;
        validate_curve("humidity", &n.humidity)?;

        let TciWeights { temperature, humidity } = n.tci_weights;
        let valid = temperature.is_finite()
            && humidity.is_finite()
            && temperature >= 0.0
            && humidity >= 0.0
            && ((temperature + humidity) - 1.0).abs() <= 1e-9;
        if !valid {
            return Err(FertilityError::invalid_knowledge_base(format!(
                "TCI weights must be non-negative and sum to 1, got {temperature} and {humidity}"
            )));
        }
        Ok(())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::V1
    }
}

fn validate_variable<T: Term>(name: &str, variable: &LinguisticVariable<T>) -> FertilityResult<()> {
    if !(variable.min.is_finite() && variable.max.is_finite() && variable.min < variable.max) {
        return Err(FertilityError::invalid_knowledge_base(format!(
            "{name} domain must be finite with min < max, got [{}, {}]",
            variable.min, variable.max
        )));
    }

    for term in T::iter() {
        let mf = variable.function(term);
        if !mf.is_well_formed() {
            return Err(FertilityError::invalid_knowledge_base(format!(
                "{name}.{} breakpoints must be finite and ordered, got {mf:?}",
                term.name()
            )));
        }
    }

    let span = variable.max - variable.min;
    for step in 0..=COVERAGE_STEPS {
        let x = if step == COVERAGE_STEPS {
            variable.max
        } else {
            variable.min + span * f64::from(step) / f64::from(COVERAGE_STEPS)
        };
        if !variable.fuzzify(x).is_covered() {
            return Err(FertilityError::invalid_knowledge_base(format!(
                "{name} has no term with positive membership at {x}"
            )));
        }
    }
    Ok(())
}

fn validate_curve(name: &str, curve: &StressCurve) -> FertilityResult<()> {
    let values = [
        curve.comfort_low,
        curve.comfort_high,
        curve.baseline,
        curve.below_span,
        curve.below_gain,
        curve.above_span,
        curve.above_gain,
    ];
    let valid = values.iter().all(|v| v.is_finite())
        && curve.comfort_low <= curve.comfort_high
        && (0.0..=1.0).contains(&curve.baseline)
        && curve.below_span > 0.0
        && curve.above_span > 0.0
        && curve.below_gain >= 0.0
        && curve.above_gain >= 0.0;

    if valid {
        Ok(())
    } else {
        Err(FertilityError::invalid_knowledge_base(format!(
            "{name} stress curve is inconsistent: {curve:?}"
        )))
    }
}
