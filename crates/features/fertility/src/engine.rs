use crate::classifier::{classify, explain};
use crate::defuzzifier::centroid;
use crate::error::{FertilityErrorExt, FertilityResult};
use crate::fuzzifier::fuzzify;
use crate::knowledge::KnowledgeBase;
use crate::normalizer::{normalize, parse};
use crate::observer::{InferenceObserver, SilentObserver, TracingObserver};
use crate::round2;
use crate::rules::{RuleStrengths, evaluate_rules};
use fhub_domain::{FeatherDensity, FertilityLevel, FertilityQuery, InferenceInputs};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};

/// Outcome of one inference. Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    /// Centroid rounded to two decimals, within `[0, 100]`.
    pub fertility_score: f64,
    pub fertility_level: FertilityLevel,
    pub rule_strengths: RuleStrengths,
    pub inputs: InferenceInputs,
    pub explanation: String,
}

/// A cheap-to-clone inference engine over a validated knowledge base.
///
/// ```rust
/// use fhub_fertility::{FertilityEngine, FertilityQuery, SilentObserver};
///
/// let engine = FertilityEngine::builder().observer(SilentObserver).build()?;
/// let result = engine.infer(&FertilityQuery::new("HIGH", 21.0, None))?;
/// assert_eq!(result.fertility_level.as_str(), "HIGH");
/// # Ok::<(), fhub_fertility::FertilityError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FertilityEngine {
    inner: Arc<EngineInner>,
}

#[derive(Debug)]
struct EngineInner {
    kb: KnowledgeBase,
    observer: Arc<dyn InferenceObserver>,
}

impl FertilityEngine {
    #[must_use]
    pub fn builder() -> FertilityEngineBuilder {
        FertilityEngineBuilder::default()
    }

    fn from_parts(kb: KnowledgeBase, observer: Arc<dyn InferenceObserver>) -> Self {
        Self { inner: Arc::new(EngineInner { kb, observer }) }
    }

    #[must_use]
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.inner.kb
    }

    /// Runs the full pipeline on a raw query.
    ///
    /// # Errors
    /// [`crate::FertilityError::InvalidInput`] if the label or a reading is rejected.
    pub fn infer(&self, query: &FertilityQuery) -> FertilityResult<InferenceResult> {
        let inputs = parse(query).inspect_err(|e| self.inner.observer.rejected(e))?;
        self.infer_inputs(inputs)
    }

    /// Runs the full pipeline on typed inputs.
    ///
    /// # Errors
    /// [`crate::FertilityError::InvalidInput`] if a reading is rejected.
    pub fn infer_inputs(&self, inputs: InferenceInputs) -> FertilityResult<InferenceResult> {
        let EngineInner { kb, observer } = &*self.inner;

        let normalized =
            normalize(&kb.normalization, &inputs).inspect_err(|e| observer.rejected(e))?;
        observer.normalized(&normalized);

        let fuzzified = fuzzify(kb, &normalized);
        observer.fuzzified(&fuzzified);

        let rule_strengths = evaluate_rules(kb, &normalized, &fuzzified);
        observer.rules_evaluated(&rule_strengths);

        let score = centroid(kb, &rule_strengths);
        let level = classify(kb, score);
        let result = InferenceResult {
            fertility_score: round2(score),
            fertility_level: level,
            rule_strengths,
            inputs,
            explanation: explain(kb, &inputs, &normalized, level, score),
        };

        observer.concluded(&result);
        Ok(result)
    }

    /// Re-runs inference on the inputs recorded in an earlier result.
    ///
    /// # Errors
    /// [`crate::FertilityError::InvalidInput`] if the stored inputs are no longer acceptable.
    pub fn recompute(&self, previous: &InferenceResult) -> FertilityResult<InferenceResult> {
        self.infer_inputs(previous.inputs).context("Recomputing stored result")
    }
}

impl Default for FertilityEngine {
    fn default() -> Self {
        Self::from_parts(KnowledgeBase::V1, Arc::new(TracingObserver))
    }
}

#[derive(Debug, Default)]
pub struct FertilityEngineBuilder {
    knowledge_base: Option<KnowledgeBase>,
    observer: Option<Arc<dyn InferenceObserver>>,
}

impl FertilityEngineBuilder {
    /// Replaces the compiled-in [`KnowledgeBase::V1`].
    #[must_use]
    pub const fn knowledge_base(mut self, kb: KnowledgeBase) -> Self {
        self.knowledge_base = Some(kb);
        self
    }

    /// Replaces the default [`TracingObserver`].
    #[must_use]
    pub fn observer(mut self, observer: impl InferenceObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Validates the knowledge base and builds the engine.
    ///
    /// # Errors
    /// [`crate::FertilityError::InvalidKnowledgeBase`] if the table is inconsistent.
    pub fn build(self) -> FertilityResult<FertilityEngine> {
        let kb = self.knowledge_base.unwrap_or(KnowledgeBase::V1);
        kb.validate().context("Building fertility engine")?;

        let observer = self.observer.unwrap_or_else(|| Arc::new(TracingObserver));
        Ok(FertilityEngine::from_parts(kb, observer))
    }
}

static DEFAULT_ENGINE: LazyLock<FertilityEngine> =
    LazyLock::new(|| FertilityEngine::from_parts(KnowledgeBase::V1, Arc::new(SilentObserver)));

/// One-shot inference over the compiled-in knowledge base without any logging.
///
/// # Errors
/// [`crate::FertilityError::InvalidInput`] if the label or a reading is rejected.
pub fn infer_fertility(
    feather_density: &str,
    temperature: f64,
    humidity: Option<f64>,
) -> FertilityResult<InferenceResult> {
    DEFAULT_ENGINE.infer(&FertilityQuery::new(feather_density, temperature, humidity))
}

impl InferenceResult {
    #[must_use]
    pub const fn feather_density(&self) -> FeatherDensity {
        self.inputs.feather_density
    }
}
