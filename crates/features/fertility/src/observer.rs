//! Read-only hooks into the inference pipeline.

use crate::error::FertilityError;
use crate::fuzzifier::Fuzzified;
use crate::normalizer::Normalized;
use crate::rules::RuleStrengths;
use crate::InferenceResult;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Receives every intermediate stage of an inference. All hooks default to no-ops.
pub trait InferenceObserver: Send + Sync + std::fmt::Debug {
    fn normalized(&self, _normalized: &Normalized) {}

    fn fuzzified(&self, _fuzzified: &Fuzzified) {}

    fn rules_evaluated(&self, _strengths: &RuleStrengths) {}

    fn concluded(&self, _result: &InferenceResult) {}

    fn rejected(&self, _error: &FertilityError) {}
}

impl<O: InferenceObserver + ?Sized> InferenceObserver for Arc<O> {
    fn normalized(&self, normalized: &Normalized) {
        (**self).normalized(normalized);
    }

    fn fuzzified(&self, fuzzified: &Fuzzified) {
        (**self).fuzzified(fuzzified);
    }

    fn rules_evaluated(&self, strengths: &RuleStrengths) {
        (**self).rules_evaluated(strengths);
    }

    fn concluded(&self, result: &InferenceResult) {
        (**self).concluded(result);
    }

    fn rejected(&self, error: &FertilityError) {
        (**self).rejected(error);
    }
}

/// Emits the pipeline trace as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl InferenceObserver for TracingObserver {
    fn normalized(&self, normalized: &Normalized) {
        debug!(
            fds = normalized.fds,
            tci = normalized.tci,
            temperature = normalized.temperature,
            humidity = ?normalized.humidity,
            "Inputs normalized"
        );
    }

    fn fuzzified(&self, fuzzified: &Fuzzified) {
        debug!(
            feather_density = ?fuzzified.feather_density,
            temperature = ?fuzzified.temperature,
            humidity = ?fuzzified.humidity,
            "Inputs fuzzified"
        );
    }

    fn rules_evaluated(&self, strengths: &RuleStrengths) {
        debug!(fired = strengths.len(), rules = ?strengths.active_ids(), "Rules evaluated");
    }

    fn concluded(&self, result: &InferenceResult) {
        info!(
            score = result.fertility_score,
            level = %result.fertility_level,
            feather_density = %result.inputs.feather_density,
            "Fertility inferred"
        );
    }

    fn rejected(&self, error: &FertilityError) {
        warn!(%error, "Fertility inference rejected");
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl InferenceObserver for SilentObserver {}
