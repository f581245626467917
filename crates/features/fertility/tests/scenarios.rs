use fhub_fertility::defuzzifier::{NEUTRAL_SCORE, centroid};
use fhub_fertility::fuzzifier::{FeatherTerm, HumidityTerm, TemperatureTerm};
use fhub_fertility::{
    FertilityEngine, FertilityError, FertilityLevel, FertilityQuery, KnowledgeBase, RuleId,
    RuleStrengths, SilentObserver, infer_fertility,
};

fn engine() -> FertilityEngine {
    FertilityEngine::builder().observer(SilentObserver).build().expect("default engine")
}

#[test]
fn high_density_at_optimal_temperature() {
    let kb = KnowledgeBase::V1;
    assert_eq!(kb.feather_density.degree(FeatherTerm::High, 0.75), 1.0);
    assert_eq!(kb.temperature.degree(TemperatureTerm::Optimal, 21.0), 1.0);

    let result = engine().infer(&FertilityQuery::new("HIGH", 21.0, None)).unwrap();
    assert_eq!(result.rule_strengths.get(RuleId::HighFeatherOptimalTemp), Some(1.0));
    assert_eq!(result.rule_strengths.get(RuleId::HighFeatherColdTemp), Some(0.5));
    assert_eq!(result.rule_strengths.len(), 2);
    assert_eq!(result.fertility_level, FertilityLevel::High);
    assert!((80.0..=95.0).contains(&result.fertility_score));
    assert_eq!(result.fertility_score, 82.34);
}

#[test]
fn low_density_in_heat() {
    let result = engine().infer(&FertilityQuery::new("LOW", 35.0, None)).unwrap();
    assert_eq!(result.rule_strengths.get(RuleId::LowFeatherHotTemp), Some(1.0));
    let dominant = result
        .rule_strengths
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(rule, _)| rule);
    assert_eq!(dominant, Some(RuleId::LowFeatherHotTemp));
    assert_eq!(result.fertility_level, FertilityLevel::Low);
    assert!(result.fertility_score < 40.0);
    assert_eq!(result.fertility_score, 26.89);
}

#[test]
fn perfect_conditions_with_humidity() {
    let result = engine().infer(&FertilityQuery::new("HIGH", 22.0, Some(60.0))).unwrap();
    let strengths = &result.rule_strengths;
    assert!(strengths.contains(RuleId::PerfectConditions));
    assert!(strengths.contains(RuleId::HighFeatherOptimalTemp));
    assert_eq!(strengths.get(RuleId::PerfectConditions), Some(1.0));
    assert_eq!(result.fertility_level, FertilityLevel::High);
    assert!(result.fertility_score >= 80.0);
    assert_eq!(result.fertility_score, 81.52);
}

#[test]
fn optimal_terms_plateau_across_the_comfort_band() {
    let kb = KnowledgeBase::V1;
    for t in [21.0, 22.0, 23.0, 23.9] {
        assert_eq!(kb.temperature.degree(TemperatureTerm::Optimal, t), 1.0, "{t}");
    }
    assert_eq!(kb.temperature.degree(TemperatureTerm::Optimal, 24.0), 0.0);
    assert_eq!(kb.temperature.degree(TemperatureTerm::Optimal, 18.5), 0.5);

    for h in [60.0, 65.0, 69.5] {
        assert_eq!(kb.humidity.degree(HumidityTerm::Optimal, h), 1.0, "{h}");
    }
    assert_eq!(kb.humidity.degree(HumidityTerm::Optimal, 70.0), 0.0);

    let result = engine().infer(&FertilityQuery::new("HIGH", 23.0, Some(65.0))).unwrap();
    assert_eq!(result.rule_strengths.get(RuleId::PerfectConditions), Some(1.0));
    assert_eq!(result.rule_strengths.get(RuleId::HighFeatherOptimalTemp), Some(1.0));
    assert_eq!(result.fertility_level, FertilityLevel::High);
}

#[test]
fn heat_stress_pulls_score_down() {
    let engine = engine();
    let baseline = engine.infer(&FertilityQuery::new("HIGH", 21.0, None)).unwrap();
    let stressed = engine.infer(&FertilityQuery::new("HIGH", 45.0, Some(95.0))).unwrap();

    let tci = KnowledgeBase::V1.normalization.thermal_comfort_index(45.0, Some(95.0));
    assert!(tci >= 0.8);
    assert_eq!(stressed.rule_strengths.get(RuleId::HighHeatStress), Some(tci));
    assert!(stressed.fertility_score < baseline.fertility_score);
    assert_eq!(stressed.fertility_score, 42.31);
    assert_eq!(stressed.fertility_level, FertilityLevel::Medium);
    assert!(stressed.explanation.contains("High heat stress detected"));
}

#[test]
fn empty_rule_set_falls_back_to_neutral() {
    let kb = KnowledgeBase::V1;
    let score = centroid(&kb, &RuleStrengths::empty());
    assert_eq!(score, NEUTRAL_SCORE);
    assert_eq!(kb.levels.level(score), FertilityLevel::Medium);
}

#[test]
fn invalid_inputs_fail_verbatim() {
    let engine = engine();

    let err = engine.infer(&FertilityQuery::new("SPARSE", 21.0, None)).unwrap_err();
    assert!(matches!(err, FertilityError::InvalidInput { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid input: unrecognized feather density label 'SPARSE', expected LOW or HIGH"
    );

    let err = engine.infer(&FertilityQuery::new("HIGH", 21.0, Some(101.0))).unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: humidity must lie within [0, 100], got 101");

    let err = infer_fertility("LOW", f64::NAN, None).unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: temperature must be a finite number, got NaN");
}

#[test]
fn boundary_humidity_is_accepted() {
    let engine = engine();
    for humidity in [0.0, 100.0] {
        let result = engine.infer(&FertilityQuery::new("HIGH", 21.0, Some(humidity))).unwrap();
        assert_eq!(result.inputs.humidity, Some(humidity));
    }
}

#[test]
fn result_serializes_to_the_wire_contract() {
    let result = infer_fertility("HIGH", 21.0, None).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["fertilityScore"], 82.34);
    assert_eq!(json["fertilityLevel"], "HIGH");
    assert_eq!(json["ruleStrengths"]["rule1_high_feather_optimal_temp"], 1.0);
    assert_eq!(json["ruleStrengths"]["rule2_high_feather_cold_temp"], 0.5);
    assert_eq!(json["ruleStrengths"].as_object().map(serde_json::Map::len), Some(2));
    assert_eq!(json["inputs"], serde_json::json!({ "featherDensity": "HIGH", "temperature": 21.0 }));
    assert!(
        json["explanation"]
            .as_str()
            .is_some_and(|text| text.starts_with("Fertility prediction: HIGH (82.3% likelihood)."))
    );

    let back: fhub_fertility::InferenceResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn knowledge_base_dump_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.toml");
    std::fs::write(&path, toml::to_string(&KnowledgeBase::V1).unwrap()).unwrap();

    let kb = KnowledgeBase::load(&path).unwrap();
    let engine = FertilityEngine::builder().knowledge_base(kb).observer(SilentObserver).build().unwrap();
    let result = engine.infer(&FertilityQuery::new("HIGH", 22.0, Some(60.0))).unwrap();
    assert_eq!(result, infer_fertility("HIGH", 22.0, Some(60.0)).unwrap());
}
