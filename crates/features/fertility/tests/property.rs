use fhub_fertility::fuzzifier::{FeatherTerm, TemperatureTerm};
use fhub_fertility::membership::evaluate;
use fhub_fertility::{FertilityLevel, KnowledgeBase, RuleId, infer_fertility};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn label() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("LOW"), Just("HIGH")]
}

fn humidity() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(0.0..=100.0_f64)
}

proptest! {
    #[test]
    fn score_and_strengths_stay_in_range(
        label in label(),
        temperature in -40.0..80.0_f64,
        humidity in humidity(),
    ) {
        let result = infer_fertility(label, temperature, humidity).unwrap();
        prop_assert!((0.0..=100.0).contains(&result.fertility_score));
        for (_, strength) in result.rule_strengths.iter() {
            prop_assert!(strength > 0.0 && strength <= 1.0);
        }

        let expected = match result.fertility_score {
            s if s < 40.0 => FertilityLevel::Low,
            s if s < 70.0 => FertilityLevel::Medium,
            _ => FertilityLevel::High,
        };
        // Levels come from the unrounded score, so only check away from the thresholds.
        if (result.fertility_score - 40.0).abs() > 0.01 && (result.fertility_score - 70.0).abs() > 0.01 {
            prop_assert_eq!(result.fertility_level, expected);
        }
    }

    #[test]
    fn inference_is_deterministic(
        label in label(),
        temperature in -40.0..80.0_f64,
        humidity in humidity(),
    ) {
        let first = infer_fertility(label, temperature, humidity).unwrap();
        let second = infer_fertility(label, temperature, humidity).unwrap();
        prop_assert_eq!(first.fertility_score.to_bits(), second.fertility_score.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_dead_zone_on_closed_domains(fds in 0.0..=1.0_f64, temperature in 0.0..=50.0_f64) {
        let kb = KnowledgeBase::V1;
        prop_assert!(FeatherTerm::iter().any(|t| kb.feather_density.degree(t, fds) > 0.0));
        prop_assert!(TemperatureTerm::iter().any(|t| kb.temperature.degree(t, temperature) > 0.0));
    }

    #[test]
    fn heat_stress_rule_reports_tci(
        label in label(),
        temperature in -40.0..80.0_f64,
        humidity in humidity(),
    ) {
        let kb = KnowledgeBase::V1;
        let tci = kb.normalization.thermal_comfort_index(temperature, humidity);
        let result = infer_fertility(label, temperature, humidity).unwrap();

        if tci >= kb.heat_stress_threshold {
            prop_assert_eq!(result.rule_strengths.get(RuleId::HighHeatStress), Some(tci));
        } else {
            prop_assert!(!result.rule_strengths.contains(RuleId::HighHeatStress));
        }
    }

    #[test]
    fn humidity_rules_only_with_a_reading(label in label(), temperature in -40.0..80.0_f64) {
        let result = infer_fertility(label, temperature, None).unwrap();
        for rule in [RuleId::PerfectConditions, RuleId::LowHumidityStress, RuleId::HighHumidityStress] {
            prop_assert!(!result.rule_strengths.contains(rule));
        }
    }

    #[test]
    fn membership_is_bounded(
        x in -10.0..110.0_f64,
        mut points in prop::array::uniform4(0.0..100.0_f64),
        omit_end in any::<bool>(),
    ) {
        points.sort_by(f64::total_cmp);
        let [a, b, c, d] = points;
        let degree = evaluate(x, a, b, c, (!omit_end).then_some(d));
        prop_assert!((0.0..=1.0).contains(&degree));
    }
}

#[test]
fn every_rule_can_fire() {
    let queries = [
        ("HIGH", 21.0, Some(60.0)),
        ("HIGH", 5.0, Some(30.0)),
        ("HIGH", 45.0, Some(95.0)),
        ("LOW", 21.0, None),
        ("LOW", 10.0, None),
        ("LOW", 35.0, None),
    ];
    let fired: Vec<RuleId> = queries
        .iter()
        .flat_map(|&(label, t, h)| {
            let result = infer_fertility(label, t, h).unwrap();
            result.rule_strengths.iter().map(|(rule, _)| rule).collect::<Vec<_>>()
        })
        .collect();

    for rule in RuleId::iter() {
        assert!(fired.contains(&rule), "{rule} never fired");
    }
}
