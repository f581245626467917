use fhub_domain::constants::{HIGH, LOW, MEDIUM};
use fhub_domain::{FeatherDensity, FertilityLevel, FertilityQuery, InferenceInputs};
use serde_json::json;

#[test]
fn constants_match_wire_labels() {
    assert_eq!(LOW, "LOW");
    assert_eq!(MEDIUM, "MEDIUM");
    assert_eq!(HIGH, "HIGH");
}

#[test]
fn query_uses_camel_case_and_optional_humidity() {
    let query: FertilityQuery =
        serde_json::from_value(json!({ "featherDensity": "HIGH", "temperature": 21.0 }))
            .expect("query deserialize");
    assert_eq!(query, FertilityQuery::new("HIGH", 21.0, None));

    let value = serde_json::to_value(FertilityQuery::new("LOW", 35.0, Some(55.5))).expect("json");
    assert_eq!(value, json!({ "featherDensity": "LOW", "temperature": 35.0, "humidity": 55.5 }));
}

#[test]
fn inputs_serialize_label_and_skip_missing_humidity() {
    let inputs =
        InferenceInputs { feather_density: FeatherDensity::High, temperature: 21.0, humidity: None };
    let value = serde_json::to_value(inputs).expect("json");
    assert_eq!(value, json!({ "featherDensity": "HIGH", "temperature": 21.0 }));

    let parsed: InferenceInputs =
        serde_json::from_value(json!({ "featherDensity": "low", "temperature": 5.0, "humidity": 0.0 }))
            .expect("lenient label");
    assert_eq!(parsed.feather_density, FeatherDensity::Low);
    assert_eq!(parsed.humidity, Some(0.0));

    let err = serde_json::from_value::<InferenceInputs>(
        json!({ "featherDensity": "MEDIUM", "temperature": 5.0 }),
    );
    assert!(err.is_err());
}

#[test]
fn levels_serialize_uppercase() {
    let value = serde_json::to_value(FertilityLevel::ALL).expect("json");
    assert_eq!(value, json!(["LOW", "MEDIUM", "HIGH"]));
    assert_eq!(FertilityQuery::from(InferenceInputs {
        feather_density: FeatherDensity::Low,
        temperature: 30.0,
        humidity: Some(40.0),
    }), FertilityQuery::new("LOW", 30.0, Some(40.0)));
}
