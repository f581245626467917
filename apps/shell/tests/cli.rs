use assert_cmd::Command;
use predicates::prelude::*;

fn fhub() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fhub"));
    cmd.env("FHUB__LOGGING__LEVEL", "warn");
    cmd
}

#[test]
fn infer_prints_result_json() {
    let output = fhub()
        .args(["infer", "--feather-density", "HIGH", "--temperature", "21"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["fertilityScore"], 82.34);
    assert_eq!(json["fertilityLevel"], "HIGH");
    assert_eq!(json["inputs"]["featherDensity"], "HIGH");
}

#[test]
fn infer_accepts_negative_temperature_and_humidity() {
    fhub()
        .args(["infer", "-f", "low", "-t", "-5", "--humidity", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""fertilityLevel":"LOW""#));
}

#[test]
fn invalid_label_fails_with_message() {
    fhub()
        .args(["infer", "--feather-density", "SPARSE", "--temperature", "21"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "unrecognized feather density label 'SPARSE', expected LOW or HIGH",
        ));
}

#[test]
fn humidity_out_of_range_fails() {
    fhub()
        .args(["infer", "-f", "HIGH", "-t", "21", "--humidity", "120"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("humidity must lie within [0, 100], got 120"));
}

#[test]
fn batch_prints_results_and_analytics() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("queries.json");
    std::fs::write(
        &file,
        r#"[
            { "featherDensity": "HIGH", "temperature": 21 },
            { "featherDensity": "HIGH", "temperature": 22, "humidity": 60 },
            { "featherDensity": "LOW", "temperature": 35 }
        ]"#,
    )
    .unwrap();

    let output = fhub().arg("batch").arg(&file).assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["results"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["results"][2]["fertilityScore"], 26.89);
    assert_eq!(json["analytics"]["totalRecords"], 3);
    assert_eq!(json["analytics"]["featherDensityDistribution"]["HIGH"], 2);
    assert_eq!(json["analytics"]["fertilityLevelDistribution"]["LOW"], 1);
}

#[test]
fn knowledge_base_override_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let kb = dir.path().join("kb.toml");

    let dumped = fhub().arg("knowledge-base").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(dumped).unwrap();
    assert!(text.starts_with("version = 1"));
    std::fs::write(&kb, text.replacen("version = 1", "version = 7", 1)).unwrap();

    fhub()
        .arg("--knowledge-base")
        .arg(&kb)
        .arg("knowledge-base")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("version = 7"));
}

#[test]
fn missing_knowledge_base_fails() {
    let dir = tempfile::tempdir().unwrap();
    fhub()
        .arg("--knowledge-base")
        .arg(dir.path().join("absent.toml"))
        .arg("knowledge-base")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fhub.toml");
    std::fs::write(&config, "[logging]\nlevel = \"loud\"\n").unwrap();

    fhub()
        .env_remove("FHUB__LOGGING__LEVEL")
        .arg("--config")
        .arg(&config)
        .arg("knowledge-base")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level 'loud'"));
}
