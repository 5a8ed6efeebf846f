use assert_cmd::Command;
use predicates::prelude::*;

fn write_dataset(dir: &std::path::Path) -> std::path::PathBuf {
    let dataset = dir.join("dataset.csv");
    std::fs::write(
        &dataset,
        "question,sql\n\
         \"how many employees are there?\",\"SELECT COUNT(*) FROM employees\"\n\
         \"list engineering managers\",\"SELECT name FROM employees WHERE dept='Engineering'\"\n",
    )
    .unwrap();
    dataset
}

#[test]
fn fake_provider_writes_results_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(dir.path());
    let out = dir.path().join("results.json");

    Command::cargo_bin("sqlbench")
        .unwrap()
        .args(["run", "--provider", "fake", "--scoring", "exact"])
        .arg("--dataset")
        .arg(&dataset)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["suite"], "core");
    assert_eq!(v["results"].as_array().unwrap().len(), 4);
    assert_eq!(v["summary"]["baseline"]["total"], 2);
    assert_eq!(v["summary"]["improved"]["total"], 2);
}

#[test]
fn missing_api_key_fails_fast_with_config_error() {
    Command::cargo_bin("sqlbench")
        .unwrap()
        .env_remove("OPENAI_API_KEY")
        .args(["run", "--dataset", "no-such-dataset.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn malformed_dataset_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("dataset.csv");
    std::fs::write(&dataset, "question\nhow many employees are there?\n").unwrap();

    Command::cargo_bin("sqlbench")
        .unwrap()
        .args(["run", "--provider", "fake"])
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("dataset format error"));
}

#[test]
fn unknown_scoring_mode_is_a_config_error() {
    Command::cargo_bin("sqlbench")
        .unwrap()
        .args(["run", "--provider", "fake", "--scoring", "fuzzy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown scoring mode"));
}

#[test]
fn run_expanded_consumes_the_expanded_format() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("dataset-expanded.csv");
    std::fs::write(
        &dataset,
        "original-question,alternative-question,sql\n\
         \"how many employees are there?\",\"what's the headcount?\",\"SELECT COUNT(*) FROM employees\"\n",
    )
    .unwrap();
    let out = dir.path().join("results_expanded.json");

    Command::cargo_bin("sqlbench")
        .unwrap()
        .args(["run-expanded", "--provider", "fake"])
        .arg("--dataset")
        .arg(&dataset)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["suite"], "expanded");
    assert_eq!(v["results"][0]["question"], "what's the headcount?");
}
