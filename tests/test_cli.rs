use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_genes_lists_registry() {
    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("genes")
        .assert()
        .success()
        .stdout(predicate::str::contains("fur"))
        .stdout(predicate::str::contains("ears"))
        .stdout(predicate::str::contains("teeth"))
        .stdout(predicate::str::contains("brown fur"));
}

#[test]
fn test_seed_bare_count() {
    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("seed")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("10 individuals"))
        .stdout(predicate::str::contains("Total: 10 individuals"));
}

#[test]
fn test_seed_with_mutations() {
    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("seed")
        .arg("--mutations")
        .arg("F")
        .arg("5FF")
        .arg("3Ff")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 8 individuals"));
}

#[test]
fn test_seed_json_output() {
    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("seed")
        .arg("--format")
        .arg("json")
        .arg("--mutations")
        .arg("F")
        .arg("5Ff")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 5"));
}

#[test]
fn test_seed_invalid_spec_fails() {
    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("seed")
        .arg("--mutations")
        .arg("FE")
        .arg("10FEfe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_seed_over_limit_fails() {
    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("seed")
        .arg("800")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_run_prints_tallies() {
    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("run")
        .arg("--generations")
        .arg("2")
        .arg("--seed")
        .arg("42")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running Simulation"))
        .stdout(predicate::str::contains("Simulation complete!"))
        .stdout(predicate::str::contains("Final generation: 2"));
}

#[test]
fn test_run_json_history() {
    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("run")
        .arg("--format")
        .arg("json")
        .arg("--generations")
        .arg("1")
        .arg("--seed")
        .arg("42")
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 4"))
        .stdout(predicate::str::contains("\"mutant_fur\": 0"));
}

#[test]
fn test_run_json_to_file() {
    let temp = tempdir().unwrap();
    let out_path = temp.path().join("history.json");

    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("run")
        .arg("--format")
        .arg("json")
        .arg("--generations")
        .arg("1")
        .arg("--seed")
        .arg("42")
        .arg("--output")
        .arg(&out_path)
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data exported to"));

    let content = std::fs::read_to_string(&out_path).unwrap();
    assert!(content.contains("\"total\": 4"));
}

#[test]
fn test_run_unknown_format_fails() {
    let mut cmd = Command::cargo_bin("mendevo").unwrap();
    cmd.arg("run")
        .arg("--format")
        .arg("xml")
        .arg("4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}
