use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/batch")
        .join(name)
}

fn radiocheck() -> Command {
    let mut cmd = Command::cargo_bin("radiocheck").unwrap();
    cmd.env_remove("RADIOCHECK_THRESHOLDS");
    cmd
}

#[test]
fn score_prints_human_report() {
    radiocheck()
        .args(["score", "--spoken", "ten four", "--expected", "10-4", "--category", "codes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 100/100 (excellent)"));
}

#[test]
fn score_emits_json_result() {
    radiocheck()
        .args([
            "score",
            "--spoken",
            "xyz",
            "--expected",
            "10-4",
            "--category",
            "codes",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"match\": false"))
        .stdout(predicate::str::contains("\"category\": \"poor\""));
}

#[test]
fn score_honours_threshold_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"tokenMatch": 60, "partialRecognition": 40}}"#).unwrap();

    radiocheck()
        .args(["score", "--spoken", "copy tht", "--expected", "copy that", "--json"])
        .arg("--thresholds")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 100"));
}

#[test]
fn score_rejects_missing_threshold_file() {
    radiocheck()
        .args(["score", "--spoken", "copy", "--expected", "copy"])
        .args(["--thresholds", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load scoring thresholds"));
}

#[test]
fn batch_prints_one_line_per_attempt() {
    let output = radiocheck()
        .arg("batch")
        .arg("--input")
        .arg(fixture_path("attempts.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["scenario"], "ack-traffic");
    assert_eq!(lines[0]["score"], 100);
    assert_eq!(lines[0]["likelyCorrect"], true);
    assert_eq!(lines[1]["category"], "excellent");
    assert_eq!(lines[2]["score"], 0);
    assert_eq!(lines[2]["likelyCorrect"], false);
    assert!(lines[3].get("scenario").is_none());
    assert_eq!(lines[3]["score"], 100);
}

#[test]
fn batch_rejects_empty_attempt_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"attempts": []}}"#).unwrap();

    radiocheck()
        .arg("batch")
        .arg("--input")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one attempt"));
}

#[test]
fn variants_lists_accepted_forms() {
    radiocheck()
        .args(["variants", "letter", "x"])
        .assert()
        .success()
        .stdout("x-ray\nxray\n");
    radiocheck()
        .args(["variants", "code", "10-42"])
        .assert()
        .success()
        .stdout("10-42\n");
}
