use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

#[allow(deprecated)]
fn get_lostfound_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("lostfound")
}

fn lostfound(data_file: &Path) -> Command {
    let mut cmd = Command::new(get_lostfound_bin());
    cmd.arg("--data-file").arg(data_file);
    cmd
}

fn report(data_file: &Path, name: &str, reporter: &str) -> Command {
    let mut cmd = lostfound(data_file);
    cmd.args(["report", "--name", name, "--category", "Books"])
        .args(["--location", "Library", "--reporter", reporter]);
    cmd
}

#[test]
fn test_points_leaderboard() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("ledger.json");

    report(&data_file, "Novel", "Carol").assert().success();
    report(&data_file, "Atlas", "Bob").assert().success();
    report(&data_file, "Notebook", "Bob").assert().success();

    lostfound(&data_file)
        .args(["--format", "table", "points"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Reporter,Points\nBob,20\nCarol,10\n"));
}

#[test]
fn test_points_for_single_reporter() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("ledger.json");

    report(&data_file, "Novel", "Alice").assert().success();
    report(&data_file, "Atlas", "Alice").assert().success();

    let output = lostfound(&data_file)
        .args(["--format", "json", "points", "Alice"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["reporter"], "Alice");
    assert_eq!(json[0]["points"], 20);
}

#[test]
fn test_unknown_reporter_has_zero_points() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("ledger.json");

    lostfound(&data_file)
        .args(["--format", "table", "points", "Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nobody,0"));
}

#[test]
fn test_reporter_names_are_exact_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("ledger.json");

    report(&data_file, "Novel", "Alice").assert().success();
    report(&data_file, "Atlas", "alice").assert().success();

    lostfound(&data_file)
        .args(["--format", "table", "points"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice,10"))
        .stdout(predicate::str::contains("alice,10"));
}

#[test]
fn test_normalized_reporters_share_points() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("ledger.json");

    report(&data_file, "Novel", "Alice")
        .arg("--normalize-reporters")
        .assert()
        .success();
    report(&data_file, "Atlas", "ALICE")
        .env("LOSTFOUND_NORMALIZE_REPORTERS", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total points for ALICE: 20"));
}

#[test]
fn test_padded_reporter_name_reads_back_its_points() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("ledger.json");

    report(&data_file, "Novel", "Alice ")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total points for Alice : 10"));

    lostfound(&data_file)
        .args(["--format", "table", "points", "Alice "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice ,10"));
}
