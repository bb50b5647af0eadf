//! CLI contract tests.
//!
//! Startup validation must reject bad invocations before any timer starts
//! or any file is touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mira() -> Command {
    Command::cargo_bin("mira").expect("mira binary should build")
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    mira()
        .arg("only-one-arg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_non_integer_interval_is_rejected() {
    let src = TempDir::new().expect("create src tempdir");
    let rep = TempDir::new().expect("create rep tempdir");
    let log = TempDir::new().expect("create log tempdir");
    let log_path = log.path().join("sync.log");

    mira()
        .arg(src.path())
        .arg(rep.path())
        .arg("abc")
        .arg(&log_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("should be an integer value"));

    assert!(!log_path.exists(), "no files may be touched on a bad interval");
}

#[test]
fn test_zero_interval_is_rejected() {
    let src = TempDir::new().expect("create src tempdir");
    let rep = TempDir::new().expect("create rep tempdir");
    let log = TempDir::new().expect("create log tempdir");

    mira()
        .arg(src.path())
        .arg(rep.path())
        .arg("0")
        .arg(log.path().join("sync.log"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn test_missing_source_is_rejected() {
    let rep = TempDir::new().expect("create rep tempdir");
    let log = TempDir::new().expect("create log tempdir");
    let log_path = log.path().join("sync.log");

    mira()
        .arg("/definitely/not/a/real/source")
        .arg(rep.path())
        .arg("30")
        .arg(&log_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source path does not exist"));

    assert!(!log_path.exists(), "no log is written on startup failure");
}

#[test]
fn test_source_equal_to_replica_is_rejected() {
    let src = TempDir::new().expect("create src tempdir");
    let log = TempDir::new().expect("create log tempdir");

    mira()
        .arg(src.path())
        .arg(src.path())
        .arg("30")
        .arg(log.path().join("sync.log"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be the same"));
}
