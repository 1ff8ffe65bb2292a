#[cfg(test)]
extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use std::io::Write;
use std::process::Command;

fn cutils() -> Command {
    Command::cargo_bin("cutils").expect("Calling binary failed")
}

#[test]
fn test_cli() {
    let mut cmd = cutils();
    cmd.assert().failure();
}

#[test]
fn test_version() {
    let expected_version = "cutils 0.1.0\n";
    let mut cmd = cutils();
    cmd.arg("--version").assert().stdout(expected_version);
}

#[test]
fn test_factors() {
    cutils()
        .args(["factors", "36"])
        .assert()
        .success()
        .stdout("1 2 3 4 6 9 12 18 36\n");
}

#[test]
fn test_factors_json() {
    cutils()
        .args(["factors", "12", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6").and(predicate::str::starts_with("[")));
}

#[test]
fn test_chunk() {
    cutils()
        .args(["chunk", "--size", "2", "a", "b", "c", "d", "e"])
        .assert()
        .success()
        .stdout("a b\nc d\ne\n");
}

#[test]
fn test_chunk_rejects_zero_size() {
    cutils()
        .args(["chunk", "--size", "0", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk size must be a positive integer"));
}

#[test]
fn test_split() {
    cutils()
        .args(["split", "--parts", "3", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout("1 2\n3 4\n5\n");
}

#[test]
fn test_unique_and_contains() {
    cutils()
        .args(["unique", "b", "a", "b", "c", "a"])
        .assert()
        .success()
        .stdout("b a c\n");

    cutils()
        .args(["contains", "--query", "x,c", "a", "b", "c"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_last_index() {
    cutils()
        .args(["last-index", "--target", "a", "a", "b", "a"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_flatten() {
    cutils()
        .args(["flatten", r#"[1, ["two", [3.5, null]], []]"#])
        .assert()
        .success()
        .stdout("1 two 3.5 null\n");
}

#[test]
fn test_strip_and_clamp() {
    cutils()
        .args(["strip", " a\tb\u{200B} c "])
        .assert()
        .success()
        .stdout("abc\n");

    cutils()
        .args(["clamp", "-5", "--low", "0", "--high", "10"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_duration() {
    cutils()
        .args(["duration", "3723"])
        .assert()
        .success()
        .stdout("1.0 hours, 2.0 minutes, and 3.00 seconds\n");
}

#[test]
fn test_duration_negative_clamps_to_zero() {
    cutils()
        .args(["duration", "-5"])
        .assert()
        .success()
        .stdout("0.0 hours, 0.0 minutes, and 0.00 seconds\n");
}

#[test]
fn test_bench_factors_summary() {
    cutils()
        .args(["bench", "factors", "5000", "--iterations", "20", "--warmups", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Function ran 20 times and completed in")
                .and(predicate::str::contains("Average")),
        );
}

#[test]
fn test_bench_json_is_clean() {
    let output = cutils()
        .args(["bench", "factors", "360", "-i", "5", "--format", "json"])
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(report["function"], "get_factors(360)");
    assert_eq!(report["stats"]["raw_times"].as_array().unwrap().len(), 5);
}

#[test]
fn test_bench_par_factors_rejects_zero_threads() {
    cutils()
        .args(["bench", "par-factors", "10", "20", "--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("thread count must be a positive integer"));
}

#[test]
fn test_bench_uses_config_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    writeln!(file, "iterations = 7\nwarmups = 0").expect("Failed to write config");

    cutils()
        .arg("--config")
        .arg(file.path())
        .args(["bench", "par-factors", "100", "200", "--threads", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Function ran 7 times"));
}
