use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::*;

#[test]
fn test_options_before_positionals() {
    Command::cargo_bin("coordparse")
        .unwrap()
        .args(["--format=csv", "40.7484", "-73.9857"])
        .assert()
        .success()
        .stdout(predicate::str::contains("latitude,longitude"));
}

#[test]
fn test_options_after_positionals() {
    Command::cargo_bin("coordparse")
        .unwrap()
        .args(["40.7484", "-73.9857", "--format=csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("40.748400,-73.985700"));
}

#[test]
fn test_options_mixed_positions() {
    Command::cargo_bin("coordparse")
        .unwrap()
        .args(["40", "26.767", "--format=csv", "N", "79", "--no-headers", "58.933", "W"])
        .assert()
        .success()
        .stdout("40.446117,-79.982217\n");
}

#[test]
fn test_quoted_and_split_arguments_agree() {
    let quoted = CoordTest::new()
        .arg("40 26.767 N 79 58.933 W")
        .get_output();
    let split = CoordTest::new()
        .args(["40", "26.767", "N", "79", "58.933", "W"])
        .get_output();
    assert_eq!(stdout_of(&quoted), stdout_of(&split));
}

#[test]
fn test_double_dash_separator() {
    CoordTest::new()
        .args(["--format=csv", "--no-headers", "--", "10", "20"])
        .assert_success()
        .stdout("10.000000,20.000000\n");
}

#[test]
fn test_unknown_option_rejected() {
    CoordTest::new()
        .args(["--bogus", "10", "20"])
        .assert_failure_contains("Unknown option: --bogus");
}

#[test]
fn test_flag_with_value_rejected() {
    CoordTest::new()
        .args(["--explain=true", "10", "20"])
        .assert_failure_contains("does not take a value");
}

#[test]
fn test_value_option_requires_value() {
    CoordTest::new()
        .args(["--format", "10", "20"])
        .assert_failure_contains("Option --format requires a value");
}

#[test]
fn test_invalid_format_lists_supported() {
    CoordTest::new()
        .args(["--format=xml", "10", "20"])
        .assert_failure_contains("Supported formats: text, csv, json");
}

#[test]
fn test_precision_bounds() {
    CoordTest::new()
        .args(["--precision=16", "10", "20"])
        .assert_failure_contains("Precision must be between 0 and 15");
    CoordTest::new()
        .args(["--precision=abc", "10", "20"])
        .assert_failure_contains("Invalid precision value");
}

#[test]
fn test_no_arguments_prints_usage() {
    CoordTest::new()
        .assert_success()
        .stdout(predicate::str::starts_with("Usage: coordparse"));
}

#[test]
fn test_help_and_version() {
    CoordTest::new()
        .arg("--help")
        .assert_success_contains_all(&["Usage:", "--format=<format>", "--explain"]);
    CoordTest::new()
        .arg("help")
        .assert_success_contains("Options:");
    CoordTest::new()
        .arg("--version")
        .assert_success()
        .stdout(predicate::str::starts_with("coordparse "))
        .stdout(predicate::str::contains("Features:"));
}

#[test]
fn test_file_and_text_cannot_mix() {
    CoordTest::new()
        .args(["@coords.txt", "40"])
        .assert_failure_contains("cannot be combined");
}

#[test]
fn test_skip_invalid_requires_file() {
    CoordTest::new()
        .args(["--skip-invalid", "10", "20"])
        .assert_failure_contains("requires file input");
}
