//! Integration tests for `ibancheck validate`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `ibancheck` binary.
fn ibancheck_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is something like …/deps/cmd_validate-<hash>
    // The binary lives in the parent directory.
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("ibancheck");
    path
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(ibancheck_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run ibancheck")
}

// ---------------------------------------------------------------------------
// validate: valid input (exit 0)
// ---------------------------------------------------------------------------

#[test]
fn validate_valid_iban_exits_0() {
    let out = run(&["validate", "GB82WEST12345698765432"]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn validate_prints_decomposition_to_stdout() {
    let out = run(&["validate", "GB82WEST12345698765432"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[valid]"), "stdout: {stdout}");
    assert!(stdout.contains("United Kingdom: Valid IBAN"), "stdout: {stdout}");
    assert!(stdout.contains("GB82 WEST 1234 5698 7654 32"), "stdout: {stdout}");
    assert!(stdout.contains("98765432"), "stdout: {stdout}");
}

#[test]
fn validate_accepts_printed_form() {
    let out = run(&["validate", "fr14 2004 1010 0505 0001 3m02 606"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FR1420041010050500013M02606"), "stdout: {stdout}");
}

#[test]
fn validate_single_argument_prints_no_summary() {
    let out = run(&["validate", "DE89370400440532013000"]);
    assert!(
        out.stderr.is_empty(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

// ---------------------------------------------------------------------------
// validate: rejected input (exit 1)
// ---------------------------------------------------------------------------

#[test]
fn validate_bad_checksum_exits_1() {
    let out = run(&["validate", "DE89370400440532013001"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[invalid]"), "stdout: {stdout}");
    assert!(stdout.contains("Check digits invalid"), "stdout: {stdout}");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("1 of 1 IBANs not valid"), "stderr: {stderr}");
}

#[test]
fn validate_too_long_exits_1() {
    let out = run(&["validate", "GB82WEST123456987654321"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("GB IBAN Too Long"), "stdout: {stdout}");
}

#[test]
fn validate_unknown_country_exits_1() {
    let out = run(&["validate", "ZZ820000000000000000"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[unknown-country]"), "stdout: {stdout}");
    assert!(
        stdout.contains("We are unaware of IBANs beginning ZZ"),
        "stdout: {stdout}"
    );
}

#[test]
fn validate_incomplete_exits_1() {
    let out = run(&["validate", "GB82WEST1234569876543"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[incomplete]"), "stdout: {stdout}");
}

#[test]
fn validate_multiple_arguments_summarizes() {
    let out = run(&[
        "validate",
        "GB82WEST12345698765432",
        "DE89370400440532013000",
        "DE89370400440532013001",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("2 valid, 1 invalid, 0 incomplete, 0 unknown"),
        "stderr: {stderr}"
    );
}

#[test]
fn validate_quiet_suppresses_summary_but_not_error() {
    let out = run(&[
        "--quiet",
        "validate",
        "GB82WEST12345698765432",
        "DE89370400440532013001",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("incomplete"), "stderr: {stderr}");
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// validate: JSON output
// ---------------------------------------------------------------------------

#[test]
fn validate_json_output_is_parseable() {
    let out = run(&["--format", "json", "validate", "BE68539007547034"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert_eq!(value["input"], "BE68539007547034");
    assert_eq!(value["status"], "valid");
    assert_eq!(value["country_name"], "Belgium");
    assert!(value["elements"].as_array().is_some_and(|a| !a.is_empty()));
}

#[test]
fn validate_json_checksum_failure_keeps_elements() {
    let out = run(&["-f", "json", "validate", "DE89370400440532013001"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert_eq!(value["status"], "invalid");
    assert!(value["elements"].as_array().is_some_and(|a| !a.is_empty()));
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

#[test]
fn version_prints_semver() {
    let out = run(&["version"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim().split('.').count(), 3, "stdout: {stdout}");
}
