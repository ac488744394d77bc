//! Tests for output file materialization.

use crate::support::*;
use serde_json::{json, Value};

#[test]
fn test_writes_json_file() {
    let mut t = Test::with_secrets(r#"{"k": "value-1234"}"#);
    t.set("SLUICE_LA_OUT_FILE", "config.json");

    let output = t.launch();
    assert_success(&output);
    assert_stderr_contains(&output, "++ File generated successfully.");
    assert_stderr_contains(&output, "---- File content is **** valu****");

    let written: Value = serde_json::from_str(&t.read("config.json")).unwrap();
    assert_eq!(written, json!({"k": "value-1234"}));
}

#[test]
fn test_explicit_json_format() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.set("SLUICE_LA_OUT_FILE", "config.json")
        .set("SLUICE_LA_OUT_FILE_FORMAT", "json");

    let output = t.launch();
    assert_success(&output);

    let written: Value = serde_json::from_str(&t.read("config.json")).unwrap();
    assert_eq!(written["alpha"], "v1");
    assert_not_leaked(&output, SENSITIVE_VALUE);
}

#[test]
fn test_overwrites_existing_file() {
    let mut t = Test::with_secrets(r#"{"k": "v"}"#);
    t.write("config.json", "previous contents");
    t.set("SLUICE_LA_OUT_FILE", "config.json");

    assert_success(&t.launch());
    assert_eq!(t.read("config.json"), r#"{"k":"v"}"#);
}

#[test]
fn test_unsupported_format_is_reported_and_run_continues() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.set("SLUICE_LA_OUT_FILE", "config.yaml")
        .set("SLUICE_LA_OUT_FILE_FORMAT", "yaml")
        .directive(1, "alpha,BETA");

    let output = t.launch();
    assert_success(&output);
    assert_stderr_contains(&output, "output format 'yaml' is not supported yet");
    assert_stderr_contains(&output, "++ Setting env variable BETA");
    assert!(!t.path("config.yaml").exists());
}

#[test]
fn test_no_output_path_skips() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.launch();
    assert_success(&output);
    assert_stderr_contains(&output, "++ Skipping out file creation.");
}

#[test]
fn test_write_failure_is_not_fatal() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.set("SLUICE_LA_OUT_FILE", "missing-dir/config.json")
        .directive(1, "alpha,BETA");

    let output = t.launch();
    assert_success(&output);
    assert_stderr_contains(&output, "failed to write");
    assert_stderr_contains(&output, "++ Launcher finished.");
}
