//! Tests for `sluice check`.

use crate::support::*;

#[test]
fn test_check_lists_plan() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.set("SLUICE_LA_OUT_FILE", "config.json")
        .directive(1, "first-secret,APP_SECRET_1")
        .directive(2, "second-secret,APP_SECRET_2")
        .set("SLUICE_LA_CMD_APP", "node server.js");

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "provider:  file");
    assert_stdout_contains(&output, "first-secret → APP_SECRET_1");
    assert_stdout_contains(&output, "second-secret → APP_SECRET_2");
    assert_stdout_contains(&output, "node server.js");
    assert_stdout_contains(&output, "configuration is valid");
}

#[test]
fn test_check_does_not_fetch_or_launch() {
    let mut t = Test::new();
    t.set("SLUICE_SM_PROVIDER", "file")
        .set("SLUICE_SM_FILE", "not-created-yet.json")
        .set("SLUICE_LA_OUT_FILE", "config.json")
        .set("SLUICE_LA_CMD_APP", "touch launched.marker");

    let output = t.check();
    assert_success(&output);
    assert!(!t.path("config.json").exists());
    assert!(!t.path("launched.marker").exists());
}

#[test]
fn test_check_reports_every_invalid_directive() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.directive(1, "onlyonevalue")
        .directive(2, "bad name!,TARGET")
        .directive(3, "alpha,BETA");

    let output = t.check();
    assert_failure(&output);
    assert_stdout_contains(&output, "onlyonevalue");
    assert_stdout_contains(&output, "bad name!");
    assert_stdout_contains(&output, "alpha → BETA");
    assert_stderr_contains(&output, "SLUICE_LA_ENV_READ_AND_SET_1");
}

#[test]
fn test_check_flags_unsupported_format() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.set("SLUICE_LA_OUT_FILE", "config.toml")
        .set("SLUICE_LA_OUT_FILE_FORMAT", "toml");

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "format 'toml' is not supported yet");
}

#[test]
fn test_check_without_secret_manager() {
    let t = Test::new();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "not configured; file and env steps will be skipped");
}
