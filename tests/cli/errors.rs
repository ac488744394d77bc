//! Tests for fatal configuration and projection errors.

use crate::support::*;

#[test]
fn test_directive_without_comma_aborts() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.directive(1, "onlyonevalue")
        .set("SLUICE_LA_CMD_APP", "touch launched.marker");

    let output = t.launch();
    assert_failure(&output);
    assert_stderr_contains(&output, "SLUICE_LA_ENV_READ_AND_SET_1");
    assert_stderr_contains(&output, "onlyonevalue");
    assert!(!t.path("launched.marker").exists());
}

#[test]
fn test_invalid_source_name_aborts() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.directive(1, "bad name!,TARGET");

    let output = t.launch();
    assert_failure(&output);
    assert_stderr_contains(&output, "source name");
    assert_stderr_contains(&output, "bad name!");
}

#[test]
fn test_invalid_target_name_aborts() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.directive(1, "alpha,$TARGET");

    let output = t.launch();
    assert_failure(&output);
    assert_stderr_contains(&output, "target name");
    assert_stderr_contains(&output, "$TARGET");
}

#[test]
fn test_missing_field_aborts_without_leaking_bundle() {
    let mut t = Test::with_secrets(r#"{"other-secret": "do-not-print-me"}"#);
    t.directive(1, "alpha,TARGET")
        .set("SLUICE_LA_CMD_APP", "touch launched.marker");

    let output = t.launch();
    assert_failure(&output);
    assert_stderr_contains(&output, "does not contain field alpha");
    assert_not_leaked(&output, "do-not-print-me");
    assert!(!t.path("launched.marker").exists());
}

#[test]
fn test_materialization_happens_before_projection_failure() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.set("SLUICE_LA_OUT_FILE", "out.json")
        .directive(1, "onlyonevalue");

    let output = t.launch();
    assert_failure(&output);
    assert!(t.path("out.json").exists());
}

#[test]
fn test_unknown_provider_fails_with_hint() {
    let mut t = Test::new();
    t.set("SLUICE_SM_PROVIDER", "etcd");

    let output = t.launch();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown secret provider 'etcd'");
    assert_stderr_contains(&output, "→ set SLUICE_SM_PROVIDER");
}

#[test]
fn test_missing_provider_setting_fails() {
    let mut t = Test::new();
    t.set("SLUICE_SM_PROVIDER", "file");

    let output = t.launch();
    assert_failure(&output);
    assert_stderr_contains(&output, "SLUICE_SM_FILE");
}

#[test]
fn test_unreadable_secret_file_fails() {
    let mut t = Test::new();
    t.set("SLUICE_SM_PROVIDER", "file")
        .set("SLUICE_SM_FILE", "does-not-exist.json")
        .set("SLUICE_LA_CMD_APP", "touch launched.marker");

    let output = t.launch();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read secret file");
    assert!(!t.path("launched.marker").exists());
}

#[test]
fn test_empty_directive_is_ignored() {
    let mut t = Test::with_secrets(STANDARD_SECRETS);
    t.directive(1, "");

    let output = t.launch();
    assert_success(&output);
}
