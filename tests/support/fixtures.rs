//! Test fixtures and constants.

/// Secret bundle used across most tests.
pub const STANDARD_SECRETS: &str = r#"{
    "first-secret": "postgres://localhost/mydb",
    "second-secret": "sk-test-12345",
    "alpha": "v1"
}"#;

/// Bundle with non-string values.
pub const TYPED_SECRETS: &str = r#"{
    "port": 5432,
    "tls": {"enabled": true}
}"#;

/// A value that must never appear in output unredacted.
pub const SENSITIVE_VALUE: &str = "postgres://localhost/mydb";
