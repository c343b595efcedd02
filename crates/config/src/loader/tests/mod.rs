//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and validation.
//! - Test environment variable handling and precedence.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Environment-driven tests clear every portal variable they do not set.

use std::sync::Mutex;

pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads.
pub const PORTAL_VARS: [&str; 13] = [
    "HUBSPOT_ACCESS_TOKEN",
    "CUSTOM_OBJECT_TYPE",
    "PROP1",
    "PROP2",
    "PROP3",
    "PROP1_LABEL",
    "PROP2_LABEL",
    "PROP3_LABEL",
    "PORT",
    "HUBSPOT_BASE_URL",
    "HUBSPOT_TIMEOUT",
    "DOTENV_DISABLED",
    "RUST_LOG",
];

/// Run `f` with exactly `vars` set among the portal variables; all others are unset.
pub fn with_portal_env<F: FnOnce() -> R, R>(vars: &[(&str, &str)], f: F) -> R {
    let env: Vec<(&str, Option<&str>)> = PORTAL_VARS
        .iter()
        .map(|name| {
            let value = vars.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
            (*name, value)
        })
        .collect();
    temp_env::with_vars(env, f)
}

/// The minimal complete set of required variables.
pub const REQUIRED_VARS: [(&str, &str); 5] = [
    ("HUBSPOT_ACCESS_TOKEN", "pat-na1-test"),
    ("CUSTOM_OBJECT_TYPE", "2-1234567"),
    ("PROP1", "name"),
    ("PROP2", "genre"),
    ("PROP3", "rating"),
];
