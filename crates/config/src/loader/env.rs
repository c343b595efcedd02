//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for the portal configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Variables holding the three property keys, in display order.
pub(crate) const PROPERTY_KEY_VARS: [&str; 3] = ["PROP1", "PROP2", "PROP3"];

/// Variables holding the three optional label overrides, in display order.
pub(crate) const PROPERTY_LABEL_VARS: [&str; 3] = ["PROP1_LABEL", "PROP2_LABEL", "PROP3_LABEL"];

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Only variables that are present overwrite loader state, so values set via
/// builder methods before this call survive when the variable is unset.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(token) = env_var_or_none("HUBSPOT_ACCESS_TOKEN") {
        loader.set_access_token(Some(SecretString::new(token.into())));
    }
    if let Some(object_type) = env_var_or_none("CUSTOM_OBJECT_TYPE") {
        loader.set_object_type(Some(object_type));
    }
    for (index, var) in PROPERTY_KEY_VARS.iter().enumerate() {
        if let Some(key) = env_var_or_none(var) {
            loader.set_property_key(index, Some(key));
        }
    }
    for (index, var) in PROPERTY_LABEL_VARS.iter().enumerate() {
        if let Some(label) = env_var_or_none(var) {
            loader.set_property_label(index, Some(label));
        }
    }
    if let Some(port) = env_var_or_none("PORT") {
        loader.set_port(Some(port.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: "PORT".to_string(),
                message: "must be a port number between 0 and 65535".to_string(),
            }
        })?));
    }
    if let Some(url) = env_var_or_none("HUBSPOT_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none("HUBSPOT_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "HUBSPOT_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_COBJ_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none(), "Empty string env var should return None");
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_COBJ_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key2), Some("test-value".to_string()));
        });
    }
}
