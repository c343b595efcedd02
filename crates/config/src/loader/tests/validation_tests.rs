//! Tests for malformed optional values.

use serial_test::serial;

use super::{REQUIRED_VARS, env_lock, with_portal_env};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

fn load_with(extra: (&str, &str)) -> Result<crate::Config, ConfigError> {
    let mut vars = REQUIRED_VARS.to_vec();
    vars.push(extra);
    with_portal_env(&vars, || ConfigLoader::new().from_env().and_then(ConfigLoader::build))
}

#[test]
#[serial]
fn test_invalid_port_rejected() {
    let _lock = env_lock().lock().unwrap();

    let err = load_with(("PORT", "not-a-port")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "PORT"));

    let err = load_with(("PORT", "70000")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "PORT"));
}

#[test]
#[serial]
fn test_invalid_timeout_rejected() {
    let _lock = env_lock().lock().unwrap();

    let err = load_with(("HUBSPOT_TIMEOUT", "soon")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "HUBSPOT_TIMEOUT"));

    let err = load_with(("HUBSPOT_TIMEOUT", "0")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
#[serial]
fn test_invalid_base_url_rejected() {
    let _lock = env_lock().lock().unwrap();

    let err = load_with(("HUBSPOT_BASE_URL", "not a url")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "HUBSPOT_BASE_URL"));
}

#[test]
#[serial]
fn test_missing_vars_reported_before_validation() {
    let _lock = env_lock().lock().unwrap();

    let err = with_portal_env(&[("HUBSPOT_TIMEOUT", "0")], || {
        ConfigLoader::new().from_env().and_then(ConfigLoader::build)
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnvVars(ref v) if v.len() == 5));
}
