//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges explicit overrides
//!   with environment variables.
//! - Validate required values and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - `build()` reports every missing required variable at once.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::env::{PROPERTY_KEY_VARS, apply_env};
use super::error::ConfigError;
use crate::constants::{DEFAULT_HUBSPOT_BASE_URL, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig, ObjectConfig, PropertyField, ServerConfig};

/// Values `build()` cannot default.
struct Required {
    access_token: SecretString,
    object_type: String,
    property_keys: [String; 3],
}

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    access_token: Option<SecretString>,
    object_type: Option<String>,
    property_keys: [Option<String>; 3],
    property_labels: [Option<String>; 3],
    port: Option<u16>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing). Variables that
    /// are already set in the process environment are not overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply values from the process environment.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the HubSpot access token.
    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the custom object type identifier.
    pub fn with_object_type(mut self, object_type: String) -> Self {
        self.object_type = Some(object_type);
        self
    }

    /// Set the three property keys, in display order.
    pub fn with_property_keys(mut self, keys: [String; 3]) -> Self {
        self.property_keys = keys.map(Some);
        self
    }

    /// Set a display label for the property at `index` (0-based).
    ///
    /// Indexes past the third property are ignored.
    pub fn with_property_label(mut self, index: usize, label: String) -> Self {
        self.set_property_label(index, Some(label));
        self
    }

    /// Set the listen port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the HubSpot API base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Take the required values, or name every one that is absent or blank.
    fn take_required(&mut self) -> Result<Required, ConfigError> {
        let access_token = self
            .access_token
            .take()
            .filter(|t| !t.expose_secret().trim().is_empty());
        let object_type = self.object_type.take().filter(|v| has_value(v));
        let keys = std::mem::take(&mut self.property_keys).map(|k| k.filter(|v| has_value(v)));

        let mut missing = Vec::new();
        if access_token.is_none() {
            missing.push("HUBSPOT_ACCESS_TOKEN");
        }
        if object_type.is_none() {
            missing.push("CUSTOM_OBJECT_TYPE");
        }
        for (key, var) in keys.iter().zip(PROPERTY_KEY_VARS) {
            if key.is_none() {
                missing.push(var);
            }
        }

        match (access_token, object_type, keys) {
            (Some(access_token), Some(object_type), [Some(k1), Some(k2), Some(k3)]) => {
                Ok(Required {
                    access_token,
                    object_type,
                    property_keys: [k1, k2, k3],
                })
            }
            _ => Err(ConfigError::MissingEnvVars(missing)),
        }
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVars`] naming every absent required
    /// value, or a validation error for malformed optional values.
    pub fn build(mut self) -> Result<Config, ConfigError> {
        let Required {
            access_token,
            object_type,
            property_keys: [k1, k2, k3],
        } = self.take_required()?;

        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_HUBSPOT_BASE_URL),
        )?;
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        let [l1, l2, l3] = self.property_labels;

        Ok(Config {
            connection: ConnectionConfig { base_url, timeout },
            auth: AuthConfig { access_token },
            object: ObjectConfig {
                object_type,
                properties: [
                    PropertyField::new(k1, l1),
                    PropertyField::new(k2, l2),
                    PropertyField::new(k3, l3),
                ],
            },
            server: ServerConfig {
                port: self.port.unwrap_or(DEFAULT_PORT),
            },
        })
    }

    pub(crate) fn set_access_token(&mut self, token: Option<SecretString>) {
        self.access_token = token;
    }

    pub(crate) fn set_object_type(&mut self, object_type: Option<String>) {
        self.object_type = object_type;
    }

    pub(crate) fn set_property_key(&mut self, index: usize, key: Option<String>) {
        if let Some(slot) = self.property_keys.get_mut(index) {
            *slot = key;
        }
    }

    pub(crate) fn set_property_label(&mut self, index: usize, label: Option<String>) {
        if let Some(slot) = self.property_labels.get_mut(index) {
            *slot = label;
        }
    }

    pub(crate) fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

fn has_value(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validates the request timeout.
///
/// Checks that it is greater than 0 and not above `MAX_TIMEOUT_SECS`.
fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let timeout_secs = timeout.as_secs();

    if timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }

    if timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }

    Ok(())
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "HUBSPOT_BASE_URL".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://api.hubapi.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "HUBSPOT_BASE_URL".into(),
            message: format!(
                "scheme must be http or https (e.g. https://api.hubapi.com), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "HUBSPOT_BASE_URL".into(),
            message: "host is required (e.g. https://api.hubapi.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
