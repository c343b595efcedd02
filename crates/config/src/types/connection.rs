//! Connection configuration types for the custom object portal.
//!
//! Responsibilities:
//! - Define connection settings (API base URL, request timeout).
//! - Define the main `Config` structure combining connection, auth, object and server.
//! - Provide a convenience constructor for tests and embedding.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Default values are provided via constants, not magic numbers.
//! - `base_url` never carries a trailing slash once produced by the loader.

use crate::constants::{DEFAULT_HUBSPOT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use crate::types::object::{ObjectConfig, PropertyField};
use crate::types::server::ServerConfig;
use std::time::Duration;

/// Connection configuration for the HubSpot API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the API host (e.g., https://api.hubapi.com)
    pub base_url: String,
    /// Per-request transport timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HUBSPOT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// The custom object type and its three displayed properties
    pub object: ObjectConfig,
    /// Listener settings
    pub server: ServerConfig,
}

impl Config {
    /// Create a config for an object type with default connection and server settings.
    pub fn new(
        token: impl Into<String>,
        object_type: impl Into<String>,
        properties: [PropertyField; 3],
    ) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig::new(token),
            object: ObjectConfig {
                object_type: object_type.into(),
                properties,
            },
            server: ServerConfig::default(),
        }
    }

    /// Replace the API base URL (used to point the client at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.connection.base_url = base_url.into();
        self
    }
}
