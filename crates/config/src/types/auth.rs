//! Authentication types for the HubSpot connection.
//!
//! Responsibilities:
//! - Hold the private app access token sent as a bearer token on every call.
//!
//! Does NOT handle:
//! - Building request headers (see client crate).
//!
//! Invariants:
//! - The token is a `secrecy::SecretString`; `Debug` output never reveals it.

use secrecy::SecretString;

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HubSpot private app access token.
    pub access_token: SecretString,
}

impl AuthConfig {
    /// Create an auth config from a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::new(token.into().into()),
        }
    }
}
