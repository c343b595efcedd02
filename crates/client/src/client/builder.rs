//! Client builder for constructing [`CrmClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, access_token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, default headers)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`CrmClient`] methods)
//!
//! # Invariants
//! - `base_url` and `access_token` are required and must be provided before `build()`
//! - Every request carries `Content-Type: application/json`

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::SecretString;

use crate::client::CrmClient;
use crate::error::{ClientError, Result};
use cobj_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`CrmClient`].
///
/// All options have defaults except `base_url` and `access_token`.
pub struct CrmClientBuilder {
    base_url: Option<String>,
    access_token: Option<SecretString>,
    timeout: Duration,
}

impl Default for CrmClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CrmClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://api.hubapi.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the private-app access token.
    pub fn access_token(mut self, token: SecretString) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust,ignore
    /// let client = CrmClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.access_token = Some(config.auth.access_token.clone());
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.hubapi.com/"` -> `"https://api.hubapi.com"`
    /// - `"https://api.hubapi.com"` -> `"https://api.hubapi.com"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`CrmClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or blank.
    /// Returns [`ClientError::AuthFailed`] if `access_token` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<CrmClient> {
        let base_url = self
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let access_token = self
            .access_token
            .ok_or_else(|| ClientError::AuthFailed("access_token is required".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .default_headers(headers)
            .build()?;

        Ok(CrmClient {
            http,
            base_url,
            access_token,
        })
    }
}
