//! Main HubSpot CRM REST API client.
//!
//! This module provides the primary [`CrmClient`] for the CRM v3 objects API.
//! Authentication is a static private-app token sent as a bearer header on
//! every request.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `objects`: Object list/create methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token refresh or OAuth flows
//!
//! # Invariants
//! - The access token is only exposed at the moment a request is built.
//! - `base_url` never ends with a slash.

pub mod builder;

mod objects;

use secrecy::SecretString;

/// HubSpot CRM REST API client.
///
/// # Creating a Client
///
/// Use [`CrmClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use cobj_client::CrmClient;
/// use secrecy::SecretString;
///
/// let client = CrmClient::builder()
///     .base_url("https://api.hubapi.com".to_string())
///     .access_token(SecretString::new("pat-na1-...".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct CrmClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) access_token: SecretString,
}

impl CrmClient {
    /// Create a new client builder.
    pub fn builder() -> builder::CrmClientBuilder {
        builder::CrmClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
