//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the CRM client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON

use std::time::Duration;

#[allow(unused_imports)]
pub use cobj_client::testing::load_fixture;

#[allow(unused_imports)]
pub use cobj_client::{CrmClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use cobj_config::{ObjectConfig, PropertyField};
use secrecy::SecretString;

pub const TEST_TOKEN: &str = "pat-na1-test-token";
pub const OBJECT_TYPE: &str = "p_projects";
pub const KEYS: [&str; 3] = ["project_name", "budget", "owner"];

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> CrmClient {
    CrmClient::builder()
        .base_url(server.uri())
        .access_token(SecretString::new(TEST_TOKEN.to_string().into()))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Object configuration used across repository tests.
#[allow(dead_code)]
pub fn object_config() -> ObjectConfig {
    ObjectConfig {
        object_type: OBJECT_TYPE.to_string(),
        properties: KEYS.map(|k| PropertyField::new(k, None)),
    }
}
