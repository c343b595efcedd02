//! Shared test utilities for cobj-web integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic binary command factory that prevents dotenv loading.
//! - Build router state over the in-memory repository.
//!
//! Invariants / Assumptions:
//! - Portal environment variables from the host never leak into tests.

use std::sync::Arc;

use assert_cmd::Command;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response};
use cobj_client::testing::InMemoryRepository;
use cobj_client::{RecordRepository, RecordRow};
use cobj_config::{ObjectConfig, PropertyField};
use cobj_web::{AppState, router};
use tower::ServiceExt;

/// Every variable the binary reads.
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
    "RUST_LOG",
    "DOTENV_DISABLED",
];

/// Returns a hermetic `cobj-web` command with no portal configuration.
#[allow(dead_code)]
pub fn portal_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cobj-web");
    for var in PORTAL_VARS {
        cmd.env_remove(var);
    }
    cmd.env("DOTENV_DISABLED", "1");
    cmd
}

/// Returns a hermetic command with every required variable set.
#[allow(dead_code)]
pub fn configured_cmd() -> Command {
    let mut cmd = portal_cmd();
    cmd.env("HUBSPOT_ACCESS_TOKEN", "pat-na1-test-token")
        .env("CUSTOM_OBJECT_TYPE", "p_projects")
        .env("PROP1", "project_name")
        .env("PROP2", "budget")
        .env("PROP3", "owner");
    cmd
}

/// Object configuration with a label override on the first property only.
#[allow(dead_code)]
pub fn object_config() -> ObjectConfig {
    ObjectConfig {
        object_type: "p_projects".to_string(),
        properties: [
            PropertyField::new("project_name", Some("Project".to_string())),
            PropertyField::new("budget", None),
            PropertyField::new("owner", None),
        ],
    }
}

#[allow(dead_code)]
pub fn row(id: &str, values: [&str; 3]) -> RecordRow {
    RecordRow {
        id: id.to_string(),
        values: values.map(str::to_string),
    }
}

#[allow(dead_code)]
pub fn state_with(repository: Arc<dyn RecordRepository>) -> AppState {
    AppState::new(repository, &object_config())
}

#[allow(dead_code)]
pub fn memory_state(repo: &Arc<InMemoryRepository>) -> AppState {
    state_with(repo.clone())
}

/// Send one request through a fresh router.
#[allow(dead_code)]
pub async fn send(state: AppState, request: Request<Body>) -> Response<Body> {
    router(state)
        .oneshot(request)
        .await
        .expect("router is infallible")
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

#[allow(dead_code)]
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
