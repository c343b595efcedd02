//! Application state and router.
//!
//! Responsibilities:
//! - Hold the shared record repository and the configured labels.
//! - Wire every route to its handler.
//!
//! Invariants:
//! - State is immutable after startup; cloning it is cheap.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use cobj_client::RecordRepository;
use cobj_config::ObjectConfig;

use crate::assets;
use crate::handlers::records;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn RecordRepository>,
    /// Display labels, in property order.
    pub labels: Arc<[String; 3]>,
}

impl AppState {
    pub fn new(repository: Arc<dyn RecordRepository>, object: &ObjectConfig) -> Self {
        Self {
            repository,
            labels: Arc::new(object.labels().map(str::to_string)),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(records::list_records))
        .route(
            "/update-cobj",
            get(records::show_form).post(records::create_record),
        )
        .route("/css/style.css", get(assets::stylesheet))
        .with_state(state)
}
