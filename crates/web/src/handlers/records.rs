//! Record list and creation handlers.
//!
//! Responsibilities:
//! - `GET /`: list records through the repository and render the table.
//! - `GET /update-cobj`: render the creation form.
//! - `POST /update-cobj`: create a record from the submitted form.
//!
//! Invariants:
//! - Upstream failures are logged with full detail and answered with a
//!   generic message and status 500; raw errors never reach the page.
//! - A successful create answers `302 Found` with `Location: /`.
//! - A field submitted more than once keeps its first value.

use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, error};

use crate::app::AppState;
use crate::views::{render_form, render_list};

/// Shown on the table page when records cannot be fetched.
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch records. Check your .env and HubSpot permissions.";

/// Shown on the form page when a record cannot be created.
pub const CREATE_ERROR_MESSAGE: &str =
    "Failed to create record. Verify property internal names and token scopes.";

/// Submitted creation form. Absent fields are treated as empty.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RecordForm {
    pub prop1: Option<String>,
    pub prop2: Option<String>,
    pub prop3: Option<String>,
}

impl RecordForm {
    /// Values in property order, empty where a field was not submitted.
    pub fn into_values(self) -> [String; 3] {
        [self.prop1, self.prop2, self.prop3].map(Option::unwrap_or_default)
    }
}

impl FromIterator<(String, String)> for RecordForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "prop1" => &mut form.prop1,
                "prop2" => &mut form.prop2,
                "prop3" => &mut form.prop3,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        form
    }
}

/// `GET /`
pub async fn list_records(State(state): State<AppState>) -> Response {
    debug!("Listing records");

    match state.repository.list().await {
        Ok(rows) => Html(render_list(&state.labels, &rows, None)).into_response(),
        Err(e) => {
            error!(error = %e, "Error fetching records");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_list(&state.labels, &[], Some(FETCH_ERROR_MESSAGE))),
            )
                .into_response()
        }
    }
}

/// `GET /update-cobj`
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    debug!("Rendering creation form");
    Html(render_form(&state.labels, None))
}

/// `POST /update-cobj`
pub async fn create_record(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    debug!("Creating record");

    let form: RecordForm = pairs.into_iter().collect();
    match state.repository.create(form.into_values()).await {
        Ok(()) => (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response(),
        Err(e) => {
            error!(error = %e, "Error creating record");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_form(&state.labels, Some(CREATE_ERROR_MESSAGE))),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_values_default_to_empty() {
        let form = RecordForm {
            prop1: Some("a".to_string()),
            prop2: None,
            prop3: Some(String::new()),
        };
        assert_eq!(
            form.into_values(),
            ["a".to_string(), String::new(), String::new()]
        );
    }

    #[test]
    fn test_form_from_pairs_keeps_first_value() {
        let form: RecordForm = [
            ("prop1", "first"),
            ("extra", "ignored"),
            ("prop1", "second"),
            ("prop3", "c"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert_eq!(
            form,
            RecordForm {
                prop1: Some("first".to_string()),
                prop2: None,
                prop3: Some("c".to_string()),
            }
        );
    }

    #[test]
    fn test_default_form_is_all_empty() {
        assert_eq!(RecordForm::default().into_values(), [String::new(), String::new(), String::new()]);
    }
}
