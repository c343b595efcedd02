//! CRM v3 objects REST API endpoints.
//!
//! Responsibilities:
//! - Low-level HTTP calls to `/crm/v3/objects/{objectType}`.
//! - Handle request serialization and response parsing.
//!
//! Does NOT handle:
//! - Mapping records to display rows (see repository module).
//! - Paging: only the default first page is ever requested.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{encode_path_segment, send_request};
use crate::error::{ClientError, Result};
use crate::models::{CreateObjectRequest, CrmObject, ObjectListResponse};

fn objects_url(base_url: &str, object_type: &str) -> String {
    format!(
        "{}/crm/v3/objects/{}",
        base_url,
        encode_path_segment(object_type)
    )
}

/// List the default page of non-archived records of an object type.
///
/// Only the named `properties` are requested; they are sent as a single
/// comma-separated `properties` query parameter alongside `archived=false`.
pub async fn list_objects(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    object_type: &str,
    properties: &[&str],
) -> Result<ObjectListResponse> {
    debug!("Listing records of object type {}", object_type);

    let url = objects_url(base_url, object_type);
    let query_params = [
        ("properties", properties.join(",")),
        ("archived", "false".to_string()),
    ];

    let builder = client
        .get(&url)
        .bearer_auth(auth_token)
        .query(&query_params);

    let response = send_request(builder, "/crm/v3/objects/{objectType}", "GET").await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse object list response: {}", e))
    })
}

/// Create a record of an object type.
///
/// Any 2xx status means the record exists. The echoed record is returned
/// when the body parses as one and `None` otherwise.
pub async fn create_object(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    object_type: &str,
    request: &CreateObjectRequest,
) -> Result<Option<CrmObject>> {
    debug!("Creating record of object type {}", object_type);

    let url = objects_url(base_url, object_type);

    let builder = client.post(&url).bearer_auth(auth_token).json(request);

    let response = send_request(builder, "/crm/v3/objects/{objectType}", "POST").await?;

    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<CrmObject>(&body) {
        Ok(created) => Ok(Some(created)),
        Err(e) => {
            debug!("Create response body is not a record: {}", e);
            Ok(None)
        }
    }
}
