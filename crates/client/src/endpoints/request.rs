//! Request helper shared by every endpoint.
//!
//! Sends a prepared request once and turns non-success responses into
//! [`ClientError::ApiError`]. There is no retry: transient and permanent
//! failures are reported the same way.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::HubSpotError;

/// Sends an HTTP request and checks the response status.
///
/// # Arguments
///
/// * `builder` - The `reqwest::RequestBuilder` to execute
/// * `endpoint` - Path template used for logging (never contains secrets)
/// * `method` - HTTP method used for logging
///
/// # Errors
///
/// Returns `ClientError::HttpError` on transport failure and
/// `ClientError::ApiError` on any non-2xx status. When the body is a HubSpot
/// error document its message and correlation id are kept; otherwise the raw
/// body becomes the message.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    debug!(endpoint, method, "Sending CRM request");

    let response = builder.send().await?;
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let (message, correlation_id) = match serde_json::from_str::<HubSpotError>(&body) {
        Ok(err) => (err.message, err.correlation_id),
        Err(_) => (body, None),
    };

    debug!(endpoint, method, status, "CRM request failed");

    Err(ClientError::ApiError {
        status,
        url,
        message,
        correlation_id,
    })
}
