//! HTTP helpers for the JSON API. They build URLs from the configured base,
//! map transport failures into [`ApiError`], and keep error bodies short enough
//! to log. No request timeout is applied; a hung server keeps the call pending.

use super::errors::ApiError;
use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use tracing::{debug, info_span, Instrument};

/// Maximum number of error body characters kept in [`ApiError::Http`].
const MAX_ERROR_CHARS: usize = 200;

/// Builds the shared HTTP client.
///
/// # Errors
/// Returns an error if the TLS backend cannot be initialized.
pub fn client(user_agent: &str) -> Result<Client, ApiError> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|err| ApiError::Network(format!("Failed to build HTTP client: {err}")))
}

/// Fetches JSON from `{base_url}/{path}`.
///
/// # Errors
/// Returns an error on transport failure, non-2xx status, or an undecodable body.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    path: &str,
) -> Result<T, ApiError> {
    let url = build_url_with_base(base_url, path);

    let span = info_span!("http.request", http.method = "GET", url = %url);
    let response = client
        .get(&url)
        .send()
        .instrument(span)
        .await
        .map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Posts JSON to `{base_url}/{path}` and ignores the response body.
///
/// # Errors
/// Returns an error if the body cannot be encoded, on transport failure, or on a non-2xx status.
pub async fn post_json<B: Serialize>(
    client: &Client,
    base_url: &str,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let url = build_url_with_base(base_url, path);
    let payload = to_string(body)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;

    let span = info_span!("http.request", http.method = "POST", url = %url);
    let response = client
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .body(payload)
        .send()
        .instrument(span)
        .await
        .map_err(map_request_error)?;

    handle_empty_response(response).await
}

/// Joins a base URL and a path with exactly one slash between them.
#[must_use]
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::Serialization(format!("Failed to build request: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    debug!("response status: {}", status);

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

async fn handle_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    debug!("response status: {}", status);

    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
