//! HTTP access to the static user collection.
//!
//! Client-side (hydrate): a real GET via `gloo-net`.
//! Server-side (SSR) and tests: returns `ApiError::Unavailable`, since the
//! lookup only ever runs in response to a browser event.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::UserDirectory;

/// Failures while loading the user collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("user collection request failed: {0}")]
    Status(u16),

    /// The body was not a valid user collection.
    #[error("user collection parse failed: {0}")]
    Parse(String),

    /// No browser fetch available in this build.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_directory(body: &str) -> Result<UserDirectory, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch and parse the user collection from `url` (relative to the page).
///
/// # Errors
///
/// Returns an error if the request fails, the response status is not a
/// success, or the body is not a `{ "usuarios": [...] }` document.
pub async fn fetch_user_directory(url: &str) -> Result<UserDirectory, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        check_status(resp.ok(), resp.status())?;
        let body = resp.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
        parse_directory(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}
