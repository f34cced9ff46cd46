//! HTTP helpers for the hotel JSON API. Every outbound request goes through
//! here so the authorization header is injected in exactly one place: when a
//! credential is persisted, requests carry `Authorization: Token <value>`;
//! when none is, no header is attached. The helpers do not retry, cache, or
//! interpret status codes; transport and HTTP failures surface to callers
//! unchanged.

use super::{config::AppConfig, errors::AppError};
use crate::features::auth::session;
use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;

/// Header scheme used by the backend's token authentication.
const AUTH_SCHEME: &str = "Token";
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON from an API path.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let request = attach_auth(Request::get(&url))
        .build()
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
    let response = request.send().await.map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Fetches JSON from an API path with query parameters appended.
pub async fn get_json_with_query<T: DeserializeOwned>(
    path: &str,
    params: &[(&str, &str)],
) -> Result<T, AppError> {
    let url = build_url(path);
    let request = attach_auth(Request::get(&url).query(params.iter().copied()))
        .build()
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
    let response = request.send().await.map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Posts a JSON body to an API path and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let request = attach_auth(Request::post(&url).header("Content-Type", "application/json"))
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
    let response = request.send().await.map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Formats the authorization header value for a credential.
pub fn authorization_value(token: &str) -> String {
    format!("{AUTH_SCHEME} {token}")
}

/// Returns the authorization header iff a credential is currently persisted.
pub fn auth_header() -> Option<(&'static str, String)> {
    session::credential().map(|token| ("Authorization", authorization_value(&token)))
}

/// The single injection point: reads the session store per request, never
/// caching the credential across calls.
fn attach_auth(builder: RequestBuilder) -> RequestBuilder {
    match auth_header() {
        Some((name, value)) => builder.header(name, &value),
        None => builder,
    }
}

/// Builds a URL from the configured API origin and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport-level failures into `AppError::Network`.
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        log::warn!("request to {} failed with status {status}", response.url());
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and
/// truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{auth_header, authorization_value, build_url, sanitize_body};
    use crate::features::auth::session;

    #[test]
    fn authorization_value_uses_token_scheme() {
        assert_eq!(authorization_value("abc123"), "Token abc123");
    }

    #[test]
    fn auth_header_tracks_the_session_store() {
        session::clear_credential();
        assert_eq!(auth_header(), None);

        session::set_credential("s3cret");
        assert_eq!(
            auth_header(),
            Some(("Authorization", "Token s3cret".to_string()))
        );

        session::clear_credential();
        assert_eq!(auth_header(), None);
    }

    #[test]
    fn build_url_joins_origin_and_path() {
        let url = build_url("/api/rooms/");
        assert!(url.ends_with("/api/rooms/"));
        assert!(url.starts_with("http"));
        // exactly one slash at the seam
        assert!(!url.contains("//api"));
    }

    #[test]
    fn sanitize_body_trims_truncates_and_defaults() {
        assert_eq!(sanitize_body("  \n ".to_string()), "Request failed.");
        assert_eq!(sanitize_body(" boom ".to_string()), "boom");
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }
}
