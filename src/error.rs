//! Error types for the recommendation backend.
//!
//! Every failure a request handler can produce is a variant of [`ApiError`],
//! which converts itself into the documented JSON (or redirect) response via
//! `IntoResponse`. Handlers return `Result<_, ApiError>` and use `?`; no
//! failure reaches the client as an unhandled fault or an HTML error page.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Startup configuration failures. Fatal; reported once and the process
/// exits.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Request-level failures, mapped onto the HTTP surface.
///
/// The client always receives structured JSON with an `error` key (plus
/// `details` where available), except [`ApiError::Unauthenticated`], which is
/// a redirect back to the login entry point rather than an error page.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request input is absent or malformed. 400.
    #[error("{0}")]
    MissingInput(&'static str),
    /// The request was well-formed but the subject does not exist. 404.
    #[error("{0}")]
    NotFound(&'static str),
    /// No usable session token; the browser is sent back to `/` to start a
    /// fresh login.
    #[error("authentication required")]
    Unauthenticated,
    /// The authorization-code exchange failed (network, invalid code, or a
    /// provider error body). 500.
    #[error("token exchange failed: {details}")]
    AuthExchange { details: String },
    /// The refresh-token grant failed. The session layer converts this to
    /// [`ApiError::Unauthenticated`] after clearing the session; the direct
    /// mapping below is a fallback only.
    #[error("token refresh failed: {details}")]
    AuthRefresh { details: String },
    /// Spotify answered a proxy call with a non-success status. 502.
    #[error("Spotify API returned status {status}: {details}")]
    Upstream { status: u16, details: String },
    /// The proxy call never produced a response. 502.
    #[error("request to Spotify failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingInput(message) => error_json(StatusCode::BAD_REQUEST, message, None),
            ApiError::NotFound(message) => error_json(StatusCode::NOT_FOUND, message, None),
            ApiError::Unauthenticated => {
                (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
            }
            ApiError::AuthExchange { details } => error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to get access token",
                Some(details),
            ),
            ApiError::AuthRefresh { details } => error_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to refresh access token",
                Some(details),
            ),
            ApiError::Upstream { details, .. } => error_json(
                StatusCode::BAD_GATEWAY,
                "Spotify API request failed",
                Some(details),
            ),
            ApiError::Network(source) => error_json(
                StatusCode::BAD_GATEWAY,
                "Spotify API request failed",
                Some(source.to_string()),
            ),
        }
    }
}

fn error_json(status: StatusCode, message: &str, details: Option<String>) -> Response {
    let mut body = json!({ "error": message });
    if let Some(details) = details {
        body["details"] = json!(details);
    }
    (status, Json(body)).into_response()
}
