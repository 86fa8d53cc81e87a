use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Transport-level failure talking to the remote HR API.
/// Non-2xx responses are not errors at this layer; see `UpstreamResponse`.
#[derive(Debug, Error)]
pub enum HrApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outcome of a phone lookup that did not produce an identity.
/// `Display` is the exact message shown to the employee.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Phone number cannot be found. Contact your HR.")]
    NotFound,

    #[error("API connection failed.")]
    Upstream,
}

/// Handler-level failure. Upstream problems never reach this type; they are
/// rendered as pages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template render error: {0}")]
    Render(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Render(msg) => {
                tracing::error!("Template render error: {msg}");
            }
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal server error occurred",
        )
            .into_response()
    }
}
