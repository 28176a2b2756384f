// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 500: the model returned no `{`..`}` payload at all
    UpstreamFormat { raw: String },

    // 500: the extracted payload was not valid JSON
    UpstreamParse { raw: String, detail: String },

    // 500: the completion request itself failed (network, auth, rate limit
    // are not distinguished)
    Upstream(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
/// Upstream format/parse failures attach the raw model output so the client
/// can see what the model actually said.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::UpstreamFormat { raw } => {
                tracing::error!("No JSON found in model output: {}", raw);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "No JSON found in model output",
                        "raw_output": raw,
                    }),
                )
            }
            AppError::UpstreamParse { raw, detail } => {
                tracing::error!("Model did not return valid JSON ({}): {}", detail, raw);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Model did not return valid JSON",
                        "raw_output": raw,
                    }),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream completion request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Upstream completion request failed" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Converts `reqwest::Error` into `AppError::Upstream`.
/// Allows using `?` operator on gateway calls.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}
