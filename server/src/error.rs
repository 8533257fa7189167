//! Error taxonomy for the task API.
//!
//! Exactly two failure classes exist: validation faults map to 400 and
//! unknown-id lookups map to 404. Anything else propagates as a server
//! error without special handling. Axum rejects malformed JSON bodies with
//! 422 by default; those rejections are folded into the validation class so
//! every client-side fault surfaces as a single 400.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body, missing or empty name, name over the length limit,
    /// or a non-boolean completion flag.
    #[error("{0}")]
    Validation(String),

    /// No task exists with the requested id.
    #[error("task not found")]
    NotFound,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
