//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps [`ContactError`] from `addressbook-core` to HTTP status codes.
//!
//! Two body shapes are used, matching the contact API contract:
//!
//! - `{"message": "..."}` for 404.
//! - `{"errors": ["...", ...]}` for 400, whether the body failed to parse or
//!   failed field validation.

use addressbook_core::ContactError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Client-facing message for any missing contact.
pub const CONTACT_NOT_FOUND: &str = "Contact not found";

/// Single-message response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Contact not found")]
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validation failure response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorListBody {
    #[schema(example = json!(["firstName is required", "email is invalid"]))]
    pub errors: Vec<String>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404). Carries the client-facing message.
    #[error("not found: {0}")]
    NotFound(String),

    /// Field validation failed (400).
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Return the HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound(message) => (status, Json(MessageBody::new(message))).into_response(),
            Self::Validation(errors) => {
                tracing::warn!(?errors, "rejected contact payload");
                (status, Json(ErrorListBody { errors })).into_response()
            }
            Self::BadRequest(reason) => {
                tracing::warn!(%reason, "unparseable request body");
                (status, Json(ErrorListBody { errors: vec![reason] })).into_response()
            }
        }
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::NotFound(id) => {
                tracing::debug!(contact_id = %id, "contact lookup missed");
                Self::NotFound(CONTACT_NOT_FOUND.to_string())
            }
            ContactError::ValidationFailed(errors) => Self::Validation(errors),
        }
    }
}
