//! # Request Body Extraction
//!
//! Handlers take `Result<Json<T>, JsonRejection>` so a malformed body is
//! reported in the API's own error shape instead of Axum's plain-text default.
//!
//! A request that carries no JSON body at all (no `Content-Type:
//! application/json`) is read as an empty object, so it reaches validation
//! and the store like `{}` would.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Extract a JSON body, mapping any rejection to [`AppError::BadRequest`].
///
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
///     // use req...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Like [`extract_json`], but a request without a JSON content type yields
/// `T::default()` instead of an error.
pub fn extract_json_or_default<T: Default>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    match result {
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        other => extract_json(other),
    }
}
