//! # Service Metadata Routes
//!
//! - `GET /`: banner confirming the API is up and where the docs live
//! - `GET /health/liveness`: process is running
//! - `GET /health/readiness`: ready to serve requests

use axum::routing::get;
use axum::{Json, Router};

use crate::error::MessageBody;
use crate::state::AppState;

pub const BANNER: &str = "Address Book API — working. Swagger: /api-docs";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

/// GET /: Service banner.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is working", body = MessageBody),
    ),
    tag = "meta"
)]
pub async fn index() -> Json<MessageBody> {
    Json(MessageBody::new(BANNER))
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the store lives in process memory, so the service is
/// ready as soon as it is serving.
async fn readiness() -> &'static str {
    "ready"
}
