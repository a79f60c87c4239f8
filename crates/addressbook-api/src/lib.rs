//! # addressbook-api: Axum HTTP Service for the Address Book
//!
//! Exposes the in-memory contact store from `addressbook-core` over a JSON
//! REST API, with an OpenAPI 3 document and a Swagger UI page generated from
//! the same handler definitions.
//!
//! ## API Surface
//!
//! | Prefix               | Module                  | Domain              |
//! |----------------------|-------------------------|---------------------|
//! | `/contacts/*`        | [`routes::contacts`]    | Contact CRUD/search |
//! | `/`, `/health/*`     | [`routes::meta`]        | Banner and probes   |
//! | `/api-docs/*`        | [`openapi`]             | OpenAPI + Swagger UI|
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState, LogFormat};

use axum::Router;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::meta::router())
        .merge(routes::contacts::router())
        .merge(openapi::router())
        .layer(middleware::trace_layer())
        .layer(middleware::cors_layer())
        .with_state(state)
}
