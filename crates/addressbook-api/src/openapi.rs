//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! generated from the same handler definitions the router mounts.
//!
//! - `GET /api-docs`: Swagger UI page
//! - `GET /api-docs/openapi.json`: the spec itself

use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Address Book API",
        version = "1.0.0",
        description = "Simple in-memory address book API with Swagger"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local server"),
    ),
    paths(
        crate::routes::meta::index,
        crate::routes::contacts::list_contacts,
        crate::routes::contacts::get_contact,
        crate::routes::contacts::create_contact,
        crate::routes::contacts::update_contact,
        crate::routes::contacts::delete_contact,
    ),
    components(schemas(
        addressbook_core::Contact,
        addressbook_core::ContactPayload,
        crate::error::MessageBody,
        crate::error::ErrorListBody,
    )),
    tags(
        (name = "contacts", description = "Contact records: list, search, create, update, delete"),
        (name = "meta", description = "Service status"),
    )
)]
pub struct ApiDoc;

const SPEC_PATH: &str = "/api-docs/openapi.json";

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Address Book API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// Build the documentation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api-docs", get(swagger_ui))
        .route(SPEC_PATH, get(openapi_json))
}

/// GET /api-docs/openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs: Interactive documentation rendered from the spec.
async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}
