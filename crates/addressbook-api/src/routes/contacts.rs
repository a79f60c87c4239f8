//! # Contacts API
//!
//! CRUD over the in-memory contact store, plus substring search.
//!
//! ## Endpoints
//!
//! - `GET /contacts?search=`: list or search contacts
//! - `GET /contacts/{id}`: get one contact
//! - `POST /contacts`: create a contact
//! - `PUT /contacts/{id}`: partially update a contact
//! - `DELETE /contacts/{id}`: delete a contact
//!
//! Handlers hold no logic of their own: each one delegates to a single
//! [`ContactStore`](addressbook_core::ContactStore) operation and maps its
//! error through [`AppError`].

use addressbook_core::{Contact, ContactPayload};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::AppError;
use crate::extractors::extract_json_or_default;
use crate::state::AppState;

/// Query parameters for listing contacts.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListContactsQuery {
    /// Case-insensitive substring matched against first name, last name and email.
    pub search: Option<String>,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the contacts router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route(
            "/contacts/{id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /contacts: List contacts, optionally filtered by a search term.
#[utoipa::path(
    get,
    path = "/contacts",
    params(ListContactsQuery),
    responses(
        (status = 200, description = "List of contacts", body = Vec<Contact>),
    ),
    tag = "contacts"
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<ListContactsQuery>,
) -> Json<Vec<Contact>> {
    Json(state.contacts.list(query.search.as_deref()))
}

/// GET /contacts/{id}: Get a contact by id.
#[utoipa::path(
    get,
    path = "/contacts/{id}",
    params(("id" = String, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact found", body = Contact),
        (status = 404, description = "Contact not found", body = crate::error::MessageBody),
    ),
    tag = "contacts"
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, AppError> {
    Ok(Json(state.contacts.get(&id)?))
}

/// POST /contacts: Create a new contact.
#[utoipa::path(
    post,
    path = "/contacts",
    request_body = ContactPayload,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Validation error", body = crate::error::ErrorListBody),
    ),
    tag = "contacts"
)]
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let payload = extract_json_or_default(body)?;
    let contact = state.contacts.create(payload)?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /contacts/{id}: Update the supplied fields of a contact.
#[utoipa::path(
    put,
    path = "/contacts/{id}",
    params(("id" = String, Path, description = "Contact ID")),
    request_body = ContactPayload,
    responses(
        (status = 200, description = "Contact updated", body = Contact),
        (status = 400, description = "Validation error", body = crate::error::ErrorListBody),
        (status = 404, description = "Contact not found", body = crate::error::MessageBody),
    ),
    tag = "contacts"
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<Contact>, AppError> {
    let payload = extract_json_or_default(body)?;
    Ok(Json(state.contacts.update(&id, payload)?))
}

/// DELETE /contacts/{id}: Delete a contact.
#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    params(("id" = String, Path, description = "Contact ID")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "Contact not found", body = crate::error::MessageBody),
    ),
    tag = "contacts"
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.contacts.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
