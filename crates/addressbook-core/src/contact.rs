//! # Contact Records
//!
//! [`Contact`] is what the store holds and what every read returns.
//! [`ContactPayload`] is what clients submit on create and update: every
//! field is optional, and the validator decides which absences are errors.
//!
//! Wire names are camelCase. Optional fields that were never supplied are
//! omitted from serialized output rather than written as `null`.

use serde::{Deserialize, Serialize};

use crate::identity::ContactId;

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Generated at creation; never changes.
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "3f8a2c1e-6b4d-4e2a-9c7f-1d2e3f4a5b6c")
    )]
    pub id: ContactId,
    #[cfg_attr(feature = "openapi", schema(example = "Ada"))]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "Lovelace"))]
    pub last_name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "ada.lovelace@example.com"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "555-1234"))]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = json!(["Work"])))]
    pub tags: Option<Vec<String>>,
}

/// Candidate contact fields as submitted by a client.
///
/// Used unchanged for both create (validated in full mode) and update
/// (validated in partial mode). Unknown JSON fields, including `id`, are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "Ada"))]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "Lovelace"))]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "ada.lovelace@example.com"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "555-1234"))]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = json!(["Work"])))]
    pub tags: Option<Vec<String>>,
}

impl Contact {
    /// Build a record from a payload that already passed full validation.
    ///
    /// Required fields missing here can only mean the caller skipped
    /// validation; they fall back to empty strings rather than panicking.
    pub(crate) fn from_validated(id: ContactId, payload: ContactPayload) -> Self {
        Self {
            id,
            first_name: payload.first_name.unwrap_or_default(),
            last_name: payload.last_name,
            email: payload.email.unwrap_or_default(),
            phone: payload.phone,
            tags: payload.tags,
        }
    }

    /// Overwrite every field the payload supplies. `id` is never touched.
    pub(crate) fn merge(&mut self, payload: ContactPayload) {
        if let Some(first_name) = payload.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = payload.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(email) = payload.email {
            self.email = email;
        }
        if let Some(phone) = payload.phone {
            self.phone = Some(phone);
        }
        if let Some(tags) = payload.tags {
            self.tags = Some(tags);
        }
    }

    /// Whether first name, last name or email contains `needle`.
    ///
    /// `needle` must already be lowercase; field values are lowercased here.
    pub fn matches_search(&self, needle: &str) -> bool {
        let contains = |field: &str| !field.is_empty() && field.to_lowercase().contains(needle);
        contains(self.first_name.as_str())
            || self.last_name.as_deref().is_some_and(contains)
            || contains(self.email.as_str())
    }
}
