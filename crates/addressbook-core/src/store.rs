//! # In-Memory Contact Store
//!
//! Owns the collection of contacts and implements the five operations the
//! API exposes. Records live in a map keyed by [`ContactId`], so identifier
//! uniqueness is structural; a separate id sequence preserves insertion
//! order for listing.
//!
//! ## Concurrency
//!
//! The table sits behind a `parking_lot::RwLock`. Every operation takes the
//! lock once and holds it for its whole duration, so operations never
//! interleave: an update's existence check, validation and merge happen
//! under a single write guard. The lock is never held across an `.await`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::contact::{Contact, ContactPayload};
use crate::error::ContactError;
use crate::identity::ContactId;
use crate::validation::{validate, ValidationMode};

#[derive(Debug, Default)]
struct ContactTable {
    records: HashMap<ContactId, Contact>,
    order: Vec<ContactId>,
}

impl ContactTable {
    fn iter_ordered(&self) -> impl Iterator<Item = &Contact> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }
}

/// Thread-safe, cloneable contact collection. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    table: Arc<RwLock<ContactTable>>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the two demonstration contacts.
    pub fn seeded() -> Self {
        let store = Self::new();
        for payload in demo_contacts() {
            if let Err(err) = store.create(payload) {
                tracing::warn!(error = %err, "skipping invalid seed contact");
            }
        }
        store
    }

    /// List contacts in insertion order.
    ///
    /// With a non-empty `search`, keep only contacts whose first name, last
    /// name or email contains it, ignoring case. An empty search string is
    /// the same as no search.
    pub fn list(&self, search: Option<&str>) -> Vec<Contact> {
        let table = self.table.read();
        let results: Vec<Contact> = match search.filter(|s| !s.is_empty()) {
            Some(term) => {
                let needle = term.to_lowercase();
                table
                    .iter_ordered()
                    .filter(|c| c.matches_search(&needle))
                    .cloned()
                    .collect()
            }
            None => table.iter_ordered().cloned().collect(),
        };
        tracing::debug!(search = ?search, count = results.len(), "listed contacts");
        results
    }

    /// Fetch one contact by its wire identifier.
    pub fn get(&self, id: &str) -> Result<Contact, ContactError> {
        let key = parse_id(id)?;
        self.table
            .read()
            .records
            .get(&key)
            .cloned()
            .ok_or_else(|| ContactError::NotFound(id.to_string()))
    }

    /// Validate `payload` in full mode and store it under a fresh identifier.
    pub fn create(&self, payload: ContactPayload) -> Result<Contact, ContactError> {
        validate(&payload, ValidationMode::Full)
            .into_result()
            .map_err(ContactError::ValidationFailed)?;

        let mut table = self.table.write();
        let mut id = ContactId::new();
        while table.records.contains_key(&id) {
            id = ContactId::new();
        }
        let contact = Contact::from_validated(id, payload);
        table.records.insert(id, contact.clone());
        table.order.push(id);
        drop(table);

        tracing::info!(contact_id = %id, "contact created");
        Ok(contact)
    }

    /// Merge `payload` into an existing contact.
    ///
    /// A missing contact is reported before the payload is validated.
    /// Validation runs in partial mode; on failure nothing changes.
    pub fn update(&self, id: &str, payload: ContactPayload) -> Result<Contact, ContactError> {
        let key = parse_id(id)?;
        let mut table = self.table.write();
        let contact = table
            .records
            .get_mut(&key)
            .ok_or_else(|| ContactError::NotFound(id.to_string()))?;

        validate(&payload, ValidationMode::Partial)
            .into_result()
            .map_err(ContactError::ValidationFailed)?;

        contact.merge(payload);
        let updated = contact.clone();
        drop(table);

        tracing::info!(contact_id = %key, "contact updated");
        Ok(updated)
    }

    /// Remove a contact permanently.
    pub fn delete(&self, id: &str) -> Result<(), ContactError> {
        let key = parse_id(id)?;
        let mut table = self.table.write();
        if table.records.remove(&key).is_none() {
            return Err(ContactError::NotFound(id.to_string()));
        }
        table.order.retain(|existing| *existing != key);
        drop(table);

        tracing::info!(contact_id = %key, "contact deleted");
        Ok(())
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.table.read().records.len()
    }

    /// Whether the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_id(id: &str) -> Result<ContactId, ContactError> {
    ContactId::parse(id).ok_or_else(|| ContactError::NotFound(id.to_string()))
}

fn demo_contacts() -> [ContactPayload; 2] {
    [
        ContactPayload {
            first_name: Some("Alan".into()),
            last_name: Some("Turing".into()),
            email: Some("alan.turing@auring.com".into()),
            phone: Some("123456789".into()),
            tags: Some(vec!["Work".into()]),
        },
        ContactPayload {
            first_name: Some("Marie".into()),
            last_name: Some("Curie".into()),
            email: Some("marie.curie@mail.com".into()),
            phone: Some("987654321".into()),
            tags: Some(vec!["Family".into()]),
        },
    ]
}
