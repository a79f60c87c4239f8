//! # addressbook-core: Contact Domain for the Address Book API
//!
//! Everything the HTTP layer needs to manage contacts, without any HTTP:
//!
//! - [`Contact`] and [`ContactPayload`]: the stored record and the
//!   all-optional candidate that clients submit.
//! - [`validation`]: the write validator with `Full` (create) and `Partial`
//!   (update) modes.
//! - [`ContactStore`]: the in-memory collection and its five operations:
//!   list/search, get, create, update, delete.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `addressbook-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.
//! - OpenAPI schema derives are gated behind the `openapi` feature so the
//!   domain types carry no documentation dependency by default.

pub mod contact;
pub mod error;
pub mod identity;
pub mod store;
pub mod validation;

pub use contact::{Contact, ContactPayload};
pub use error::ContactError;
pub use identity::ContactId;
pub use store::ContactStore;
pub use validation::{validate, ValidationMode, ValidationReport};
