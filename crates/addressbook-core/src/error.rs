//! # Contact Errors
//!
//! The two failure kinds a contact operation can produce. Both are caused by
//! client input; there is no internal failure category in the domain.

use thiserror::Error;

/// Error returned by [`crate::ContactStore`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// No stored contact has the requested identifier.
    #[error("contact {0} not found")]
    NotFound(String),

    /// The payload violates the field rules. Messages are in validator order.
    #[error("contact validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}
