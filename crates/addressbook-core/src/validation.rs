//! # Contact Validation
//!
//! Pure checks run before every write. Two modes:
//!
//! - [`ValidationMode::Full`] on create: `firstName` and `email` must be
//!   present and non-empty.
//! - [`ValidationMode::Partial`] on update: presence is not checked, since an
//!   update only carries the fields it changes.
//!
//! In both modes a non-empty `email` must have the shape `local@domain.tld`:
//! no whitespace or `@` in either part, and at least one `.` inside the
//! domain part with characters on both sides of it.
//!
//! An empty string counts as absent for the presence checks, and an empty
//! `email` is never shape-checked.

use std::sync::OnceLock;

use regex::Regex;

use crate::contact::ContactPayload;

pub const FIRST_NAME_REQUIRED: &str = "firstName is required";
pub const EMAIL_REQUIRED: &str = "email is required";
pub const EMAIL_INVALID: &str = "email is invalid";

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Which rule set a write is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Creation: required fields must be present.
    Full,
    /// Update: only supplied fields are checked.
    Partial,
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Human-readable messages in fixed order: first name, email presence,
    /// email shape.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// True iff no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a `Result`, yielding the error list on failure.
    pub fn into_result(self) -> Result<(), Vec<String>> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Whether `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn is_blank(field: Option<&str>) -> bool {
    field.map_or(true, str::is_empty)
}

/// Check a candidate contact against the rules for `mode`.
pub fn validate(payload: &ContactPayload, mode: ValidationMode) -> ValidationReport {
    let mut errors = Vec::new();

    if mode == ValidationMode::Full {
        if is_blank(payload.first_name.as_deref()) {
            errors.push(FIRST_NAME_REQUIRED.to_string());
        }
        if is_blank(payload.email.as_deref()) {
            errors.push(EMAIL_REQUIRED.to_string());
        }
    }

    if let Some(email) = payload.email.as_deref().filter(|e| !e.is_empty()) {
        if !is_valid_email(email) {
            errors.push(EMAIL_INVALID.to_string());
        }
    }

    ValidationReport { errors }
}
