//! # API Route Modules
//!
//! - `contacts`: contact CRUD and search.
//! - `meta`: service banner and health probes.

pub mod contacts;
pub mod meta;
