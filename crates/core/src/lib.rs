//! Domain layer for the padaria inventory service.
//!
//! Holds the product types, identifier parsing, the record store seam and
//! the check-then-delete operation shared by the HTTP API and the client.

pub mod deletion;
pub mod error;
pub mod identifier;
pub mod product;
pub mod store;
pub mod types;
