//! Raw store-document shapes and the tolerant normalizers that turn them
//! into domain aggregates. Nothing in this module errors on malformed
//! input: fields degrade to `None`/`0.0` and records without an id are
//! dropped by the repository layer.

pub mod appointment;
pub mod catalog;
pub mod client;
pub mod parse;
pub mod sale;
pub mod timestamp;
