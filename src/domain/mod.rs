//! Domain aggregates exposed by the reporting service layer.

pub mod appointment;
pub mod catalog;
pub mod client;
pub mod sale;
pub mod status;
pub mod types;
