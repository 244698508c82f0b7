//! Row models and request DTOs.
//!
//! Rust field names are English; the JSON wire names and the SQL column
//! names are the Portuguese ones the API has always exposed.

pub mod client;
pub mod sales_order;
pub mod vehicle;
