//! Domain building blocks shared by the persistence and HTTP layers.

pub mod error;
pub mod resource;
pub mod types;
