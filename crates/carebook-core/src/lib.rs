//! carebook-core
//!
//! Pure domain types for care-management forms: field descriptors, answer
//! values, the field hierarchy queries and the arena tree built from them.
//! No rendering backend and no HTTP client live here.

pub mod api_paths;
pub mod error;
pub mod link;
pub mod mapping;
pub mod models;
pub mod query;
pub mod tree;
pub mod validation;
