//! Axum extractors for request handling
//!
//! Custom extractors for validation and query-string filters.

mod filter;
mod validated;

pub use filter::GameFilter;
pub use validated::ValidatedJson;
