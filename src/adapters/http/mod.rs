//! HTTP adapters - REST API implementations.

pub mod catalog;

pub use catalog::{catalog_router, CatalogAppState};
