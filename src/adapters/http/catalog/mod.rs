//! HTTP adapter for the dashboard catalog.
//!
//! Exposes industries, template listings and resolved dashboards as
//! read-only JSON endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, TemplateSummary};
pub use handlers::{CatalogApiError, CatalogAppState};
pub use routes::catalog_router;
