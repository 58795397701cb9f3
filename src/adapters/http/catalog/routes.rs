//! Route configuration for catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_dashboard, get_default_dashboard, get_industry, list_industries, list_templates,
    CatalogAppState,
};

/// Creates the catalog router with all endpoints.
///
/// Routes:
/// - `GET /api/industries` - All industries with their departments
/// - `GET /api/industries/:industry_id` - One industry
/// - `GET /api/industries/:industry_id/departments/:department_id/templates` - Template selector
/// - `GET /api/industries/:industry_id/departments/:department_id/dashboard` - Default dashboard
/// - `GET /api/industries/:industry_id/departments/:department_id/dashboard/:template_id` - Dashboard
pub fn catalog_router() -> Router<CatalogAppState> {
    Router::new()
        .route("/api/industries", get(list_industries))
        .route("/api/industries/:industry_id", get(get_industry))
        .route(
            "/api/industries/:industry_id/departments/:department_id/templates",
            get(list_templates),
        )
        .route(
            "/api/industries/:industry_id/departments/:department_id/dashboard",
            get(get_default_dashboard),
        )
        .route(
            "/api/industries/:industry_id/departments/:department_id/dashboard/:template_id",
            get(get_dashboard),
        )
}
