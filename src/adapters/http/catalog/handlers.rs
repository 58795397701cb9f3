//! HTTP handlers for catalog endpoints.
//!
//! These handlers connect Axum routes to the catalog query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::catalog::{
    GetAvailableTemplatesHandler, GetAvailableTemplatesQuery, GetTemplateConfigHandler,
    GetTemplateConfigQuery, ResolvedTemplate,
};
use crate::domain::catalog::{Industry, IndustryRegistry};
use crate::ports::TemplateBankLoader;

use super::dto::{ErrorResponse, TemplateSummary};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Catalog API error that implements IntoResponse.
#[derive(Debug)]
pub enum CatalogApiError {
    IndustryNotFound(String),
    DepartmentNotFound { industry_id: String, department_id: String },
}

impl IntoResponse for CatalogApiError {
    fn into_response(self) -> axum::response::Response {
        let error = match self {
            CatalogApiError::IndustryNotFound(id) => ErrorResponse::not_found("Industry", &id),
            CatalogApiError::DepartmentNotFound {
                industry_id,
                department_id,
            } => ErrorResponse::not_found(
                "Department",
                &format!("{}/{}", industry_id, department_id),
            ),
        };
        (StatusCode::NOT_FOUND, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// App State
// ════════════════════════════════════════════════════════════════════════════════

/// Application state for catalog endpoints.
#[derive(Clone)]
pub struct CatalogAppState {
    pub registry: Arc<IndustryRegistry>,
    pub bank_loader: Arc<dyn TemplateBankLoader>,
}

impl CatalogAppState {
    pub fn new(registry: Arc<IndustryRegistry>, bank_loader: Arc<dyn TemplateBankLoader>) -> Self {
        Self {
            registry,
            bank_loader,
        }
    }

    pub fn template_config_handler(&self) -> GetTemplateConfigHandler {
        GetTemplateConfigHandler::new(self.registry.clone(), self.bank_loader.clone())
    }

    pub fn available_templates_handler(&self) -> GetAvailableTemplatesHandler {
        GetAvailableTemplatesHandler::new(self.registry.clone(), self.bank_loader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// HTTP Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/industries
pub async fn list_industries(State(state): State<CatalogAppState>) -> Json<Vec<Industry>> {
    Json(state.registry.industries().to_vec())
}

/// GET /api/industries/:industry_id
pub async fn get_industry(
    State(state): State<CatalogAppState>,
    Path(industry_id): Path<String>,
) -> Result<Json<Industry>, CatalogApiError> {
    state
        .registry
        .get_industry(&industry_id)
        .cloned()
        .map(Json)
        .ok_or(CatalogApiError::IndustryNotFound(industry_id))
}

/// GET /api/industries/:industry_id/departments/:department_id/templates
///
/// Lists template metadata for the department's selector.
pub async fn list_templates(
    State(state): State<CatalogAppState>,
    Path((industry_id, department_id)): Path<(String, String)>,
) -> Result<Json<Vec<TemplateSummary>>, CatalogApiError> {
    let query = GetAvailableTemplatesQuery::new(&industry_id, &department_id);
    let templates = state
        .available_templates_handler()
        .handle(query)
        .await
        .ok_or_else(|| not_found(&state, industry_id, department_id))?;

    Ok(Json(templates.into_iter().map(TemplateSummary::from).collect()))
}

/// GET /api/industries/:industry_id/departments/:department_id/dashboard
///
/// Resolves the department's default dashboard.
pub async fn get_default_dashboard(
    State(state): State<CatalogAppState>,
    Path((industry_id, department_id)): Path<(String, String)>,
) -> Result<Json<ResolvedTemplate>, CatalogApiError> {
    resolve(&state, industry_id, department_id, None).await
}

/// GET /api/industries/:industry_id/departments/:department_id/dashboard/:template_id
pub async fn get_dashboard(
    State(state): State<CatalogAppState>,
    Path((industry_id, department_id, template_id)): Path<(String, String, String)>,
) -> Result<Json<ResolvedTemplate>, CatalogApiError> {
    resolve(&state, industry_id, department_id, Some(&template_id)).await
}

async fn resolve(
    state: &CatalogAppState,
    industry_id: String,
    department_id: String,
    template_id: Option<&str>,
) -> Result<Json<ResolvedTemplate>, CatalogApiError> {
    let query = GetTemplateConfigQuery::new(&industry_id, &department_id, template_id);
    state
        .template_config_handler()
        .handle(query)
        .await
        .map(Json)
        .ok_or_else(|| not_found(state, industry_id, department_id))
}

fn not_found(state: &CatalogAppState, industry_id: String, department_id: String) -> CatalogApiError {
    if state.registry.get_industry(&industry_id).is_none() {
        CatalogApiError::IndustryNotFound(industry_id)
    } else {
        CatalogApiError::DepartmentNotFound {
            industry_id,
            department_id,
        }
    }
}
