//! Data Transfer Objects for catalog endpoints.

use serde::Serialize;

use crate::domain::dashboard::DepartmentTemplate;
use crate::domain::foundation::{TemplateAudience, TemplateCategory, TemplateTimeframe};

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }
}

/// Template selector entry, without the dashboard body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub audience: TemplateAudience,
    pub timeframe: TemplateTimeframe,
}

impl From<DepartmentTemplate> for TemplateSummary {
    fn from(template: DepartmentTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            description: template.description,
            category: template.category,
            audience: template.audience,
            timeframe: template.timeframe,
        }
    }
}
