//! GetTemplateConfigHandler - Query handler resolving a dashboard configuration.
//!
//! Resolution order: exact template from the department's bank, then the
//! bank's executive overview or first entry, then on-demand synthesis.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::catalog::IndustryRegistry;
use crate::domain::dashboard::{BankKey, DepartmentConfig, DepartmentTemplate, TemplateBank};
use crate::domain::foundation::TemplateCategory;
use crate::domain::generation::{build_template, generic_base_kpis};
use crate::ports::TemplateBankLoader;

/// Query to resolve the dashboard of one (industry, department, template).
#[derive(Debug, Clone)]
pub struct GetTemplateConfigQuery {
    pub industry_id: String,
    pub department_id: String,
    /// Defaults to `executive-overview` when absent or empty.
    pub template_id: Option<String>,
}

impl GetTemplateConfigQuery {
    pub fn new(
        industry_id: impl Into<String>,
        department_id: impl Into<String>,
        template_id: Option<&str>,
    ) -> Self {
        Self {
            industry_id: industry_id.into(),
            department_id: department_id.into(),
            template_id: template_id.map(str::to_string),
        }
    }
}

/// Where a resolved template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionSource {
    /// The requested template, taken from the department's bank.
    Exact,
    /// The bank lacked the requested template; another bank entry was used.
    BankFallback,
    /// No usable bank; the template was generated on demand.
    Synthesized,
}

/// A resolved dashboard.
///
/// On `BankFallback` the template keeps its own id and category, which then
/// differ from the requested id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTemplate {
    pub template: DepartmentTemplate,
    pub config: DepartmentConfig,
    pub source: ResolutionSource,
}

impl ResolvedTemplate {
    fn new(template: DepartmentTemplate, source: ResolutionSource) -> Self {
        Self {
            config: template.config.clone(),
            template,
            source,
        }
    }
}

/// Handler for resolving template configurations.
pub struct GetTemplateConfigHandler {
    registry: Arc<IndustryRegistry>,
    loader: Arc<dyn TemplateBankLoader>,
}

impl GetTemplateConfigHandler {
    pub fn new(registry: Arc<IndustryRegistry>, loader: Arc<dyn TemplateBankLoader>) -> Self {
        Self { registry, loader }
    }

    /// Returns `None` only for an unknown or empty industry/department id.
    pub async fn handle(&self, query: GetTemplateConfigQuery) -> Option<ResolvedTemplate> {
        if query.industry_id.is_empty() || query.department_id.is_empty() {
            return None;
        }
        if self
            .registry
            .get_department(&query.industry_id, &query.department_id)
            .is_none()
        {
            debug!(
                industry = %query.industry_id,
                department = %query.department_id,
                "Unknown industry or department"
            );
            return None;
        }

        let template_id = query
            .template_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(TemplateCategory::DEFAULT.as_str());

        let key = BankKey::new(&query.industry_id, &query.department_id);
        match self.loader.load(&key).await {
            Ok(Some(bank)) if !bank.is_empty() => {
                if let Some(resolved) = resolve_from_bank(&bank, template_id) {
                    return Some(resolved);
                }
            }
            Ok(_) => {
                debug!(bank = %key, "No template bank, synthesizing");
            }
            Err(e) => {
                warn!(bank = %key, error = %e, "Failed to load template bank, synthesizing");
            }
        }

        Some(synthesize(&key, template_id))
    }
}

fn resolve_from_bank(bank: &TemplateBank, template_id: &str) -> Option<ResolvedTemplate> {
    if let Some(template) = bank.get(template_id) {
        return Some(ResolvedTemplate::new(template.clone(), ResolutionSource::Exact));
    }

    let fallback = bank
        .get(TemplateCategory::DEFAULT.as_str())
        .or_else(|| bank.first())?;
    debug!(
        requested = %template_id,
        resolved = %fallback.id,
        "Template missing from bank, using fallback"
    );
    Some(ResolvedTemplate::new(fallback.clone(), ResolutionSource::BankFallback))
}

fn synthesize(key: &BankKey, template_id: &str) -> ResolvedTemplate {
    let category = template_id.parse::<TemplateCategory>().unwrap_or_else(|_| {
        debug!(requested = %template_id, "Unknown template id, synthesizing default category");
        TemplateCategory::DEFAULT
    });
    let template = build_template(
        category,
        &key.industry_id,
        &key.department_id,
        &generic_base_kpis(),
    );
    ResolvedTemplate::new(template, ResolutionSource::Synthesized)
}
