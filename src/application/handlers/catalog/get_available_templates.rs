//! GetAvailableTemplatesHandler - Query handler for template selector listings.

use std::sync::Arc;

use tracing::warn;

use crate::domain::catalog::IndustryRegistry;
use crate::domain::dashboard::{BankKey, DepartmentTemplate};
use crate::domain::foundation::TemplateCategory;
use crate::ports::TemplateBankLoader;

/// Query to list the templates offered for one department.
#[derive(Debug, Clone)]
pub struct GetAvailableTemplatesQuery {
    pub industry_id: String,
    pub department_id: String,
}

impl GetAvailableTemplatesQuery {
    pub fn new(industry_id: impl Into<String>, department_id: impl Into<String>) -> Self {
        Self {
            industry_id: industry_id.into(),
            department_id: department_id.into(),
        }
    }
}

/// Handler for listing available templates.
///
/// Lists the bank's templates when the department has a bank, otherwise the
/// ten standard categories with placeholder configs.
pub struct GetAvailableTemplatesHandler {
    registry: Arc<IndustryRegistry>,
    loader: Arc<dyn TemplateBankLoader>,
}

impl GetAvailableTemplatesHandler {
    pub fn new(registry: Arc<IndustryRegistry>, loader: Arc<dyn TemplateBankLoader>) -> Self {
        Self { registry, loader }
    }

    /// Returns `None` for an unknown industry or department.
    pub async fn handle(&self, query: GetAvailableTemplatesQuery) -> Option<Vec<DepartmentTemplate>> {
        self.registry
            .get_department(&query.industry_id, &query.department_id)?;

        let key = BankKey::new(&query.industry_id, &query.department_id);
        let bank = match self.loader.load(&key).await {
            Ok(bank) => bank,
            Err(e) => {
                warn!(bank = %key, error = %e, "Failed to load template bank for listing");
                None
            }
        };

        let templates = match bank {
            Some(bank) if !bank.is_empty() => bank.templates().cloned().collect(),
            _ => standard_templates(),
        };
        Some(templates)
    }
}

/// Metadata-only entries for the ten standard categories.
pub fn standard_templates() -> Vec<DepartmentTemplate> {
    TemplateCategory::all()
        .iter()
        .copied()
        .map(DepartmentTemplate::metadata_only)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::bank::InMemoryTemplateBanks;
    use crate::domain::dashboard::TemplateBank;
    use crate::ports::BankLoadError;
    use async_trait::async_trait;

    struct FailingLoader;

    #[async_trait]
    impl TemplateBankLoader for FailingLoader {
        async fn load(&self, key: &BankKey) -> Result<Option<TemplateBank>, BankLoadError> {
            Err(BankLoadError::Io {
                key: key.clone(),
                message: "Simulated failure".to_string(),
            })
        }
    }

    fn registry() -> Arc<IndustryRegistry> {
        Arc::new(IndustryRegistry::standard())
    }

    #[tokio::test]
    async fn lists_bank_templates_when_present() {
        let banks = InMemoryTemplateBanks::builder().lazy(registry()).build();
        let handler = GetAvailableTemplatesHandler::new(registry(), Arc::new(banks));

        let templates = handler
            .handle(GetAvailableTemplatesQuery::new("retail", "store-ops"))
            .await
            .unwrap();

        assert_eq!(templates.len(), 10);
        assert!(templates.iter().all(|t| !t.config.is_placeholder()));
    }

    #[tokio::test]
    async fn lists_placeholders_without_bank() {
        let handler = GetAvailableTemplatesHandler::new(registry(), Arc::new(InMemoryTemplateBanks::new()));

        let templates = handler
            .handle(GetAvailableTemplatesQuery::new("retail", "store-ops"))
            .await
            .unwrap();

        let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        let expected: Vec<&str> = TemplateCategory::all().iter().map(|c| c.as_str()).collect();
        assert_eq!(ids, expected);
        assert!(templates.iter().all(|t| t.config.is_placeholder()));
    }

    #[tokio::test]
    async fn load_failure_lists_placeholders() {
        let handler = GetAvailableTemplatesHandler::new(registry(), Arc::new(FailingLoader));

        let templates = handler
            .handle(GetAvailableTemplatesQuery::new("finance", "accounts"))
            .await
            .unwrap();

        assert_eq!(templates.len(), 10);
    }

    #[tokio::test]
    async fn unknown_department_returns_none() {
        let handler = GetAvailableTemplatesHandler::new(registry(), Arc::new(InMemoryTemplateBanks::new()));

        assert!(handler
            .handle(GetAvailableTemplatesQuery::new("retail", "treasury"))
            .await
            .is_none());
    }
}
