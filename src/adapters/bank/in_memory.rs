//! In-Memory Template Bank Registry
//!
//! Holds precomputed banks keyed by "industry/department". Banks are either
//! seeded up front from the industry registry or, in lazy mode, built on
//! first request and kept.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::catalog::IndustryRegistry;
use crate::domain::dashboard::{BankKey, TemplateBank};
use crate::domain::generation::{build_department_templates, get_base_kpis};
use crate::ports::{BankLoadError, TemplateBankLoader};

/// Builds the bank of a department from its real base KPIs.
pub fn build_bank(key: &BankKey) -> TemplateBank {
    let base = get_base_kpis(&key.industry_id, &key.department_id);
    build_department_templates(&key.industry_id, &key.department_id, &base)
}

/// In-memory template bank registry
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateBanks {
    banks: Arc<RwLock<HashMap<BankKey, TemplateBank>>>,
    lazy_registry: Option<Arc<IndustryRegistry>>,
}

impl InMemoryTemplateBanks {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> InMemoryTemplateBanksBuilder {
        InMemoryTemplateBanksBuilder::default()
    }

    /// Store or replace a bank
    pub async fn insert(&self, key: BankKey, bank: TemplateBank) {
        self.banks.write().await.insert(key, bank);
    }

    /// Number of banks currently held
    pub async fn bank_count(&self) -> usize {
        self.banks.read().await.len()
    }

    /// Drop all banks (useful for tests)
    pub async fn clear(&self) {
        self.banks.write().await.clear();
    }

    fn can_build(&self, key: &BankKey) -> bool {
        self.lazy_registry
            .as_ref()
            .is_some_and(|registry| {
                registry
                    .get_department(&key.industry_id, &key.department_id)
                    .is_some()
            })
    }
}

#[async_trait]
impl TemplateBankLoader for InMemoryTemplateBanks {
    async fn load(&self, key: &BankKey) -> Result<Option<TemplateBank>, BankLoadError> {
        if let Some(bank) = self.banks.read().await.get(key) {
            return Ok(Some(bank.clone()));
        }

        if !self.can_build(key) {
            return Ok(None);
        }

        let mut banks = self.banks.write().await;
        let bank = banks.entry(key.clone()).or_insert_with(|| {
            debug!(bank = %key, "Building template bank on first request");
            build_bank(key)
        });
        Ok(Some(bank.clone()))
    }
}

/// Builder for [`InMemoryTemplateBanks`]
#[derive(Debug, Default)]
pub struct InMemoryTemplateBanksBuilder {
    banks: HashMap<BankKey, TemplateBank>,
    lazy_registry: Option<Arc<IndustryRegistry>>,
}

impl InMemoryTemplateBanksBuilder {
    pub fn with_bank(mut self, key: BankKey, bank: TemplateBank) -> Self {
        self.banks.insert(key, bank);
        self
    }

    /// Precompute the bank of every department in the registry
    pub fn seed_from_registry(mut self, registry: &IndustryRegistry) -> Self {
        for (industry, department) in registry.department_pairs() {
            let key = BankKey::new(&industry.id, &department.id);
            let bank = build_bank(&key);
            self.banks.insert(key, bank);
        }
        self
    }

    /// Build banks of registered departments on first request
    pub fn lazy(mut self, registry: Arc<IndustryRegistry>) -> Self {
        self.lazy_registry = Some(registry);
        self
    }

    pub fn build(self) -> InMemoryTemplateBanks {
        InMemoryTemplateBanks {
            banks: Arc::new(RwLock::new(self.banks)),
            lazy_registry: self.lazy_registry,
        }
    }
}
