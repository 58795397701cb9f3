use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::DepartmentConfig;
use crate::domain::foundation::{TemplateAudience, TemplateCategory, TemplateTimeframe};

/// A named, audience-tagged dashboard for one (department, category) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub audience: TemplateAudience,
    pub timeframe: TemplateTimeframe,
    pub config: DepartmentConfig,
}

impl DepartmentTemplate {
    /// Creates a template carrying the static metadata of its category.
    pub fn for_category(category: TemplateCategory, config: DepartmentConfig) -> Self {
        let metadata = category.metadata();
        Self {
            id: category.as_str().to_string(),
            name: metadata.name.to_string(),
            description: metadata.description.to_string(),
            category,
            audience: metadata.audience,
            timeframe: metadata.timeframe,
            config,
        }
    }

    /// Metadata-only entry for selector listings.
    pub fn metadata_only(category: TemplateCategory) -> Self {
        Self::for_category(category, DepartmentConfig::placeholder())
    }
}

/// All templates of one (industry, department), keyed by template id.
///
/// Iteration order is insertion order, so "first entry" is well defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateBank(IndexMap<String, DepartmentTemplate>);

impl TemplateBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template: DepartmentTemplate) {
        self.0.insert(template.id.clone(), template);
    }

    pub fn get(&self, template_id: &str) -> Option<&DepartmentTemplate> {
        self.0.get(template_id)
    }

    pub fn first(&self) -> Option<&DepartmentTemplate> {
        self.0.values().next()
    }

    pub fn templates(&self) -> impl Iterator<Item = &DepartmentTemplate> {
        self.0.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<DepartmentTemplate> for TemplateBank {
    fn from_iter<I: IntoIterator<Item = DepartmentTemplate>>(iter: I) -> Self {
        let mut bank = TemplateBank::new();
        for template in iter {
            bank.insert(template);
        }
        bank
    }
}

/// Identifies the bank of one (industry, department) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankKey {
    pub industry_id: String,
    pub department_id: String,
}

impl BankKey {
    pub fn new(industry_id: impl Into<String>, department_id: impl Into<String>) -> Self {
        Self {
            industry_id: industry_id.into(),
            department_id: department_id.into(),
        }
    }
}

impl fmt::Display for BankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.industry_id, self.department_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_category_copies_metadata() {
        let template = DepartmentTemplate::metadata_only(TemplateCategory::AnomalyDetection);
        assert_eq!(template.id, "anomaly-detection");
        assert_eq!(template.name, "Anomaly Detection");
        assert_eq!(template.audience, TemplateAudience::Analyst);
        assert_eq!(template.timeframe, TemplateTimeframe::RealTime);
        assert!(template.config.is_placeholder());
    }

    #[test]
    fn bank_keeps_insertion_order() {
        let bank: TemplateBank = [
            TemplateCategory::TeamPerformance,
            TemplateCategory::ExecutiveOverview,
            TemplateCategory::CustomerImpact,
        ]
        .into_iter()
        .map(DepartmentTemplate::metadata_only)
        .collect();

        let ids: Vec<&str> = bank.ids().collect();
        assert_eq!(ids, vec!["team-performance", "executive-overview", "customer-impact"]);
        assert_eq!(bank.first().map(|t| t.category), Some(TemplateCategory::TeamPerformance));
    }

    #[test]
    fn bank_serializes_as_object_keyed_by_id() {
        let bank: TemplateBank = TemplateCategory::all()
            .iter()
            .copied()
            .map(DepartmentTemplate::metadata_only)
            .collect();

        let json = serde_json::to_string(&bank).unwrap();
        let restored: TemplateBank = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 10);
        assert_eq!(restored, bank);
        assert!(json.starts_with("{\"executive-overview\":"));
    }

    #[test]
    fn bank_key_displays_as_path() {
        assert_eq!(BankKey::new("finance", "accounts").to_string(), "finance/accounts");
    }
}
