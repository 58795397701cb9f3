//! Industry registry - the static catalog of industries and departments.

use super::industry::{Department, Industry};

/// Ordered, immutable set of industries known to the catalog.
#[derive(Debug, Clone, Default)]
pub struct IndustryRegistry {
    industries: Vec<Industry>,
}

impl IndustryRegistry {
    /// The catalog shipped with the application.
    pub fn standard() -> Self {
        Self::builder()
            .industry("manufacturing", "Manufacturing", "hsl(24, 95%, 53%)")
            .industry("healthcare", "Healthcare", "hsl(350, 89%, 60%)")
            .industry("retail", "Retail", "hsl(339, 90%, 51%)")
            .industry("finance", "Finance", "hsl(142, 71%, 45%)")
            .industry("hr", "HR & People Analytics", "hsl(291, 64%, 42%)")
            .build()
    }

    pub fn builder() -> IndustryRegistryBuilder {
        IndustryRegistryBuilder::default()
    }

    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    pub fn get_industry(&self, industry_id: &str) -> Option<&Industry> {
        self.industries.iter().find(|i| i.id == industry_id)
    }

    pub fn get_department(&self, industry_id: &str, department_id: &str) -> Option<&Department> {
        self.get_industry(industry_id)?.department(department_id)
    }

    /// Every registered (industry, department) pair, in display order.
    pub fn department_pairs(&self) -> impl Iterator<Item = (&Industry, &Department)> {
        self.industries
            .iter()
            .flat_map(|industry| industry.departments.iter().map(move |d| (industry, d)))
    }
}

/// Collects industries in registration order.
///
/// Registering an id twice replaces the earlier entry in place.
#[derive(Debug, Default)]
pub struct IndustryRegistryBuilder {
    industries: Vec<Industry>,
}

impl IndustryRegistryBuilder {
    pub fn industry(self, id: &str, name: &str, color_token: &str) -> Self {
        self.with_industry(Industry::new(id, name, color_token))
    }

    pub fn with_industry(mut self, industry: Industry) -> Self {
        match self.industries.iter_mut().find(|i| i.id == industry.id) {
            Some(existing) => *existing = industry,
            None => self.industries.push(industry),
        }
        self
    }

    pub fn build(self) -> IndustryRegistry {
        IndustryRegistry {
            industries: self.industries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_five_industries_in_order() {
        let registry = IndustryRegistry::standard();
        let ids: Vec<&str> = registry.industries().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["manufacturing", "healthcare", "retail", "finance", "hr"]);
    }

    #[test]
    fn get_industry_returns_none_for_unknown_id() {
        let registry = IndustryRegistry::standard();
        assert!(registry.get_industry("not-an-industry").is_none());
        assert_eq!(
            registry.get_industry("finance").map(|i| i.color_token.as_str()),
            Some("hsl(142, 71%, 45%)")
        );
    }

    #[test]
    fn get_department_resolves_within_industry_only() {
        let registry = IndustryRegistry::standard();
        assert!(registry.get_department("finance", "accounts").is_some());
        assert!(registry.get_department("finance", "treasury").is_some());
        assert!(registry.get_department("finance", "production").is_none());
        assert!(registry.get_department("not-an-industry", "accounts").is_none());
    }

    #[test]
    fn builder_replaces_duplicate_ids() {
        let registry = IndustryRegistry::builder()
            .industry("banking", "Banking", "hsl(0, 0%, 0%)")
            .industry("retail", "Retail", "hsl(1, 1%, 1%)")
            .industry("banking", "Banking & Credit", "hsl(2, 2%, 2%)")
            .build();

        assert_eq!(registry.industries().len(), 2);
        assert_eq!(registry.industries()[0].name, "Banking & Credit");
        assert!(registry.get_department("banking", "lending").is_some());
        assert!(registry.get_department("banking", "risk").is_some());
    }

    #[test]
    fn department_pairs_covers_every_department() {
        let registry = IndustryRegistry::standard();
        let expected: usize = registry.industries().iter().map(|i| i.departments.len()).sum();
        assert_eq!(registry.department_pairs().count(), expected);
    }
}
