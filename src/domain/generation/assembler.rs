//! Template assembler: builds complete dashboards from the generators.

use crate::domain::dashboard::{DepartmentConfig, DepartmentTemplate, TemplateBank};
use crate::domain::foundation::TemplateCategory;

use super::base_kpis::BaseKpiMap;
use super::charts::generate_charts;
use super::insights::generate_insights;
use super::kpi::generate_kpis;
use super::table::generate_table;

/// Generates the full config of one template.
pub fn build_department_config(
    category: TemplateCategory,
    industry_id: &str,
    department_id: &str,
    base_kpis: &BaseKpiMap,
) -> DepartmentConfig {
    DepartmentConfig {
        kpis: generate_kpis(category, industry_id, department_id, base_kpis),
        charts: generate_charts(category, industry_id, department_id),
        table: generate_table(category, industry_id, department_id),
        insights: generate_insights(category, industry_id, department_id),
    }
}

/// Builds the template of one category with its static metadata attached.
pub fn build_template(
    category: TemplateCategory,
    industry_id: &str,
    department_id: &str,
    base_kpis: &BaseKpiMap,
) -> DepartmentTemplate {
    DepartmentTemplate::for_category(
        category,
        build_department_config(category, industry_id, department_id, base_kpis),
    )
}

/// Builds all ten templates of a department, keyed by category id in
/// canonical order.
pub fn build_department_templates(
    industry_id: &str,
    department_id: &str,
    base_kpis: &BaseKpiMap,
) -> TemplateBank {
    TemplateCategory::all()
        .iter()
        .map(|category| build_template(*category, industry_id, department_id, base_kpis))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{TemplateAudience, TemplateTimeframe};
    use crate::domain::generation::base_kpis::get_base_kpis;

    #[test]
    fn bank_has_ten_templates_in_canonical_order() {
        let bank = build_department_templates("finance", "accounts", &get_base_kpis("finance", "accounts"));
        let ids: Vec<&str> = bank.ids().collect();
        let expected: Vec<&str> = TemplateCategory::all().iter().map(|c| c.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn every_template_satisfies_size_invariants() {
        let bank = build_department_templates("manufacturing", "production", &get_base_kpis("manufacturing", "production"));
        for template in bank.templates() {
            assert_eq!(template.id, template.category.as_str());
            assert_eq!(template.config.kpis.len(), 6);
            assert_eq!(template.config.charts.len(), 10);
            assert_eq!(template.config.insights.len(), 4);
            assert_eq!(template.config.table.data.len(), 10);
        }
    }

    #[test]
    fn metadata_comes_from_category() {
        let bank = build_department_templates("hr", "talent", &get_base_kpis("hr", "talent"));
        let Some(risk) = bank.get("risk-compliance") else {
            panic!("missing risk-compliance template");
        };
        assert_eq!(risk.name, "Risk & Compliance");
        assert_eq!(risk.audience, TemplateAudience::Manager);
        assert_eq!(risk.timeframe, TemplateTimeframe::Weekly);
    }

    #[test]
    fn kpis_use_department_base_values() {
        let bank = build_department_templates("finance", "accounts", &get_base_kpis("finance", "accounts"));
        let Some(overview) = bank.get("executive-overview") else {
            panic!("missing executive-overview template");
        };
        assert_eq!(overview.config.kpis[0].title, "Total Revenue");
        assert_eq!(overview.config.kpis[0].value, "₹15.0L");
    }

    #[test]
    fn assembly_is_deterministic() {
        let base = get_base_kpis("retail", "store-ops");
        assert_eq!(
            build_department_templates("retail", "store-ops", &base),
            build_department_templates("retail", "store-ops", &base)
        );
    }
}
