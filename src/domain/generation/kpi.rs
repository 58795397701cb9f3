//! KPI adjuster and value formatter.

use crate::domain::dashboard::{round_to, KpiConfig, Trend};
use crate::domain::foundation::TemplateCategory;

use super::base_kpis::{BaseKpiMap, DEFAULT_BASE_KPI};

/// Number of KPI cards on every dashboard.
pub const KPI_COUNT: usize = 6;

/// Industries whose values are rendered as rupee amounts.
const CURRENCY_INDUSTRIES: &[&str] = &["finance", "banking", "insurance"];

/// Departments whose values are rendered as percentages.
const PERCENT_DEPARTMENTS: &[&str] = &["quality"];

/// Kebab segments that mark an unlisted department id as percent-valued.
const PERCENT_SEGMENTS: &[&str] = &["quality", "efficiency"];

/// How a KPI value is rendered for a given industry and department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `₹1.5Cr`, `₹2.5L`, `₹950`
    Currency,
    /// `92.5%`
    Percent,
    /// `2.5K`, `950`
    Compact,
}

impl ValueFormat {
    /// Resolves the format for an (industry, department) pair.
    pub fn for_context(industry_id: &str, department_id: &str) -> Self {
        if CURRENCY_INDUSTRIES.contains(&industry_id) {
            ValueFormat::Currency
        } else if is_percent_department(department_id) {
            ValueFormat::Percent
        } else {
            ValueFormat::Compact
        }
    }

    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Currency => {
                if value >= 10_000_000.0 {
                    format!("₹{}Cr", fixed(value / 10_000_000.0, 1))
                } else if value >= 100_000.0 {
                    format!("₹{}L", fixed(value / 100_000.0, 1))
                } else {
                    format!("₹{}", fixed(value, 0))
                }
            }
            ValueFormat::Percent => format!("{}%", fixed(value, 1)),
            ValueFormat::Compact => {
                if value >= 1000.0 {
                    format!("{}K", fixed(value / 1000.0, 1))
                } else {
                    fixed(value, 0)
                }
            }
        }
    }
}

fn is_percent_department(department_id: &str) -> bool {
    PERCENT_DEPARTMENTS.contains(&department_id)
        || department_id
            .split('-')
            .any(|segment| PERCENT_SEGMENTS.contains(&segment))
}

/// Fixed-point rendering with ties rounded away from zero.
fn fixed(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals as i32) + 0.0;
    format!("{:.*}", decimals, rounded)
}

/// Formats a KPI value for display in an (industry, department) context.
pub fn format_value(value: f64, industry_id: &str, department_id: &str) -> String {
    ValueFormat::for_context(industry_id, department_id).format(value)
}

enum ChangeRule {
    Keep,
    Scale(f64),
    ForceNegative,
}

/// Per-category multiplier on the value and rule for the change.
fn category_transform(category: TemplateCategory) -> (f64, ChangeRule) {
    use ChangeRule::*;

    match category {
        TemplateCategory::ExecutiveOverview => (1.0, Keep),
        TemplateCategory::OperationalPerformance => (0.95, Keep),
        TemplateCategory::FinancialImpact => (1.1, Keep),
        TemplateCategory::RiskCompliance => (0.9, ForceNegative),
        TemplateCategory::ForecastingPlanning => (1.05, Scale(1.2)),
        TemplateCategory::ProcessOptimization => (0.98, Scale(0.8)),
        TemplateCategory::TeamPerformance => (0.92, Keep),
        TemplateCategory::CustomerImpact => (1.08, Scale(1.1)),
        TemplateCategory::AnomalyDetection => (0.85, Scale(-1.5)),
        TemplateCategory::StrategicInsights => (1.15, Scale(1.3)),
    }
}

/// Builds exactly six KPI cards from a base metric map.
///
/// Slots cycle through the map's keys when it has fewer than six entries.
/// An empty map yields `KPI 1` to `KPI 6` at the default base value.
pub fn generate_kpis(
    category: TemplateCategory,
    industry_id: &str,
    department_id: &str,
    base_values: &BaseKpiMap,
) -> Vec<KpiConfig> {
    let format = ValueFormat::for_context(industry_id, department_id);
    let (value_factor, change_rule) = category_transform(category);

    (0..KPI_COUNT.max(base_values.len()))
        .map(|slot| {
            let (title, base) = match base_values.get_index(slot % base_values.len().max(1)) {
                Some((name, base)) => (name.clone(), *base),
                None => (format!("KPI {}", slot + 1), DEFAULT_BASE_KPI),
            };

            let value = base.value * value_factor;
            let change = match change_rule {
                ChangeRule::Keep => base.change,
                ChangeRule::Scale(factor) => base.change * factor,
                ChangeRule::ForceNegative => -base.change.abs(),
            };
            let change = round_to(change, 1) + 0.0;

            KpiConfig {
                title,
                value: format.format(value),
                change,
                trend: Trend::from_change(change),
                target: Some(format.format(value * 1.1)),
                change_label: None,
            }
        })
        .take(KPI_COUNT)
        .collect()
}
