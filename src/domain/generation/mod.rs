//! Deterministic dashboard content generation.
//!
//! Pure functions: the same (industry, department, category) always produces
//! the same KPIs, charts, table and insights.

mod assembler;
mod base_kpis;
mod charts;
mod insights;
mod kpi;
mod seed;
mod table;

pub use assembler::{build_department_config, build_department_templates, build_template};
pub use base_kpis::{
    generic_base_kpis, get_base_kpis, industry_multiplier, BaseKpi, BaseKpiMap, DEFAULT_BASE_KPI,
};
pub use charts::{base_charts, generate_charts, pad_charts, CHART_COUNT};
pub use insights::{generate_insights, INSIGHT_COUNT};
pub use kpi::{format_value, generate_kpis, ValueFormat, KPI_COUNT};
pub use seed::{seed_hash, template_seed};
pub use table::generate_table;
