//! Dashboard view models: KPI cards, charts, tables, insights and the
//! templates that bundle them.

pub mod config;
pub mod template;

pub use config::{
    round_to, ChartConfig, ChartType, DataPoint, DataValue, DepartmentConfig, Impact,
    InsightConfig, InsightType, KpiConfig, TableColumn, TableConfig, Trend,
};
pub use template::{BankKey, DepartmentTemplate, TemplateBank};
