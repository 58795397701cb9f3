//! Per-category charts for departments without a bespoke builder.

use crate::domain::dashboard::{ChartConfig, ChartType, DataPoint};
use crate::domain::foundation::TemplateCategory;

use super::{forecast_series, jitter, monthly};

/// `kebab-case` id to `Title Case` display name.
pub fn department_display_name(department_id: &str) -> String {
    department_id
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn category_point(key: &str, label: &str, field: &str, value: f64) -> DataPoint {
    DataPoint::new().with(key, label).with(field, value)
}

pub(super) fn charts(department_id: &str, category: TemplateCategory, seed: u32) -> Vec<ChartConfig> {
    let name = department_display_name(department_id);
    let base = 100.0 + jitter(seed, 1000);
    let variation = jitter(seed, 50);
    let j = |n| jitter(seed, n);

    match category {
        TemplateCategory::ExecutiveOverview => vec![
            ChartConfig::new(
                format!("{} Overview", name),
                "Key metrics summary",
                ChartType::Area,
                "month",
                &["value", "target"],
                monthly(|p, i| {
                    p.with("value", base + i * 5.0 + variation)
                        .with("target", base * 1.1 + i * 4.0)
                }),
            ),
            ChartConfig::new(
                format!("{} Performance", name),
                "By category",
                ChartType::Bar,
                "category",
                &["value"],
                vec![
                    category_point("category", "Category A", "value", 85.0 + j(10)),
                    category_point("category", "Category B", "value", 92.0 + j(8)),
                    category_point("category", "Category C", "value", 88.0 + j(6)),
                ],
            ),
        ],
        TemplateCategory::OperationalPerformance => vec![
            ChartConfig::new(
                format!("{} Operations", name),
                "Daily performance metrics",
                ChartType::Line,
                "month",
                &["performance", "target"],
                monthly(|p, i| {
                    p.with("performance", 85.0 + i * 1.5 + j(10))
                        .with("target", 90.0)
                }),
            ),
            ChartConfig::new(
                format!("{} Process Distribution", name),
                "By process type",
                ChartType::Bar,
                "process",
                &["value"],
                vec![
                    category_point("process", "Process A", "value", 45.0 + j(10)),
                    category_point("process", "Process B", "value", 35.0 + j(8)),
                    category_point("process", "Process C", "value", 20.0 + j(6)),
                ],
            ),
        ],
        TemplateCategory::FinancialImpact => vec![
            ChartConfig::new(
                format!("{} Financial Impact", name),
                "Revenue and costs",
                ChartType::Area,
                "month",
                &["revenue", "cost"],
                monthly(|p, i| {
                    p.with("revenue", base * 5.0 + i * 20.0 + variation)
                        .with("cost", base * 3.5 + i * 15.0)
                }),
            ),
            ChartConfig::new(
                format!("{} ROI Analysis", name),
                "Return on investment",
                ChartType::Line,
                "month",
                &["roi", "target"],
                monthly(|p, i| p.with("roi", 15.0 + i * 0.5 + j(5) / 10.0).with("target", 18.0)),
            ),
        ],
        TemplateCategory::RiskCompliance => vec![
            ChartConfig::new(
                format!("{} Risk Distribution", name),
                "By risk level",
                ChartType::Bar,
                "level",
                &["count"],
                vec![
                    category_point("level", "High", "count", 5.0 + j(5)),
                    category_point("level", "Medium", "count", 12.0 + j(8)),
                    category_point("level", "Low", "count", 45.0 + j(10)),
                ],
            ),
            ChartConfig::new(
                format!("{} Compliance Trend", name),
                "Compliance over time",
                ChartType::Line,
                "month",
                &["compliance", "target"],
                monthly(|p, i| {
                    p.with("compliance", 92.0 + i * 0.5 + j(5) / 10.0)
                        .with("target", 95.0)
                }),
            ),
        ],
        TemplateCategory::ForecastingPlanning => vec![
            ChartConfig::new(
                format!("{} Forecast", name),
                "Projected trends",
                ChartType::Area,
                "month",
                &["actual", "forecast"],
                forecast_series(
                    |i| base + i * 5.0 + variation,
                    |i| base * 1.15 + i * 6.0 + variation * 1.2,
                ),
            ),
            ChartConfig::new(
                format!("{} Growth Projections", name),
                "Future trends",
                ChartType::Line,
                "month",
                &["projected", "baseline"],
                monthly(|p, i| {
                    p.with("projected", base + i * 8.0 + variation)
                        .with("baseline", base + i * 3.0)
                }),
            ),
        ],
        TemplateCategory::ProcessOptimization => vec![
            ChartConfig::new(
                format!("{} Process Bottlenecks", name),
                "Performance analysis",
                ChartType::Bar,
                "step",
                &["time", "target"],
                vec![
                    category_point("step", "Step 1", "time", 45.0 + j(10)).with("target", 30.0),
                    category_point("step", "Step 2", "time", 60.0 + j(12)).with("target", 40.0),
                    category_point("step", "Step 3", "time", 35.0 + j(8)).with("target", 25.0),
                ],
            ),
            ChartConfig::new(
                format!("{} Optimization Impact", name),
                "Before vs after",
                ChartType::Line,
                "month",
                &["before", "after"],
                monthly(|p, i| {
                    p.with("before", base - i * 2.0 + variation)
                        .with("after", base - i * 5.0 + variation * 0.8)
                }),
            ),
        ],
        TemplateCategory::TeamPerformance => vec![
            ChartConfig::new(
                format!("{} Team Productivity", name),
                "Performance metrics",
                ChartType::Area,
                "month",
                &["productivity", "target"],
                monthly(|p, i| {
                    p.with("productivity", 75.0 + i * 2.0 + j(10))
                        .with("target", 80.0)
                }),
            ),
            ChartConfig::new(
                format!("{} Team Distribution", name),
                "By performance level",
                ChartType::Bar,
                "level",
                &["count"],
                vec![
                    category_point("level", "High", "count", 15.0 + j(5)),
                    category_point("level", "Medium", "count", 25.0 + j(8)),
                    category_point("level", "Low", "count", 5.0 + j(3)),
                ],
            ),
        ],
        TemplateCategory::CustomerImpact => vec![
            ChartConfig::new(
                format!("{} Customer Satisfaction", name),
                "CSAT trends",
                ChartType::Line,
                "month",
                &["satisfaction", "target"],
                monthly(|p, i| {
                    p.with("satisfaction", 85.0 + i + j(8))
                        .with("target", 90.0)
                }),
            ),
            ChartConfig::new(
                format!("{} Customer Metrics", name),
                "Key indicators",
                ChartType::Bar,
                "metric",
                &["value"],
                vec![
                    category_point("metric", "Retention", "value", 92.0 + j(5)),
                    category_point("metric", "Churn", "value", 8.0 - j(3)),
                    category_point("metric", "NPS", "value", 65.0 + j(10)),
                ],
            ),
        ],
        TemplateCategory::AnomalyDetection => vec![
            ChartConfig::new(
                format!("{} Anomaly Detection", name),
                "Unusual patterns",
                ChartType::Line,
                "month",
                &["normal", "anomaly"],
                monthly(|p, i| {
                    let spike = i == 2.0 || i == 4.0;
                    p.with("normal", base).with(
                        "anomaly",
                        if spike { base * 1.5 + variation } else { base },
                    )
                }),
            ),
            ChartConfig::new(
                format!("{} Anomaly Distribution", name),
                "By severity",
                ChartType::Bar,
                "severity",
                &["count"],
                vec![
                    category_point("severity", "Critical", "count", 2.0 + j(3)),
                    category_point("severity", "Warning", "count", 5.0 + j(4)),
                    category_point("severity", "Info", "count", 12.0 + j(6)),
                ],
            ),
        ],
        TemplateCategory::StrategicInsights => vec![
            ChartConfig::new(
                format!("{} Strategic Trends", name),
                "Long-term analysis",
                ChartType::Area,
                "month",
                &["trend", "benchmark"],
                monthly(|p, i| {
                    p.with("trend", base + i * 10.0 + variation)
                        .with("benchmark", base + i * 5.0)
                }),
            ),
            ChartConfig::new(
                format!("{} Strategic Metrics", name),
                "Key indicators",
                ChartType::Bar,
                "metric",
                &["value"],
                vec![
                    category_point("metric", "Growth", "value", 120.0 + j(20)),
                    category_point("metric", "Market Share", "value", 85.0 + j(15)),
                    category_point("metric", "Innovation", "value", 75.0 + j(10)),
                ],
            ),
        ],
    }
}
