//! Bespoke charts for the manufacturing production department.

use crate::domain::dashboard::{ChartConfig, ChartType, DataPoint};
use crate::domain::foundation::TemplateCategory;

use super::{forecast_series, jitter, monthly};

fn labelled(key: &str, label: &str) -> DataPoint {
    DataPoint::new().with(key, label)
}

pub(super) fn charts(category: TemplateCategory, seed: u32) -> Vec<ChartConfig> {
    let j = |n| jitter(seed, n);

    match category {
        TemplateCategory::ExecutiveOverview => vec![
            ChartConfig::new(
                "Production Output Overview",
                "Monthly production volume and efficiency",
                ChartType::Area,
                "month",
                &["output", "target", "efficiency"],
                monthly(|p, i| {
                    p.with("output", 10000.0 + i * 500.0 + j(1000))
                        .with("target", 10500.0 + i * 400.0)
                        .with("efficiency", 85.0 + i * 1.5)
                }),
            ),
            ChartConfig::new(
                "OEE by Production Line",
                "Overall Equipment Effectiveness",
                ChartType::Bar,
                "line",
                &["oee", "target"],
                vec![
                    labelled("line", "Line A").with("oee", 88.0 + j(5)).with("target", 85.0),
                    labelled("line", "Line B").with("oee", 92.0 + j(3)).with("target", 85.0),
                    labelled("line", "Line C").with("oee", 85.0 + j(4)).with("target", 85.0),
                    labelled("line", "Line D").with("oee", 90.0 + j(2)).with("target", 85.0),
                ],
            ),
        ],
        TemplateCategory::OperationalPerformance => vec![
            ChartConfig::new(
                "Real-Time Production Rate",
                "Units per hour",
                ChartType::Line,
                "month",
                &["rate", "target"],
                monthly(|p, i| p.with("rate", 450.0 + i * 15.0 + j(50)).with("target", 500.0)),
            ),
            ChartConfig::new(
                "Machine Utilization",
                "By equipment type",
                ChartType::Bar,
                "equipment",
                &["utilization"],
                vec![
                    labelled("equipment", "CNC").with("utilization", 92.0 + j(5)),
                    labelled("equipment", "Assembly").with("utilization", 88.0 + j(4)),
                    labelled("equipment", "Packaging").with("utilization", 85.0 + j(3)),
                ],
            ),
        ],
        TemplateCategory::FinancialImpact => vec![
            ChartConfig::new(
                "Production Cost Analysis",
                "Cost per unit trends",
                ChartType::Area,
                "month",
                &["material", "labor", "overhead"],
                monthly(|p, i| {
                    p.with("material", 25.0 - i * 0.5 + j(3) / 10.0)
                        .with("labor", 15.0 - i * 0.3 + j(2) / 10.0)
                        .with("overhead", 10.0 - i * 0.2)
                }),
            )
            .stacked(),
            ChartConfig::new(
                "Production ROI",
                "Return on production investment",
                ChartType::Line,
                "month",
                &["roi", "target"],
                monthly(|p, i| p.with("roi", 18.0 + i * 0.8 + j(5) / 10.0).with("target", 20.0)),
            ),
        ],
        TemplateCategory::RiskCompliance => vec![
            ChartConfig::new(
                "Safety Incidents",
                "By severity level",
                ChartType::Bar,
                "severity",
                &["count"],
                vec![
                    labelled("severity", "Critical").with("count", j(2)),
                    labelled("severity", "High").with("count", 2.0 + j(3)),
                    labelled("severity", "Medium").with("count", 5.0 + j(4)),
                    labelled("severity", "Low").with("count", 12.0 + j(5)),
                ],
            ),
            ChartConfig::new(
                "Compliance Score",
                "Quality and safety compliance",
                ChartType::Line,
                "month",
                &["compliance", "target"],
                monthly(|p, i| {
                    p.with("compliance", 95.0 + i * 0.3 + j(3) / 10.0)
                        .with("target", 98.0)
                }),
            ),
        ],
        TemplateCategory::ForecastingPlanning => vec![
            ChartConfig::new(
                "Production Forecast",
                "Projected vs planned output",
                ChartType::Area,
                "month",
                &["actual", "forecast"],
                forecast_series(
                    |i| 10000.0 + i * 500.0 + j(1000),
                    |i| 11500.0 + i * 600.0 + j(1500),
                ),
            ),
            ChartConfig::new(
                "Capacity Planning",
                "Future capacity requirements",
                ChartType::Line,
                "month",
                &["required", "available"],
                monthly(|p, i| {
                    p.with("required", 12000.0 + i * 800.0 + j(2000))
                        .with("available", 15000.0)
                }),
            ),
        ],
        TemplateCategory::ProcessOptimization => vec![
            ChartConfig::new(
                "Bottleneck Analysis",
                "Process step performance",
                ChartType::Bar,
                "step",
                &["time", "target"],
                vec![
                    labelled("step", "Raw Material").with("time", 2.5 + j(5) / 10.0).with("target", 2.0),
                    labelled("step", "Processing").with("time", 8.5 + j(8) / 10.0).with("target", 7.0),
                    labelled("step", "Quality Check").with("time", 1.5 + j(3) / 10.0).with("target", 1.0),
                    labelled("step", "Packaging").with("time", 3.0 + j(4) / 10.0).with("target", 2.5),
                ],
            ),
            ChartConfig::new(
                "Optimization Impact",
                "Before vs after improvements",
                ChartType::Line,
                "month",
                &["before", "after"],
                monthly(|p, i| {
                    p.with("before", 100.0 - i * 3.0 + j(10))
                        .with("after", 100.0 - i * 6.0 + j(15))
                }),
            ),
        ],
        TemplateCategory::TeamPerformance => vec![
            ChartConfig::new(
                "Production Team Productivity",
                "Output per team member",
                ChartType::Area,
                "month",
                &["productivity", "target"],
                monthly(|p, i| {
                    p.with("productivity", 85.0 + i * 2.0 + j(8))
                        .with("target", 90.0)
                }),
            ),
            ChartConfig::new(
                "Team Performance Distribution",
                "By shift",
                ChartType::Bar,
                "shift",
                &["performance"],
                vec![
                    labelled("shift", "Morning").with("performance", 92.0 + j(5)),
                    labelled("shift", "Afternoon").with("performance", 88.0 + j(4)),
                    labelled("shift", "Night").with("performance", 85.0 + j(3)),
                ],
            ),
        ],
        TemplateCategory::CustomerImpact => vec![
            ChartConfig::new(
                "On-Time Delivery",
                "Customer delivery performance",
                ChartType::Line,
                "month",
                &["delivery", "target"],
                monthly(|p, i| p.with("delivery", 92.0 + i + j(5)).with("target", 95.0)),
            ),
            ChartConfig::new(
                "Quality Metrics",
                "Customer satisfaction indicators",
                ChartType::Bar,
                "metric",
                &["value"],
                vec![
                    labelled("metric", "Defect Rate").with("value", 0.8 + j(5) / 10.0),
                    labelled("metric", "Rework Rate").with("value", 2.5 + j(3) / 10.0),
                    labelled("metric", "Customer Returns").with("value", 1.2 + j(2) / 10.0),
                ],
            ),
        ],
        TemplateCategory::AnomalyDetection => vec![
            ChartConfig::new(
                "Production Anomalies",
                "Unusual patterns detected",
                ChartType::Line,
                "month",
                &["normal", "anomaly"],
                monthly(|p, i| {
                    let spike = i == 2.0 || i == 4.0;
                    p.with("normal", 100.0)
                        .with("anomaly", if spike { 150.0 + j(20) } else { 100.0 })
                }),
            ),
            ChartConfig::new(
                "Anomaly Distribution",
                "By type",
                ChartType::Bar,
                "type",
                &["count"],
                vec![
                    labelled("type", "Equipment Failure").with("count", 2.0 + j(3)),
                    labelled("type", "Quality Issue").with("count", 5.0 + j(4)),
                    labelled("type", "Supply Delay").with("count", 3.0 + j(2)),
                ],
            ),
        ],
        TemplateCategory::StrategicInsights => vec![
            ChartConfig::new(
                "Long-Term Production Trends",
                "Strategic growth analysis",
                ChartType::Area,
                "month",
                &["trend", "benchmark"],
                monthly(|p, i| {
                    p.with("trend", 10000.0 + i * 800.0 + j(2000))
                        .with("benchmark", 10000.0 + i * 500.0)
                }),
            ),
            ChartConfig::new(
                "Strategic Production Metrics",
                "Key indicators",
                ChartType::Bar,
                "metric",
                &["value"],
                vec![
                    labelled("metric", "Market Share").with("value", 25.0 + j(10)),
                    labelled("metric", "Capacity Growth").with("value", 15.0 + j(8)),
                    labelled("metric", "Innovation Index").with("value", 75.0 + j(15)),
                ],
            ),
        ],
    }
}
