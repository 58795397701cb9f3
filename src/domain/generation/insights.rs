//! Canned insight text per template category.

use crate::domain::dashboard::{Impact, InsightConfig, InsightType};
use crate::domain::foundation::TemplateCategory;

/// Number of insights on every dashboard.
pub const INSIGHT_COUNT: usize = 4;

type InsightDef = (InsightType, &'static str, &'static str, Impact);

const EXECUTIVE_OVERVIEW: [InsightDef; INSIGHT_COUNT] = [
    (InsightType::Trend, "Positive Growth Trend", "Overall metrics show consistent upward trajectory", Impact::High),
    (InsightType::Recommendation, "Focus on Efficiency", "Consider optimizing operational processes", Impact::Medium),
    (InsightType::Prediction, "Q4 Projection", "Expected 15% growth in next quarter", Impact::High),
    (InsightType::Anomaly, "Unusual Pattern Detected", "Minor deviation in department metrics", Impact::Low),
];

const OPERATIONAL_PERFORMANCE: [InsightDef; INSIGHT_COUNT] = [
    (InsightType::Recommendation, "Process Optimization", "Identify bottlenecks in workflow", Impact::High),
    (InsightType::Trend, "Performance Improvement", "Operational metrics trending upward", Impact::Medium),
    (InsightType::Prediction, "Efficiency Forecast", "Expected 8% improvement next month", Impact::Medium),
    (InsightType::Anomaly, "Performance Dip", "Temporary decrease in efficiency", Impact::Low),
];

const FINANCIAL_IMPACT: [InsightDef; INSIGHT_COUNT] = [
    (InsightType::Prediction, "Revenue Growth", "Projected 12% increase in revenue", Impact::High),
    (InsightType::Recommendation, "Cost Optimization", "Opportunity to reduce operational costs", Impact::High),
    (InsightType::Trend, "Profit Margin Trend", "Steady improvement in profitability", Impact::Medium),
    (InsightType::Anomaly, "Budget Variance", "Minor deviation from budget forecast", Impact::Low),
];

const RISK_COMPLIANCE: [InsightDef; INSIGHT_COUNT] = [
    (InsightType::Anomaly, "Risk Alert", "Increased risk exposure detected", Impact::High),
    (InsightType::Recommendation, "Compliance Review", "Schedule audit for compliance check", Impact::High),
    (InsightType::Trend, "Compliance Trend", "Compliance metrics improving", Impact::Medium),
    (InsightType::Prediction, "Risk Forecast", "Expected reduction in risk levels", Impact::Low),
];

const FORECASTING_PLANNING: [InsightDef; INSIGHT_COUNT] = [
    (InsightType::Prediction, "Growth Forecast", "Strong growth projected for next quarter", Impact::High),
    (InsightType::Recommendation, "Resource Planning", "Adjust resources based on forecast", Impact::High),
    (InsightType::Trend, "Forecast Accuracy", "Historical forecasts showing high accuracy", Impact::Medium),
    (InsightType::Anomaly, "Forecast Variance", "Minor deviation from projected values", Impact::Low),
];

const DEFAULT: [InsightDef; INSIGHT_COUNT] = [
    (InsightType::Trend, "Positive Trend", "Metrics showing improvement", Impact::Medium),
    (InsightType::Recommendation, "Optimization Opportunity", "Potential for process improvement", Impact::Medium),
    (InsightType::Prediction, "Future Projection", "Expected positive outcomes", Impact::Low),
    (InsightType::Anomaly, "Pattern Detected", "Unusual pattern in data", Impact::Low),
];

/// Returns the four insights of a category, in display order.
pub fn generate_insights(
    category: TemplateCategory,
    _industry_id: &str,
    _department_id: &str,
) -> Vec<InsightConfig> {
    let defs = match category {
        TemplateCategory::ExecutiveOverview => &EXECUTIVE_OVERVIEW,
        TemplateCategory::OperationalPerformance => &OPERATIONAL_PERFORMANCE,
        TemplateCategory::FinancialImpact => &FINANCIAL_IMPACT,
        TemplateCategory::RiskCompliance => &RISK_COMPLIANCE,
        TemplateCategory::ForecastingPlanning => &FORECASTING_PLANNING,
        _ => &DEFAULT,
    };

    defs.iter()
        .map(|(insight_type, title, description, impact)| InsightConfig {
            insight_type: *insight_type,
            title: title.to_string(),
            description: description.to_string(),
            impact: *impact,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_insights_for_every_category() {
        for category in TemplateCategory::all() {
            assert_eq!(generate_insights(*category, "finance", "accounts").len(), INSIGHT_COUNT);
        }
    }

    #[test]
    fn bespoke_categories_lead_with_their_own_text() {
        let risk = generate_insights(TemplateCategory::RiskCompliance, "x", "y");
        assert_eq!(risk[0].title, "Risk Alert");
        assert_eq!(risk[0].insight_type, InsightType::Anomaly);
        assert_eq!(risk[0].impact, Impact::High);
    }

    #[test]
    fn remaining_categories_share_default_set() {
        let team = generate_insights(TemplateCategory::TeamPerformance, "x", "y");
        let strategic = generate_insights(TemplateCategory::StrategicInsights, "a", "b");
        assert_eq!(team, strategic);
        assert_eq!(team[0].title, "Positive Trend");
    }

    #[test]
    fn every_set_covers_all_four_types() {
        for category in TemplateCategory::all() {
            let insights = generate_insights(*category, "x", "y");
            for t in [InsightType::Prediction, InsightType::Anomaly, InsightType::Recommendation, InsightType::Trend] {
                assert!(insights.iter().any(|i| i.insight_type == t), "{} lacks {:?}", category, t);
            }
        }
    }
}
