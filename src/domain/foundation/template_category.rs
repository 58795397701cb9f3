//! TemplateCategory enum representing the 10 dashboard lenses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ValidationError;

/// The 10 dashboard template categories, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    ExecutiveOverview,
    OperationalPerformance,
    FinancialImpact,
    RiskCompliance,
    ForecastingPlanning,
    ProcessOptimization,
    TeamPerformance,
    CustomerImpact,
    AnomalyDetection,
    StrategicInsights,
}

/// Who a template is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateAudience {
    Executive,
    Manager,
    Analyst,
    Operator,
}

/// How often a template's data is expected to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateTimeframe {
    RealTime,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

/// Static display metadata attached to every template of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub audience: TemplateAudience,
    pub timeframe: TemplateTimeframe,
}

impl TemplateCategory {
    /// The category used when a request names none.
    pub const DEFAULT: TemplateCategory = TemplateCategory::ExecutiveOverview;

    /// Returns all categories in canonical order.
    pub fn all() -> &'static [TemplateCategory] {
        &[
            TemplateCategory::ExecutiveOverview,
            TemplateCategory::OperationalPerformance,
            TemplateCategory::FinancialImpact,
            TemplateCategory::RiskCompliance,
            TemplateCategory::ForecastingPlanning,
            TemplateCategory::ProcessOptimization,
            TemplateCategory::TeamPerformance,
            TemplateCategory::CustomerImpact,
            TemplateCategory::AnomalyDetection,
            TemplateCategory::StrategicInsights,
        ]
    }

    /// Returns the kebab-case identifier used in URLs and bank keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::ExecutiveOverview => "executive-overview",
            TemplateCategory::OperationalPerformance => "operational-performance",
            TemplateCategory::FinancialImpact => "financial-impact",
            TemplateCategory::RiskCompliance => "risk-compliance",
            TemplateCategory::ForecastingPlanning => "forecasting-planning",
            TemplateCategory::ProcessOptimization => "process-optimization",
            TemplateCategory::TeamPerformance => "team-performance",
            TemplateCategory::CustomerImpact => "customer-impact",
            TemplateCategory::AnomalyDetection => "anomaly-detection",
            TemplateCategory::StrategicInsights => "strategic-insights",
        }
    }

    /// Returns the static name, description, audience and timeframe.
    pub fn metadata(&self) -> CategoryMetadata {
        use TemplateAudience::*;
        use TemplateTimeframe::*;

        let (name, description, audience, timeframe) = match self {
            TemplateCategory::ExecutiveOverview => (
                "Executive Overview",
                "High-level executive dashboard with key business metrics and strategic insights",
                Executive,
                Quarterly,
            ),
            TemplateCategory::OperationalPerformance => (
                "Operational Performance",
                "Day-to-day operational metrics and efficiency indicators",
                Operator,
                RealTime,
            ),
            TemplateCategory::FinancialImpact => (
                "Financial Impact",
                "Financial performance, revenue, costs, and ROI analysis",
                Manager,
                Monthly,
            ),
            TemplateCategory::RiskCompliance => (
                "Risk & Compliance",
                "Risk exposure, compliance status, and audit metrics",
                Manager,
                Weekly,
            ),
            TemplateCategory::ForecastingPlanning => (
                "Forecasting & Planning",
                "Predictive analytics and future projections",
                Manager,
                Monthly,
            ),
            TemplateCategory::ProcessOptimization => (
                "Process Optimization",
                "Process bottlenecks, workflow analysis, and optimization opportunities",
                Operator,
                Daily,
            ),
            TemplateCategory::TeamPerformance => (
                "Team Performance",
                "Workforce metrics, productivity, and team analytics",
                Analyst,
                Weekly,
            ),
            TemplateCategory::CustomerImpact => (
                "Customer Impact",
                "Customer satisfaction, retention, and experience metrics",
                Manager,
                Weekly,
            ),
            TemplateCategory::AnomalyDetection => (
                "Anomaly Detection",
                "AI-driven anomaly detection and unusual pattern identification",
                Analyst,
                RealTime,
            ),
            TemplateCategory::StrategicInsights => (
                "Strategic Insights",
                "Long-term trends and strategic business intelligence",
                Executive,
                Quarterly,
            ),
        };

        CategoryMetadata {
            name,
            description,
            audience,
            timeframe,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        self.metadata().name
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::empty_field("template_id"));
        }
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("template_id", format!("unknown category '{}'", s))
            })
    }
}

impl TemplateAudience {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateAudience::Executive => "executive",
            TemplateAudience::Manager => "manager",
            TemplateAudience::Analyst => "analyst",
            TemplateAudience::Operator => "operator",
        }
    }
}

impl TemplateTimeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateTimeframe::RealTime => "real-time",
            TemplateTimeframe::Daily => "daily",
            TemplateTimeframe::Weekly => "weekly",
            TemplateTimeframe::Monthly => "monthly",
            TemplateTimeframe::Quarterly => "quarterly",
        }
    }
}
