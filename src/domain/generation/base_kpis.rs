//! Base KPI tables: the un-adjusted `(value, change%)` of each department's
//! named metrics before category transforms are applied.

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Un-adjusted value and percentage change of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseKpi {
    pub value: f64,
    pub change: f64,
}

impl BaseKpi {
    pub const fn new(value: f64, change: f64) -> Self {
        Self { value, change }
    }
}

/// Ordered metric name to base value map.
pub type BaseKpiMap = IndexMap<String, BaseKpi>;

/// Value used for KPI slots that have no base entry.
pub const DEFAULT_BASE_KPI: BaseKpi = BaseKpi::new(100.0, 5.0);

#[derive(Debug, Clone, Copy)]
struct MetricDef {
    name: &'static str,
    value: f64,
    change: f64,
    /// Volume and money metrics grow with the industry multiplier.
    scaled: bool,
}

const fn scaled(name: &'static str, value: f64, change: f64) -> MetricDef {
    MetricDef {
        name,
        value,
        change,
        scaled: true,
    }
}

const fn fixed(name: &'static str, value: f64, change: f64) -> MetricDef {
    MetricDef {
        name,
        value,
        change,
        scaled: false,
    }
}

/// Multiplier applied to scaled metrics; 1.0 for unlisted industries.
pub fn industry_multiplier(industry_id: &str) -> f64 {
    match industry_id {
        "finance" => 1.5,
        "banking" => 2.0,
        "insurance" => 1.8,
        "manufacturing" => 1.2,
        "retail" => 1.0,
        "healthcare" => 1.3,
        "hr" => 0.8,
        _ => 1.0,
    }
}

/// Returns the base KPIs of a department.
///
/// Industry-specific departments are checked first, then the universal
/// departments, then a default set. Total over arbitrary ids.
pub fn get_base_kpis(industry_id: &str, department_id: &str) -> BaseKpiMap {
    let metrics = INDUSTRY_SPECIFIC_KPIS
        .get(department_id)
        .or_else(|| UNIVERSAL_KPIS.get(department_id))
        .copied()
        .unwrap_or(DEFAULT_KPIS);

    let multiplier = industry_multiplier(industry_id);
    metrics
        .iter()
        .map(|m| {
            let value = if m.scaled { m.value * multiplier } else { m.value };
            (m.name.to_string(), BaseKpi::new(value, m.change))
        })
        .collect()
}

/// Department-agnostic base KPIs used when a dashboard is synthesized
/// without a precomputed bank. No industry multiplier is applied.
pub fn generic_base_kpis() -> BaseKpiMap {
    GENERIC_KPIS
        .iter()
        .map(|m| (m.name.to_string(), BaseKpi::new(m.value, m.change)))
        .collect()
}

static UNIVERSAL_KPIS: Lazy<HashMap<&'static str, &'static [MetricDef]>> = Lazy::new(|| {
    HashMap::from([
        ("accounts", ACCOUNTS),
        ("hr", HR),
        ("sales", SALES),
        ("operations", OPERATIONS),
        ("it", IT),
        ("customer-service", CUSTOMER_SERVICE),
        ("procurement", PROCUREMENT),
        ("quality", QUALITY),
        ("legal", LEGAL),
        ("executive", EXECUTIVE),
    ])
});

static INDUSTRY_SPECIFIC_KPIS: Lazy<HashMap<&'static str, &'static [MetricDef]>> =
    Lazy::new(|| {
        HashMap::from([
            ("production", PRODUCTION),
            ("treasury", TREASURY),
            ("clinical", CLINICAL),
            ("store-ops", STORE_OPS),
            ("talent", TALENT),
            ("research", RESEARCH),
            ("supply-chain", SUPPLY_CHAIN),
            ("risk", RISK),
            ("lending", LENDING),
            ("underwriting", UNDERWRITING),
            ("fulfillment", FULFILLMENT),
            ("product", PRODUCT),
            ("platform", PLATFORM),
            ("rd", RD),
            ("fleet", FLEET),
            ("generation", GENERATION),
            ("network", NETWORK),
            ("projects", PROJECTS),
            ("academics", ACADEMICS),
            ("reservations", RESERVATIONS),
            ("farming", FARMING),
            ("public-services", PUBLIC_SERVICES),
        ])
    });

const DEFAULT_KPIS: &[MetricDef] = &[
    scaled("Total Revenue", 1_000_000.0, 12.5),
    fixed("Profit Margin", 18.5, 2.3),
    fixed("Operational Efficiency", 87.5, 2.8),
    fixed("Customer Satisfaction", 88.5, 3.2),
    fixed("Risk Score", 15.0, -2.5),
    fixed("Growth Rate", 25.0, 5.5),
];

const GENERIC_KPIS: &[MetricDef] = &[
    fixed("Total Revenue", 1_000_000.0, 12.5),
    fixed("Profit Margin", 18.5, 2.3),
    fixed("Customer Satisfaction", 87.5, 3.2),
    fixed("Operational Efficiency", 92.0, 1.8),
    fixed("Risk Score", 15.0, -2.5),
    fixed("Growth Rate", 25.0, 5.5),
];

// ─────────────────────────────────────────────────────────────────────
// Universal departments
// ─────────────────────────────────────────────────────────────────────

const ACCOUNTS: &[MetricDef] = &[
    scaled("Total Revenue", 1_000_000.0, 12.5),
    fixed("Profit Margin", 18.5, 2.3),
    scaled("Cash Flow", 250_000.0, 8.5),
    fixed("Days Sales Outstanding", 42.0, -3.2),
    fixed("Expense Ratio", 65.5, -1.8),
    fixed("Budget Variance", 2.5, -0.5),
];

const HR: &[MetricDef] = &[
    scaled("Headcount", 500.0, 5.2),
    fixed("Attrition Rate", 12.5, -2.1),
    fixed("Time to Hire", 28.0, -3.5),
    fixed("Employee Satisfaction", 82.5, 4.2),
    fixed("Training Completion", 88.0, 6.5),
    fixed("Cost per Hire", 15_000.0, -5.8),
];

const SALES: &[MetricDef] = &[
    scaled("Total Revenue", 2_000_000.0, 15.5),
    fixed("Conversion Rate", 3.5, 0.8),
    scaled("Average Deal Size", 50_000.0, 8.2),
    fixed("Sales Cycle", 45.0, -5.5),
    scaled("Pipeline Value", 5_000_000.0, 12.3),
    fixed("Win Rate", 28.5, 3.2),
];

const OPERATIONS: &[MetricDef] = &[
    fixed("Operational Efficiency", 87.5, 2.8),
    fixed("Process Throughput", 1250.0, 8.5),
    fixed("Cycle Time", 4.5, -12.5),
    fixed("Quality Score", 94.2, 1.5),
    fixed("Resource Utilization", 78.5, 3.2),
    fixed("Cost per Unit", 125.0, -5.2),
];

const IT: &[MetricDef] = &[
    fixed("System Uptime", 99.5, 0.2),
    fixed("Response Time", 125.0, -15.5),
    fixed("Deployment Frequency", 12.0, 25.0),
    fixed("Bug Rate", 2.5, -18.5),
    fixed("Code Coverage", 78.5, 5.2),
    fixed("Security Score", 92.0, 3.5),
];

const CUSTOMER_SERVICE: &[MetricDef] = &[
    fixed("Customer Satisfaction", 88.5, 3.2),
    fixed("First Response Time", 2.5, -15.5),
    fixed("Resolution Rate", 92.5, 4.8),
    fixed("Ticket Volume", 1250.0, -8.2),
    fixed("Average Handle Time", 8.5, -12.5),
    fixed("Customer Retention", 94.2, 2.5),
];

const PROCUREMENT: &[MetricDef] = &[
    scaled("Cost Savings", 250_000.0, 15.5),
    fixed("Vendor Performance", 87.5, 3.2),
    fixed("Purchase Order Cycle", 5.5, -8.5),
    fixed("Supplier Diversity", 35.5, 5.2),
    fixed("Contract Compliance", 94.5, 2.8),
    fixed("Inventory Turnover", 8.5, 1.2),
];

const QUALITY: &[MetricDef] = &[
    fixed("Quality Score", 95.5, 2.5),
    fixed("Defect Rate", 1.2, -18.5),
    fixed("Compliance Rate", 98.5, 1.2),
    fixed("Audit Findings", 3.0, -25.0),
    fixed("Process Adherence", 92.5, 3.5),
    fixed("Customer Complaints", 0.5, -33.3),
];

const LEGAL: &[MetricDef] = &[
    fixed("Contract Compliance", 96.5, 1.5),
    fixed("Legal Risk Score", 8.5, -12.5),
    fixed("Contract Turnaround", 5.5, -15.5),
    fixed("Regulatory Compliance", 98.0, 2.2),
    fixed("Dispute Resolution Time", 30.0, -18.5),
    scaled("Legal Cost", 125_000.0, -5.2),
];

const EXECUTIVE: &[MetricDef] = &[
    scaled("Total Revenue", 5_000_000.0, 18.5),
    scaled("Net Profit", 750_000.0, 22.5),
    fixed("Market Share", 15.5, 2.8),
    fixed("Customer Growth", 25.5, 8.5),
    scaled("Employee Count", 2500.0, 12.5),
    scaled("Brand Value", 100_000_000.0, 15.2),
];

// ─────────────────────────────────────────────────────────────────────
// Industry-specific departments
// ─────────────────────────────────────────────────────────────────────

const PRODUCTION: &[MetricDef] = &[
    scaled("Production Output", 10_000.0, 8.5),
    fixed("OEE", 85.5, 3.2),
    fixed("Defect Rate", 1.2, -15.5),
    fixed("Throughput", 1250.0, 12.5),
    fixed("Equipment Utilization", 78.5, 5.2),
    fixed("Cost per Unit", 125.0, -8.5),
];

const TREASURY: &[MetricDef] = &[
    scaled("Cash Position", 5_000_000.0, 5.5),
    fixed("Investment Returns", 8.5, 1.2),
    fixed("Liquidity Ratio", 2.5, 0.3),
    fixed("Debt to Equity", 0.65, -0.05),
    scaled("Working Capital", 2_000_000.0, 8.5),
    fixed("Risk Exposure", 12.5, -2.5),
];

const CLINICAL: &[MetricDef] = &[
    scaled("Patient Admissions", 500.0, 5.5),
    fixed("Bed Occupancy", 85.5, 2.8),
    fixed("Average Length of Stay", 4.5, -0.5),
    fixed("Readmission Rate", 8.5, -2.5),
    fixed("Patient Satisfaction", 88.5, 3.2),
    fixed("Clinical Outcomes", 92.5, 4.5),
];

const STORE_OPS: &[MetricDef] = &[
    fixed("Sales per Square Foot", 450.0, 8.5),
    fixed("Inventory Turnover", 6.5, 1.2),
    scaled("Foot Traffic", 2500.0, 12.5),
    fixed("Conversion Rate", 25.5, 3.2),
    fixed("Average Transaction", 85.0, 5.5),
    fixed("Store Performance", 87.5, 4.8),
];

const TALENT: &[MetricDef] = &[
    fixed("Time to Fill", 28.0, -5.5),
    fixed("Quality of Hire", 85.5, 5.2),
    fixed("Retention Rate", 88.5, 3.5),
    fixed("Internal Mobility", 15.5, 4.2),
    fixed("Diversity Index", 65.5, 8.5),
    fixed("Employee Engagement", 82.5, 5.5),
];

const RESEARCH: &[MetricDef] = &[
    scaled("R&D Investment", 500_000.0, 12.5),
    fixed("Projects in Pipeline", 25.0, 5.5),
    fixed("Innovation Index", 78.5, 8.5),
    fixed("Time to Market", 18.0, -12.5),
    fixed("Patent Applications", 12.0, 15.5),
    fixed("Research ROI", 125.0, 8.5),
];

const SUPPLY_CHAIN: &[MetricDef] = &[
    fixed("On-Time Delivery", 94.5, 2.5),
    fixed("Inventory Accuracy", 98.5, 1.2),
    fixed("Supply Chain Cost", 15.5, -3.5),
    fixed("Vendor Performance", 87.5, 4.2),
    fixed("Order Fulfillment", 96.5, 3.5),
    fixed("Lead Time", 12.0, -8.5),
];

const RISK: &[MetricDef] = &[
    fixed("Risk Score", 15.5, -2.5),
    fixed("Compliance Rate", 96.5, 2.5),
    fixed("Audit Findings", 3.0, -25.0),
    fixed("Risk Exposure", 8.5, -12.5),
    fixed("Control Effectiveness", 92.5, 3.5),
    fixed("Regulatory Compliance", 98.0, 1.5),
];

const LENDING: &[MetricDef] = &[
    scaled("Loan Portfolio", 50_000_000.0, 15.5),
    fixed("NPA Ratio", 2.5, -0.5),
    fixed("Credit Risk Score", 85.5, 3.2),
    scaled("Disbursement Rate", 1_250_000.0, 12.5),
    fixed("Recovery Rate", 92.5, 4.5),
    fixed("Portfolio Yield", 12.5, 1.2),
];

const UNDERWRITING: &[MetricDef] = &[
    scaled("Policy Issuance", 5000.0, 8.5),
    fixed("Underwriting Profit", 15.5, 2.5),
    fixed("Claims Ratio", 65.5, -3.5),
    fixed("Policy Retention", 88.5, 3.2),
    fixed("Risk Assessment", 92.5, 4.5),
    fixed("Premium Growth", 12.5, 5.5),
];

const FULFILLMENT: &[MetricDef] = &[
    scaled("Order Volume", 50_000.0, 25.5),
    fixed("Fulfillment Rate", 96.5, 2.5),
    fixed("Average Delivery Time", 2.5, -15.5),
    fixed("Shipping Cost", 8.5, -5.5),
    fixed("Order Accuracy", 99.5, 0.5),
    fixed("Customer Satisfaction", 92.5, 4.5),
];

const PRODUCT: &[MetricDef] = &[
    scaled("Active Users", 100_000.0, 25.5),
    fixed("Feature Adoption", 65.5, 12.5),
    fixed("System Uptime", 99.8, 0.2),
    fixed("Response Time", 125.0, -15.5),
    fixed("Bug Rate", 0.5, -25.0),
    fixed("User Satisfaction", 88.5, 5.5),
];

const PLATFORM: &[MetricDef] = &[
    scaled("GMV", 10_000_000.0, 35.5),
    scaled("Active Sellers", 5000.0, 15.5),
    scaled("Active Buyers", 50_000.0, 25.5),
    scaled("Transaction Volume", 500_000.0, 30.5),
    fixed("Platform Fee", 3.5, 0.2),
    fixed("Marketplace Health", 87.5, 5.5),
];

const RD: &[MetricDef] = &[
    scaled("R&D Investment", 1_000_000.0, 15.5),
    fixed("Clinical Trials", 12.0, 3.5),
    scaled("Pipeline Value", 50_000_000.0, 25.5),
    fixed("Time to Market", 36.0, -8.5),
    fixed("Success Rate", 65.5, 5.5),
    fixed("Innovation Index", 82.5, 8.5),
];

const FLEET: &[MetricDef] = &[
    fixed("Fleet Utilization", 85.5, 5.5),
    fixed("On-Time Delivery", 94.5, 3.2),
    fixed("Fuel Efficiency", 8.5, 2.5),
    scaled("Maintenance Cost", 125_000.0, -5.5),
    fixed("Route Optimization", 92.5, 4.5),
    fixed("Driver Performance", 88.5, 3.5),
];

const GENERATION: &[MetricDef] = &[
    scaled("Power Generation", 5000.0, 8.5),
    fixed("Grid Stability", 98.5, 1.2),
    fixed("Energy Efficiency", 85.5, 3.5),
    fixed("Outage Duration", 0.5, -25.0),
    fixed("Renewable Mix", 35.5, 8.5),
    fixed("Cost per kWh", 5.5, -2.5),
];

const NETWORK: &[MetricDef] = &[
    fixed("Network Uptime", 99.9, 0.1),
    scaled("Data Throughput", 5000.0, 25.5),
    fixed("Latency", 25.0, -15.5),
    fixed("Coverage", 95.5, 2.5),
    fixed("Subscriber Growth", 12.5, 8.5),
    fixed("Network Quality", 92.5, 3.5),
];

const PROJECTS: &[MetricDef] = &[
    fixed("Projects Active", 25.0, 5.5),
    fixed("On-Time Completion", 85.5, 4.5),
    fixed("Budget Adherence", 92.5, 2.5),
    fixed("Resource Utilization", 78.5, 5.5),
    fixed("Quality Score", 88.5, 3.5),
    fixed("Client Satisfaction", 90.5, 4.5),
];

const ACADEMICS: &[MetricDef] = &[
    scaled("Enrollment", 5000.0, 8.5),
    fixed("Graduation Rate", 85.5, 3.5),
    fixed("Student Satisfaction", 88.5, 4.5),
    fixed("Course Completion", 92.5, 2.5),
    fixed("Research Output", 125.0, 12.5),
    fixed("Employability", 90.5, 5.5),
];

const RESERVATIONS: &[MetricDef] = &[
    fixed("Occupancy Rate", 85.5, 5.5),
    fixed("ADR", 150.0, 8.5),
    fixed("RevPAR", 128.0, 12.5),
    fixed("Booking Conversion", 25.5, 4.5),
    fixed("Guest Satisfaction", 88.5, 3.5),
    fixed("Revenue Growth", 15.5, 8.5),
];

const FARMING: &[MetricDef] = &[
    scaled("Crop Yield", 5000.0, 12.5),
    fixed("Harvest Efficiency", 88.5, 4.5),
    fixed("Cost per Acre", 2500.0, -5.5),
    fixed("Water Usage", 85.5, -8.5),
    fixed("Soil Health", 92.5, 3.5),
    fixed("Profit Margin", 25.5, 8.5),
];

const PUBLIC_SERVICES: &[MetricDef] = &[
    fixed("Service Delivery", 92.5, 4.5),
    fixed("Citizen Satisfaction", 85.5, 5.5),
    fixed("Response Time", 2.5, -15.5),
    fixed("Budget Utilization", 88.5, 3.5),
    fixed("Compliance Rate", 96.5, 2.5),
    fixed("Efficiency Index", 87.5, 4.5),
];
