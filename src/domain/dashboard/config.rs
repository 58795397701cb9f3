use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything a dashboard renders for one template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentConfig {
    pub kpis: Vec<KpiConfig>,
    pub charts: Vec<ChartConfig>,
    pub table: TableConfig,
    pub insights: Vec<InsightConfig>,
}

impl DepartmentConfig {
    /// Placeholder config for metadata-only template listings.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// True for the metadata-only placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.kpis.is_empty() && self.charts.is_empty() && self.insights.is_empty()
    }
}

/// A KPI card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiConfig {
    pub title: String,
    /// Pre-formatted display value (e.g. "₹1.5Cr", "92.5%", "2.5K")
    pub value: String,
    /// Percentage change, one decimal
    pub change: f64,
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_label: Option<String>,
}

/// Direction of a KPI's change. Follows the sign only, not whether the move is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Area,
    Bar,
    Line,
    Pie,
    Gauge,
    Heatmap,
    Funnel,
}

/// A single chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: Vec<DataPoint>,
    pub data_keys: Vec<String>,
    pub x_axis_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
}

impl ChartConfig {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        chart_type: ChartType,
        x_axis_key: &str,
        data_keys: &[&str],
        data: Vec<DataPoint>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            chart_type,
            data,
            data_keys: data_keys.iter().map(|k| k.to_string()).collect(),
            x_axis_key: x_axis_key.to_string(),
            colors: None,
            stacked: None,
        }
    }

    pub fn stacked(mut self) -> Self {
        self.stacked = Some(true);
        self
    }

    /// Copy of this chart with every numeric field scaled by `factor`
    /// (rounded to 2 decimals) and a new title. Everything else is kept.
    pub fn derive_variant(&self, title: String, factor: f64) -> Self {
        Self {
            title,
            data: self.data.iter().map(|p| p.scaled(factor)).collect(),
            ..self.clone()
        }
    }
}

/// A field value inside a chart point or table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
    Null,
}

impl DataValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Number(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Text(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Text(value)
    }
}

impl From<Option<f64>> for DataValue {
    fn from(value: Option<f64>) -> Self {
        value.map(DataValue::Number).unwrap_or(DataValue::Null)
    }
}

/// One record of a chart series; field order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPoint(IndexMap<String, DataValue>);

impl DataPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<DataValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        let fields = self
            .0
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    DataValue::Number(n) => DataValue::Number(round_to(n * factor, 2)),
                    other => other.clone(),
                };
                (key.clone(), value)
            })
            .collect();
        Self(fields)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub title: String,
    pub columns: Vec<TableColumn>,
    pub data: Vec<DataPoint>,
    pub search_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
}

/// A canned AI insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightConfig {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Prediction,
    Anomaly,
    Recommendation,
    Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
