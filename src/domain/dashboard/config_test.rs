use super::*;
use serde_json::json;

fn sample_chart() -> ChartConfig {
    ChartConfig::new(
        "Forecast",
        "Projected trends",
        ChartType::Area,
        "month",
        &["actual", "forecast"],
        vec![
            DataPoint::new()
                .with("month", "Jan")
                .with("actual", 100.0)
                .with("forecast", 100.0),
            DataPoint::new()
                .with("month", "Apr")
                .with("actual", DataValue::Null)
                .with("forecast", 133.33),
        ],
    )
    .stacked()
}

// ─────────────────────────────────────────────────────────────────────
// Trend
// ─────────────────────────────────────────────────────────────────────

#[test]
fn trend_follows_sign() {
    assert_eq!(Trend::from_change(2.5), Trend::Up);
    assert_eq!(Trend::from_change(0.0), Trend::Up);
    assert_eq!(Trend::from_change(-0.1), Trend::Down);
}

// ─────────────────────────────────────────────────────────────────────
// Data points
// ─────────────────────────────────────────────────────────────────────

#[test]
fn data_point_preserves_field_order() {
    let point = DataPoint::new().with("z", 1.0).with("a", "x").with("m", 2.0);
    let keys: Vec<&str> = point.keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn scaled_only_touches_numbers() {
    let point = DataPoint::new()
        .with("month", "Jan")
        .with("actual", DataValue::Null)
        .with("value", 100.0);
    let scaled = point.scaled(1.06);
    assert_eq!(scaled.get("month"), Some(&DataValue::Text("Jan".to_string())));
    assert_eq!(scaled.get("actual"), Some(&DataValue::Null));
    assert_eq!(scaled.get("value").and_then(DataValue::as_f64), Some(106.0));
}

#[test]
fn scaled_rounds_to_two_decimals() {
    let point = DataPoint::new().with("v", 33.333);
    let scaled = point.scaled(1.03);
    assert_eq!(scaled.get("v").and_then(DataValue::as_f64), Some(34.33));
}

#[test]
fn derive_variant_copies_axis_keys_and_stacking() {
    let chart = sample_chart();
    let variant = chart.derive_variant("Forecast – View 2".to_string(), 1.03);

    assert_eq!(variant.title, "Forecast – View 2");
    assert_eq!(variant.subtitle, chart.subtitle);
    assert_eq!(variant.data_keys, chart.data_keys);
    assert_eq!(variant.x_axis_key, chart.x_axis_key);
    assert_eq!(variant.stacked, Some(true));
    assert_eq!(variant.data[0].get("actual").and_then(DataValue::as_f64), Some(103.0));
}

// ─────────────────────────────────────────────────────────────────────
// Serialization
// ─────────────────────────────────────────────────────────────────────

#[test]
fn chart_serializes_with_camel_case_and_type_field() {
    let value = serde_json::to_value(sample_chart()).unwrap();
    assert_eq!(value["type"], json!("area"));
    assert_eq!(value["xAxisKey"], json!("month"));
    assert_eq!(value["dataKeys"], json!(["actual", "forecast"]));
    assert_eq!(value["stacked"], json!(true));
    assert!(value.get("colors").is_none());
    assert_eq!(value["data"][1]["actual"], json!(null));
    assert_eq!(value["data"][0]["month"], json!("Jan"));
}

#[test]
fn chart_deserializes_from_json() {
    let value = json!({
        "title": "T",
        "subtitle": "S",
        "type": "bar",
        "data": [{ "category": "A", "value": 5 }],
        "dataKeys": ["value"],
        "xAxisKey": "category"
    });
    let chart: ChartConfig = serde_json::from_value(value).unwrap();
    assert_eq!(chart.chart_type, ChartType::Bar);
    assert_eq!(chart.stacked, None);
    assert_eq!(chart.data[0].get("value").and_then(DataValue::as_f64), Some(5.0));
}

#[test]
fn kpi_omits_absent_optionals() {
    let kpi = KpiConfig {
        title: "Revenue".to_string(),
        value: "1.0K".to_string(),
        change: -1.5,
        trend: Trend::Down,
        target: None,
        change_label: None,
    };
    let value = serde_json::to_value(&kpi).unwrap();
    assert_eq!(value["trend"], json!("down"));
    assert!(value.get("target").is_none());
    assert!(value.get("changeLabel").is_none());
}

#[test]
fn insight_serializes_type_and_impact() {
    let insight = InsightConfig {
        insight_type: InsightType::Recommendation,
        title: "t".to_string(),
        description: "d".to_string(),
        impact: Impact::High,
    };
    let value = serde_json::to_value(&insight).unwrap();
    assert_eq!(value["type"], json!("recommendation"));
    assert_eq!(value["impact"], json!("high"));
}

#[test]
fn placeholder_config_is_detected() {
    assert!(DepartmentConfig::placeholder().is_placeholder());
}

#[test]
fn round_to_rounds_half_away_from_zero() {
    assert_eq!(round_to(2.25, 1), 2.3);
    assert_eq!(round_to(-2.25, 1), -2.3);
    assert_eq!(round_to(1.005, 0), 1.0);
}
