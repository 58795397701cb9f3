//! Seeded chart generation.
//!
//! Each (department, category) pair yields two base charts, either from a
//! bespoke department builder or from the generic per-category builder.
//! The base charts are then padded with scaled variants to a fixed count.

mod generic;
mod production;

use crate::domain::dashboard::{ChartConfig, DataPoint};
use crate::domain::foundation::TemplateCategory;

use super::seed::template_seed;

/// Number of charts on every generated dashboard.
pub const CHART_COUNT: usize = 10;

/// Scale step applied per derived variant.
const VARIANT_STEP: f64 = 0.03;

pub(crate) const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Generates exactly [`CHART_COUNT`] charts for a template.
///
/// Same inputs always give the same charts.
pub fn generate_charts(
    category: TemplateCategory,
    industry_id: &str,
    department_id: &str,
) -> Vec<ChartConfig> {
    let seed = template_seed(industry_id, department_id, category);
    let base = base_charts(department_id, category, seed);
    pad_charts(base, CHART_COUNT)
}

/// Two charts for the pair, bespoke when the department has a builder.
pub fn base_charts(department_id: &str, category: TemplateCategory, seed: u32) -> Vec<ChartConfig> {
    match department_id {
        "production" => production::charts(category, seed),
        _ => generic::charts(department_id, category, seed),
    }
}

/// Appends scaled, retitled copies of the base charts until `count` exist.
///
/// Variant `n` copies `base[len % base.len()]` with every numeric field
/// scaled by `1 + 0.03 * n` and the title suffixed `– View {n + 1}`.
pub fn pad_charts(base: Vec<ChartConfig>, count: usize) -> Vec<ChartConfig> {
    if base.is_empty() {
        return base;
    }

    let mut charts = base.clone();
    let mut variant = 1;
    while charts.len() < count {
        let source = &base[charts.len() % base.len()];
        let factor = 1.0 + VARIANT_STEP * variant as f64;
        let title = format!("{} – View {}", source.title, variant + 1);
        charts.push(source.derive_variant(title, factor));
        variant += 1;
    }
    charts.truncate(count);
    charts
}

/// `seed mod n` as a chart value.
pub(crate) fn jitter(seed: u32, n: u32) -> f64 {
    f64::from(seed % n)
}

/// One point per month, each starting with its `month` field.
pub(crate) fn monthly(build: impl Fn(DataPoint, f64) -> DataPoint) -> Vec<DataPoint> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| build(DataPoint::new().with("month", *month), i as f64))
        .collect()
}

/// Forecast series: the first three months carry actuals equal to the
/// forecast, the rest have a null actual.
pub(crate) fn forecast_series(
    actual: impl Fn(f64) -> f64,
    projected: impl Fn(f64) -> f64,
) -> Vec<DataPoint> {
    monthly(|point, i| {
        if i < 3.0 {
            let value = actual(i);
            point.with("actual", value).with("forecast", value)
        } else {
            point
                .with("actual", None::<f64>)
                .with("forecast", projected(i))
        }
    })
}
