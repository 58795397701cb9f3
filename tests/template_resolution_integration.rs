//! Integration tests for dashboard generation and template resolution.
//!
//! These tests drive the public API end to end:
//! 1. Generators produce fixed-size, deterministic output
//! 2. The resolver falls back through bank and synthesis paths
//! 3. Banks written to disk resolve the same as in-memory banks

use std::collections::HashSet;
use std::sync::Arc;

use tempfile::TempDir;

use dashboard_catalog::adapters::bank::build_bank;
use dashboard_catalog::adapters::{FsTemplateBankLoader, InMemoryTemplateBanks};
use dashboard_catalog::application::handlers::catalog::{
    GetTemplateConfigHandler, GetTemplateConfigQuery, ResolutionSource,
};
use dashboard_catalog::domain::catalog::IndustryRegistry;
use dashboard_catalog::domain::dashboard::{BankKey, Trend};
use dashboard_catalog::domain::foundation::TemplateCategory;
use dashboard_catalog::domain::generation::{
    format_value, generate_charts, generate_insights, generate_kpis, get_base_kpis, seed_hash,
    BaseKpi, BaseKpiMap, CHART_COUNT, INSIGHT_COUNT, KPI_COUNT,
};
use dashboard_catalog::ports::TemplateBankLoader;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn registry() -> Arc<IndustryRegistry> {
    Arc::new(IndustryRegistry::standard())
}

fn handler(loader: Arc<dyn TemplateBankLoader>) -> GetTemplateConfigHandler {
    GetTemplateConfigHandler::new(registry(), loader)
}

fn base_map(keys: usize) -> BaseKpiMap {
    (0..keys)
        .map(|i| (format!("Metric {}", i), BaseKpi::new(1000.0 * (i + 1) as f64, i as f64 - 2.0)))
        .collect()
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn charts_are_deterministic_and_fixed_size() {
    for category in TemplateCategory::all() {
        let first = generate_charts(*category, "manufacturing", "production");
        let second = generate_charts(*category, "manufacturing", "production");

        assert_eq!(first, second);
        assert_eq!(first.len(), CHART_COUNT);
        assert_eq!(generate_charts(*category, "hr", "talent").len(), CHART_COUNT);
    }
}

#[test]
fn kpis_always_fill_six_slots() {
    for keys in [1, 6, 12] {
        let kpis = generate_kpis(
            TemplateCategory::ExecutiveOverview,
            "retail",
            "sales",
            &base_map(keys),
        );
        assert_eq!(kpis.len(), KPI_COUNT, "{} base keys", keys);
    }
}

#[test]
fn insights_are_four_for_every_category() {
    for category in TemplateCategory::all() {
        assert_eq!(generate_insights(*category, "finance", "treasury").len(), INSIGHT_COUNT);
    }
}

#[test]
fn trend_follows_sign_of_change() {
    for category in TemplateCategory::all() {
        for kpi in generate_kpis(*category, "finance", "accounts", &base_map(6)) {
            assert_eq!(kpi.trend == Trend::Up, kpi.change >= 0.0, "{:?}", kpi);
        }
    }
}

#[test]
fn banking_loan_portfolio_is_double_retail() {
    let banking = get_base_kpis("banking", "lending");
    let retail = get_base_kpis("retail", "lending");

    assert_eq!(
        banking["Loan Portfolio"].value,
        2.0 * retail["Loan Portfolio"].value
    );
}

#[test]
fn formatter_matches_display_conventions() {
    assert_eq!(format_value(15_000_000.0, "finance", "accounts"), "₹1.5Cr");
    assert_eq!(format_value(92.5, "manufacturing", "quality"), "92.5%");
    assert_eq!(format_value(2500.0, "retail", "store-ops"), "2.5K");
    assert_eq!(format_value(43.0, "retail", "store-ops"), "43");
}

#[test]
fn seeds_are_stable_and_mostly_distinct() {
    assert_eq!(seed_hash("finance-accounts"), seed_hash("finance-accounts"));

    let registry = IndustryRegistry::standard();
    let keys: Vec<String> = registry
        .department_pairs()
        .map(|(industry, department)| format!("{}-{}", industry.id, department.id))
        .collect();
    let distinct: HashSet<u32> = keys.iter().map(|k| seed_hash(k)).collect();

    assert!(distinct.len() * 100 >= keys.len() * 95);
}

// =============================================================================
// Resolution
// =============================================================================

#[tokio::test]
async fn unknown_template_resolves_to_executive_overview() {
    let synthesized = handler(Arc::new(InMemoryTemplateBanks::new()))
        .handle(GetTemplateConfigQuery::new("finance", "accounts", Some("nonexistent-category")))
        .await
        .unwrap();
    assert_eq!(synthesized.template.id, "executive-overview");
    assert_eq!(synthesized.source, ResolutionSource::Synthesized);

    let banks = InMemoryTemplateBanks::builder().seed_from_registry(&registry()).build();
    let from_bank = handler(Arc::new(banks))
        .handle(GetTemplateConfigQuery::new("finance", "accounts", Some("nonexistent-category")))
        .await
        .unwrap();
    assert_eq!(from_bank.template.id, "executive-overview");
    assert_eq!(from_bank.source, ResolutionSource::BankFallback);
    assert_eq!(from_bank.config.charts.len(), CHART_COUNT);
}

#[tokio::test]
async fn unknown_industry_resolves_to_none() {
    let resolved = handler(Arc::new(InMemoryTemplateBanks::new()))
        .handle(GetTemplateConfigQuery::new("not-an-industry", "x", None))
        .await;

    assert!(resolved.is_none());
}

#[tokio::test]
async fn banks_on_disk_resolve_like_banks_in_memory() {
    let temp_dir = TempDir::new().unwrap();
    let fs_loader = FsTemplateBankLoader::new(temp_dir.path());
    let key = BankKey::new("manufacturing", "production");
    fs_loader.write_bank(&key, &build_bank(&key)).await.unwrap();

    let memory = InMemoryTemplateBanks::builder().lazy(registry()).build();

    for category in TemplateCategory::all() {
        let query = GetTemplateConfigQuery::new("manufacturing", "production", Some(category.as_str()));
        let from_disk = handler(Arc::new(fs_loader.clone())).handle(query.clone()).await.unwrap();
        let from_memory = handler(Arc::new(memory.clone())).handle(query).await.unwrap();

        assert_eq!(from_disk.source, ResolutionSource::Exact);
        assert_eq!(from_disk, from_memory);
    }
}

#[tokio::test]
async fn missing_bank_file_falls_back_to_synthesis() {
    let temp_dir = TempDir::new().unwrap();
    let resolved = handler(Arc::new(FsTemplateBankLoader::new(temp_dir.path())))
        .handle(GetTemplateConfigQuery::new("healthcare", "hr", Some("team-performance")))
        .await
        .unwrap();

    assert_eq!(resolved.source, ResolutionSource::Synthesized);
    assert_eq!(resolved.template.category, TemplateCategory::TeamPerformance);
    assert_eq!(resolved.config.kpis.len(), KPI_COUNT);
}
