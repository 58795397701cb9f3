//! Integration tests for the catalog HTTP router.
//!
//! The router is wired to a filesystem bank loader the way the server runs
//! with `catalog.bank_source = filesystem`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use dashboard_catalog::adapters::bank::build_bank;
use dashboard_catalog::adapters::http::{catalog_router, CatalogAppState};
use dashboard_catalog::adapters::FsTemplateBankLoader;
use dashboard_catalog::domain::catalog::IndustryRegistry;
use dashboard_catalog::domain::dashboard::BankKey;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn app_with_banks(temp_dir: &TempDir, keys: &[BankKey]) -> Router {
    let loader = FsTemplateBankLoader::new(temp_dir.path());
    for key in keys {
        loader.write_bank(key, &build_bank(key)).await.unwrap();
    }

    let state = CatalogAppState::new(Arc::new(IndustryRegistry::standard()), Arc::new(loader));
    catalog_router().with_state(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn industry_detail_lists_departments_in_display_order() {
    let temp_dir = TempDir::new().unwrap();
    let app = app_with_banks(&temp_dir, &[]).await;

    let (status, body) = get(app, "/api/industries/manufacturing").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Manufacturing");
    let departments = body["departments"].as_array().unwrap();
    assert_eq!(departments.len(), 13);
    assert_eq!(departments[0]["id"], "production");
    assert_eq!(departments[1]["id"], "research");
    assert_eq!(departments[2]["id"], "supply-chain");
}

#[tokio::test]
async fn dashboard_is_served_from_bank_file() {
    let temp_dir = TempDir::new().unwrap();
    let app = app_with_banks(&temp_dir, &[BankKey::new("hr", "talent")]).await;

    let (status, body) = get(
        app,
        "/api/industries/hr/departments/talent/dashboard/strategic-insights",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "exact");
    assert_eq!(body["template"]["id"], "strategic-insights");
    assert_eq!(body["template"]["config"], body["config"]);
    assert_eq!(body["config"]["insights"].as_array().unwrap().len(), 4);
    assert_eq!(body["config"]["table"]["data"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn department_without_bank_file_is_synthesized() {
    let temp_dir = TempDir::new().unwrap();
    let app = app_with_banks(&temp_dir, &[BankKey::new("hr", "talent")]).await;

    let (status, body) = get(app, "/api/industries/hr/departments/legal/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "synthesized");
    assert_eq!(body["template"]["id"], "executive-overview");
}

#[tokio::test]
async fn corrupt_bank_file_is_synthesized() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("retail")).unwrap();
    std::fs::write(temp_dir.path().join("retail").join("sales.json"), "[]").unwrap();
    let app = app_with_banks(&temp_dir, &[]).await;

    let (status, body) = get(
        app,
        "/api/industries/retail/departments/sales/dashboard/customer-impact",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "synthesized");
    assert_eq!(body["template"]["id"], "customer-impact");
}

#[tokio::test]
async fn unknown_department_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let app = app_with_banks(&temp_dir, &[]).await;

    let (status, body) = get(app, "/api/industries/healthcare/departments/treasury/templates").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
