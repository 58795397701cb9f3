//! Writes the template bank of every registered (industry, department) as
//! `{OUT_DIR}/{industry_id}/{department_id}.json`.
//!
//! Usage: `generate-banks [OUT_DIR]` (defaults to `banks`).

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use dashboard_catalog::adapters::bank::build_bank;
use dashboard_catalog::adapters::FsTemplateBankLoader;
use dashboard_catalog::domain::catalog::IndustryRegistry;
use dashboard_catalog::domain::dashboard::BankKey;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("banks"));
    let writer = FsTemplateBankLoader::new(&out_dir);
    let registry = IndustryRegistry::standard();

    let mut written = 0usize;
    for (industry, department) in registry.department_pairs() {
        let key = BankKey::new(&industry.id, &department.id);
        let bank = build_bank(&key);
        let path = writer.write_bank(&key, &bank).await?;
        info!(bank = %key, templates = bank.len(), path = %path.display(), "Wrote template bank");
        written += 1;
    }

    info!(count = written, out_dir = %out_dir.display(), "Template banks generated");
    Ok(())
}
