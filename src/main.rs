//! Dashboard catalog HTTP server.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dashboard_catalog::adapters::http::{catalog_router, CatalogAppState};
use dashboard_catalog::adapters::{FsTemplateBankLoader, InMemoryTemplateBanks};
use dashboard_catalog::config::{AppConfig, BankSource, CatalogConfig, ServerConfig};
use dashboard_catalog::domain::catalog::IndustryRegistry;
use dashboard_catalog::ports::TemplateBankLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let registry = Arc::new(IndustryRegistry::standard());
    let bank_loader = bank_loader(&config.catalog, &registry).await?;
    let state = CatalogAppState::new(registry, bank_loader);

    let app = catalog_router()
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server)?)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, environment = ?config.server.environment, "Dashboard catalog listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn bank_loader(
    config: &CatalogConfig,
    registry: &Arc<IndustryRegistry>,
) -> anyhow::Result<Arc<dyn TemplateBankLoader>> {
    match config.bank_source {
        BankSource::Filesystem => {
            let dir = config
                .bank_dir
                .as_ref()
                .context("catalog.bank_dir is required for the filesystem bank source")?;
            info!(bank_dir = %dir.display(), "Reading template banks from disk");
            Ok(Arc::new(FsTemplateBankLoader::new(dir)))
        }
        BankSource::Memory if config.lazy_banks => {
            info!("Building template banks on demand");
            Ok(Arc::new(
                InMemoryTemplateBanks::builder().lazy(registry.clone()).build(),
            ))
        }
        BankSource::Memory => {
            let banks = InMemoryTemplateBanks::builder()
                .seed_from_registry(registry)
                .build();
            info!(banks = banks.bank_count().await, "Template banks built");
            Ok(Arc::new(banks))
        }
    }
}

fn cors_layer(server: &ServerConfig) -> anyhow::Result<CorsLayer> {
    let origins = server.cors_origins_list();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS]))
}
