use std::sync::Arc;

use anyhow::Context;

use catalog_api::app::{build_app, services::AppServices};
use catalog_infra::config::CatalogConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CatalogConfig::from_env().context("invalid configuration")?;
    catalog_observability::init(config.log_format);

    if config.seed_path.is_none() {
        tracing::warn!("CATALOG_SEED_PATH not set; serving an empty catalog");
    }

    let services = AppServices::from_config(&config)
        .await
        .context("failed to load catalog")?;
    let app = build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
