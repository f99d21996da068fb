use anyhow::Context;
use droidcon_cache::config::loader::ConfigLoader;
use droidcon_cache::observability::{FetchMetrics, init_tracing};
use droidcon_cache::services::create_organizers_service;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config).context("invalid configuration")?;

    let _log_guard = init_tracing(&config.logging)?;
    info!(environment = %config.environment, "Starting droidcon-cache");

    let metrics = FetchMetrics::new();
    let service = create_organizers_service(&config, Arc::new(metrics.clone()))
        .await
        .context("failed to initialise organizers service")?;
    info!(storage = %config.storage.url, api = %config.api.base_url, "Organizers service initialized");

    // Drop the cache first so this run refills from the API
    if std::env::var("DROIDCON_REFRESH").is_ok() {
        service.invalidate().await?;
    }

    let organizers = service.fetch_organizers().await?;
    info!(count = organizers.len(), "Organizers loaded");

    println!("{}", serde_json::to_string_pretty(&organizers)?);

    if std::env::var("DROIDCON_METRICS").is_ok() {
        eprint!("{}", metrics.gather());
    }

    Ok(())
}
