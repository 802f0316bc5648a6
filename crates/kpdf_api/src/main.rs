use std::net::SocketAddr;

use anyhow::{Context, Result};
use kpdf_api::routes::app_router;
use kpdf_api::AppState;
use kpdf_service::config::Config;
use kpdf_service::CatalogService;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 2. Load Config (Fails fast if invalid)
    let config = Config::from_env()?;

    // 3. Seed the data files on first run
    let service = CatalogService::open(&config.data_dir);
    service
        .ensure_storage()
        .await
        .with_context(|| format!("Failed to prepare data directory {:?}", config.data_dir))?;

    // 4. Serve
    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    let app = app_router(AppState::new(config, service));
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
