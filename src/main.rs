use std::sync::Arc;

use tracing::{error, info};

use riftview_backend::BackendClient;
use riftview_cache::SharedStaticCache;
use riftview_ddragon::DdragonClient;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::routes::AppState;

mod config;
mod error;
mod logging;
mod pages;
mod routes;

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    logging::init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let store = SharedStaticCache::new(&cfg.static_cache_path)
        .map_err(|e| AppError::Cache(e.to_string()))?;
    store.init().await;

    let ddragon = DdragonClient::new(
        store,
        cfg.ddragon_fallback_version.clone(),
        cfg.language.clone(),
    );

    let backend = BackendClient::new(
        cfg.backend_api_url.clone(),
        cfg.backend_rate_limit_per_second,
    );
    backend.start_metrics_logging();

    let state = AppState {
        backend: Arc::new(backend),
        assets: Arc::new(ddragon),
        language: cfg.language.clone(),
    };

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    info!("serving on {}", cfg.bind_addr);
    axum::serve(listener, routes::router(state)).await?;

    Ok(())
}
