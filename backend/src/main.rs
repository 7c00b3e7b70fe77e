mod config;
mod routes;
mod static_files;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;
use static_files::{AssetSource, EmbeddedAssets};

pub struct AppState {
    pub assets: Arc<dyn AssetSource>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Set up tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let assets: Arc<dyn AssetSource> = Arc::new(EmbeddedAssets);
    if !static_files::has_index(assets.as_ref()) {
        tracing::warn!(
            "Frontend assets not found. Run `cd frontend && trunk build --release` before building the backend."
        );
    }

    let app = routes::build_router(Arc::new(AppState { assets }));

    let addr = config.socket_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
