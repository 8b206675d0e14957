use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::config::{ServerConfig, DEFAULT_LOG_FILTER};
use mergington_activities::database::ActivityRegistry;
use mergington_activities::web::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    // 2. Config + registry
    let config = ServerConfig::from_env();
    let registry = Arc::new(ActivityRegistry::seeded());
    info!(activities = registry.len(), "activity registry seeded");

    // 3. Router
    let app = app::build_router(registry, &config.static_dir);

    // 4. Serve, with one fallback port
    let listener = bind_with_fallback(&config).await?;
    let bound_addr = listener.local_addr()?;
    info!(
        build = env!("MERGINGTON_BUILD_ID"),
        "server running on http://{}", bound_addr
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn bind_with_fallback(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let host = config.host.as_str();
    match TcpListener::bind((host, config.port)).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let fallback = config
                .fallback_port()
                .with_context(|| format!("cannot bind {}:{}: {}", host, config.port, e))?;
            warn!(
                "could not bind {}:{}: {}; trying fallback {}:{}",
                host, config.port, e, host, fallback
            );
            TcpListener::bind((host, fallback))
                .await
                .with_context(|| format!("cannot bind fallback {}:{}", host, fallback))
        }
    }
}
