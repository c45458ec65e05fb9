use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lol_match_proxy::api::RiotClient;
use lol_match_proxy::config::Config;
use lol_match_proxy::db::MatchStore;
use lol_match_proxy::server::{create_router, AppState};
use lol_match_proxy::service::MatchService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lol_match_proxy=info,tower_http=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting lol-match-proxy");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded");

    // The store must be ready before the first request is accepted
    let match_store = Arc::new(MatchStore::new(&config.database_url).await?);
    info!("Database initialized");

    let riot_client = RiotClient::new(
        &config.riot_api_url,
        &config.riot_api_key,
        config.upstream_timeout,
    )?;
    info!("Riot API client initialized ({})", config.riot_api_url);

    let service = MatchService::new(Arc::new(riot_client), match_store, config.batch_timeout);

    let state = AppState {
        service: Arc::new(service),
        fixture_path: config.match_fixture_path.clone(),
        fixture_participant: config.fixture_participant.clone(),
        default_match_count: config.default_match_count,
    };
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shutting down lol-match-proxy");
    Ok(())
}

/// Resolve when Ctrl-C is received
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
