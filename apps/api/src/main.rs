mod analysis;
mod catalog;
mod compare;
mod config;
mod dashboard;
mod db;
mod errors;
mod llm_client;
mod models;
mod progress;
mod recommendation;
mod routes;
mod state;
mod students;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::seed::seed_catalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::recommendation::fallback::FallbackScorer;
use crate::recommendation::llm_strategy::LlmRecommender;
use crate::recommendation::selector::FailoverRecommender;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    if llm.has_api_key() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("OPENAI_API_KEY not set; recommendations will use the fallback scorer");
    }

    // LLM tier first, deterministic skill overlap when it fails
    let recommender = Arc::new(FailoverRecommender::new(
        Box::new(LlmRecommender::new(llm.clone())),
        FallbackScorer,
    ));

    if config.seed_catalog {
        let inserted = seed_catalog(&db).await?;
        info!(inserted, "Catalog seeding finished");
    }

    let state = AppState {
        db,
        llm,
        recommender,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
