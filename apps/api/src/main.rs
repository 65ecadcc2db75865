mod analytics;
mod campaign;
mod config;
mod errors;
mod handoff;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::campaign::generator::{GeminiPlanGenerator, OfflinePlanGenerator, PlanGenerator};
use crate::config::Config;
use crate::handoff::{HandoffStore, MemoryHandoffStore, RedisHandoffStore};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AdRoute API v{}", env!("CARGO_PKG_VERSION"));

    let handoff: Arc<dyn HandoffStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Hand-off store: redis (ttl {}s)", config.handoff_ttl_secs);
            Arc::new(RedisHandoffStore::new(client, config.handoff_ttl_secs))
        }
        None => {
            info!("Hand-off store: in-memory (ttl {}s)", config.handoff_ttl_secs);
            Arc::new(MemoryHandoffStore::new(config.handoff_ttl_secs))
        }
    };

    let generator: Arc<dyn PlanGenerator> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(key.clone(), config.gemini_model.clone())?;
            info!("Plan generation enabled (model: {})", client.model());
            Arc::new(GeminiPlanGenerator::new(client))
        }
        None => {
            warn!("GEMINI_API_KEY not set, results will use synthesized plans");
            Arc::new(OfflinePlanGenerator)
        }
    };

    let state = AppState::new(config.clone(), generator, handoff);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
