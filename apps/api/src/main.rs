mod config;
mod errors;
mod generation;
mod llm_client;
mod resume;
mod routes;
mod state;
mod views;

use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::resume::ResumeExperience;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on a malformed PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor v{}", env!("CARGO_PKG_VERSION"));

    if config.deepseek_api_key.is_empty() {
        warn!("No DEEPSEEK_API_KEY configured; completions will fail upstream authentication");
    }

    // Fixed experience text, shared read-only by every request
    let experience = ResumeExperience::load(config.resume_experience_path.as_deref())?;

    // Initialize completion client
    let llm = LlmClient::new(config.deepseek_api_url.clone(), config.deepseek_api_key.clone());
    info!(
        "Completion client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        config.deepseek_api_url
    );

    let state = AppState {
        completion: Arc::new(llm),
        experience,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
