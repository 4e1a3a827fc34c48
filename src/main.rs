use std::sync::Arc;

use agent_relay::{
    config::{AgentConfig, ServerConfig},
    routes,
    state::AppState,
};
use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let agent_config = AgentConfig::from_env();
    let server_config = ServerConfig::from_env();

    let missing = agent_config.missing_vars();
    if !missing.is_empty() {
        tracing::warn!(
            missing = ?missing,
            "Agent API is not configured; chat requests will fail until it is"
        );
    }

    let state = Arc::new(AppState::new(agent_config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&server_config.static_dir)
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&server_config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", server_config.bind_addr))?;

    tracing::info!(addr = %server_config.bind_addr, "Agent relay listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
