// src/state.rs
use std::sync::Arc;

use crate::config::AgentConfig;
use crate::services::agent_client::AgentClient;

pub type SharedState = Arc<AppState>;

/// Read-only after startup; requests share nothing mutable.
pub struct AppState {
    pub config: AgentConfig,
    pub agent: AgentClient,
}

impl AppState {
    pub fn new(config: AgentConfig) -> Self {
        let agent = AgentClient::new(config.api_url.clone());
        Self { config, agent }
    }
}
