// src/services/agent_client.rs
use anyhow::Context;
use serde_json::Value;

use crate::{error::AppError, message::InferenceRequest};

/// Thin wrapper over the hosted agent's inference endpoint.
#[derive(Clone, Debug)]
pub struct AgentClient {
    http: reqwest::Client,
    api_url: String,
}

impl AgentClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// One POST, no retries. A non-success status is logged with its body and
    /// surfaced as [`AppError::Upstream`]; the body never leaves this process.
    pub async fn send(&self, api_key: &str, request: &InferenceRequest) -> Result<Value, AppError> {
        tracing::debug!(session_id = %request.session_id, "Forwarding message to agent");

        let response = self
            .http
            .post(&self.api_url)
            .header("x-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Agent API error");
            return Err(AppError::Upstream {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).context("agent response is not valid JSON")?;
        Ok(body)
    }
}
