#![allow(dead_code)]

use std::sync::Arc;

use agent_relay::config::AgentConfig;
use agent_relay::routes::api_router;
use agent_relay::state::{AppState, SharedState};
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// What the fake agent saw on one call.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

/// Stand-in for the hosted agent, answering every call with the same status and body.
pub struct MockAgent {
    pub url: String,
    calls: Arc<Mutex<Vec<Recorded>>>,
    handle: JoinHandle<()>,
}

impl MockAgent {
    pub async fn start(status: u16, body: &str) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            calls: Arc::clone(&calls),
        };
        let app = Router::new()
            .route("/v3/inference/chat/", post(mock_inference))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}/v3/inference/chat/"),
            calls,
            handle,
        }
    }

    pub async fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().await.clone()
    }
}

impl Drop for MockAgent {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn mock_inference(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let recorded = Recorded {
        api_key: headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    };
    state.calls.lock().await.push(recorded);
    (state.status, state.body.clone())
}

pub fn configured(api_url: &str) -> AgentConfig {
    AgentConfig {
        api_url: api_url.to_string(),
        api_key: Some("test-key".to_string()),
        user_id: Some("user-1".to_string()),
        agent_id: Some("AG1".to_string()),
    }
}

pub fn unconfigured(api_url: &str) -> AgentConfig {
    AgentConfig {
        api_url: api_url.to_string(),
        api_key: None,
        user_id: None,
        agent_id: None,
    }
}

pub fn relay(config: AgentConfig) -> Router {
    let state: SharedState = Arc::new(AppState::new(config));
    api_router().with_state(state)
}

/// Serves the relay on a real port and returns its base URL.
pub async fn spawn_relay(config: AgentConfig) -> (String, JoinHandle<()>) {
    let app = relay(config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), handle)
}
