// src/client.rs
//! Browser-side half of the chat: one session id per client, an in-memory
//! transcript, and one relay call per message.
use std::time::SystemTime;

use thiserror::Error;
use uuid::Uuid;

use crate::message::{ChatRequest, ChatResponse, ErrorBody};
use crate::services::session_id::unix_millis;

const SESSION_SUFFIX_LEN: usize = 13;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: SystemTime,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: SystemTime::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("relay returned status {status}")]
    Status { status: u16, error: Option<String> },

    #[error("request to relay failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// `"{unix_millis}-{suffix}"`, suffix being lowercase alphanumerics.
pub fn generate_session_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", unix_millis(), &random[..SESSION_SUFFIX_LEN])
}

pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    session_id: String,
    messages: Vec<Message>,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
            session_id: generate_session_id(),
            messages: Vec::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Send one message. The user message is recorded before the call and
    /// stays even if the call fails; the assistant reply is appended only on
    /// success. Taking `&mut self` keeps a single request in flight.
    pub async fn send(&mut self, text: &str) -> Result<&Message, ClientError> {
        let content = text.trim();
        if content.is_empty() {
            return Err(ClientError::EmptyMessage);
        }

        self.messages.push(Message::new(Role::User, content));

        let request = ChatRequest {
            message: content.to_string(),
            session_id: Some(self.session_id.clone()),
        };

        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error = response.json::<ErrorBody>().await.ok().map(|b| b.error);
            tracing::warn!(status = status.as_u16(), error = ?error, "Chat request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                error,
            });
        }

        let reply: ChatResponse = response.json().await?;
        self.messages.push(Message::new(Role::Assistant, reply.response));

        Ok(&self.messages[self.messages.len() - 1])
    }
}
