// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "sessionId", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of the call to the hosted agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub user_id: String,
    pub agent_id: String,
    pub session_id: String,
    pub message: String,
}

impl ChatRequest {
    /// Validates a raw request body. An empty body is read as `{}`.
    ///
    /// Every problem found is reported, joined with `; `, each one naming the
    /// offending field.
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(body).map_err(|err| {
                tracing::debug!(error = %err, "Chat request body is not JSON");
                AppError::Validation("Validation error: Request body is not valid JSON".to_string())
            })?
        };

        let Value::Object(fields) = value else {
            return Err(validation_error(vec![format!(
                "Expected object, received {}",
                type_name(&value)
            )]));
        };

        let mut issues = Vec::new();

        let message = match fields.get("message") {
            None => {
                issues.push("Required at \"message\"".to_string());
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                issues.push("Message cannot be empty at \"message\"".to_string());
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                issues.push(format!(
                    "Expected string, received {} at \"message\"",
                    type_name(other)
                ));
                None
            }
        };

        let session_id = match fields.get("sessionId") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                issues.push(format!(
                    "Expected string, received {} at \"sessionId\"",
                    type_name(other)
                ));
                None
            }
        };

        match message {
            Some(message) if issues.is_empty() => Ok(ChatRequest {
                message,
                session_id,
            }),
            _ => Err(validation_error(issues)),
        }
    }
}

fn validation_error(issues: Vec<String>) -> AppError {
    AppError::Validation(format!("Validation error: {}", issues.join("; ")))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
