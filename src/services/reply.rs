// src/services/reply.rs
use serde_json::Value;

/// Fields the agent has been seen to put its answer in, tried in order.
pub const REPLY_FIELDS: [&str; 4] = ["response", "message", "output", "result"];

/// Pull the reply text out of an agent response body.
///
/// The first candidate field holding a truthy value wins: a non-empty string,
/// a non-zero number, `true`, or any object or array. Non-string winners are
/// serialized as JSON. When nothing matches, a bare string body is returned
/// as is and any other body is serialized whole.
pub fn extract_reply(body: &Value) -> String {
    REPLY_FIELDS
        .iter()
        .filter_map(|field| body.get(*field))
        .find(|value| is_truthy(value))
        .map(render)
        .unwrap_or_else(|| render(body))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
