// src/services/session_id.rs
use std::time::{SystemTime, UNIX_EPOCH};

/// Session id sent upstream, namespaced by agent so two agents never share
/// a conversation. Without a caller id the current time in milliseconds is used.
pub fn upstream_session_id(agent_id: &str, session_id: Option<&str>) -> String {
    match session_id {
        Some(sid) if !sid.is_empty() => format!("{agent_id}-{sid}"),
        _ => format!("{agent_id}-{}", unix_millis()),
    }
}

pub fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
