// src/config.rs
use std::env;

use crate::error::AppError;

pub const DEFAULT_API_URL: &str = "https://agent-prod.studio.lyzr.ai/v3/inference/chat/";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Upstream agent settings. Everything but the URL is optional here so the
/// server can boot without them; each request checks again via [`AgentConfig::credentials`].
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub user_id: Option<String>,
    pub agent_id: Option<String>,
}

/// The three values a relay call cannot go without.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub user_id: String,
    pub agent_id: String,
}

impl AgentConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: read_var("LYZER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: read_var("LYZER_API_KEY"),
            user_id: read_var("LYZER_USER_ID"),
            agent_id: read_var("LYZER_AGENT_ID"),
        }
    }

    pub fn credentials(&self) -> Result<Credentials, AppError> {
        match (&self.api_key, &self.user_id, &self.agent_id) {
            (Some(api_key), Some(user_id), Some(agent_id)) => Ok(Credentials {
                api_key: api_key.clone(),
                user_id: user_id.clone(),
                agent_id: agent_id.clone(),
            }),
            _ => Err(AppError::ConfigurationMissing),
        }
    }

    /// Names of the required variables that are not set.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        [
            ("LYZER_API_KEY", &self.api_key),
            ("LYZER_USER_ID", &self.user_id),
            ("LYZER_AGENT_ID", &self.agent_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub static_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: read_var("RELAY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            static_dir: read_var("RELAY_STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

// Empty counts as unset.
fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>, user: Option<&str>, agent: Option<&str>) -> AgentConfig {
        AgentConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: key.map(str::to_string),
            user_id: user.map(str::to_string),
            agent_id: agent.map(str::to_string),
        }
    }

    #[test]
    fn credentials_require_all_three_values() {
        let full = config(Some("k"), Some("u"), Some("AG1"));
        let creds = full.credentials().unwrap();
        assert_eq!(creds.agent_id, "AG1");
        assert!(full.missing_vars().is_empty());

        let partial = config(Some("k"), None, Some("AG1"));
        assert!(matches!(
            partial.credentials(),
            Err(AppError::ConfigurationMissing)
        ));
        assert_eq!(partial.missing_vars(), vec!["LYZER_USER_ID"]);
    }

    #[test]
    fn server_config_defaults() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
        assert_eq!(cfg.static_dir, "public");
    }
}
