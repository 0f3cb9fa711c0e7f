use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const BACKEND_URL_ENV: &str = "AGENT_DUEL_BACKEND_URL";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    /// Deployments whose multi-agent endpoint expects the caller's OpenAI key
    /// set this; otherwise the backend holds its own credentials.
    pub requires_client_credential: bool,
    pub openai_api_key: String,
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: agent_duel_backend::client::DEFAULT_BASE_URL.to_string(),
            requires_client_credential: false,
            openai_api_key: String::new(),
            connect_timeout_seconds: 5,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 50 }
    }
}

impl BackendConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds.max(1))
    }
}

impl UiConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.clamp(10, 1000))
    }
}

impl Config {
    pub fn load(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(path: &PathBuf) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                }
                Self::default()
            }
        }
    }

    /// The backend URL from the environment replaces the file value; the API
    /// key only fills in when the file left it blank.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.backend.base_url = url.trim().to_string();
        }
        if self.backend.openai_api_key.trim().is_empty() {
            if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
                self.backend.openai_api_key = key.trim().to_string();
            }
        }
        self
    }
}
