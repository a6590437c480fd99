use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Port used when neither the CLI, the environment nor the file sets one.
pub const DEFAULT_PORT: u16 = 3040;

/// Greeting the assistant opens every chat with.
pub const DEFAULT_GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// Top-level configuration for the Synapse server.
///
/// Loaded from `~/.synapse/config.toml` by default. Every section falls back
/// to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynapseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

impl SynapseConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SynapseConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }
}

/// General server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// HTTP port the pages are served on.
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

/// Chat page behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Artificial delay before the canned assistant reply lands.
    pub reply_delay_ms: u64,
    /// Longest message accepted from the input box, in characters.
    pub max_message_length: usize,
    /// Idle chat sessions older than this are evicted.
    pub session_timeout_minutes: u32,
    /// First assistant message of every new chat.
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            max_message_length: 2000,
            session_timeout_minutes: 60,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

/// History page behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of tags rendered on a conversation card.
    pub tags_shown: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { tags_shown: 3 }
    }
}
