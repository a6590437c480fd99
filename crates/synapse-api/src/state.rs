//! Application state shared across all route handlers.
//!
//! AppState holds references to all services and shared resources.
//! It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use synapse_chat::ChatOrchestrator;
use synapse_core::config::SynapseConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration. Read-only after startup.
    pub config: Arc<SynapseConfig>,
    /// Live chat sessions and the reply scheduler.
    pub chat: Arc<ChatOrchestrator>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: SynapseConfig) -> Self {
        let chat = ChatOrchestrator::new(config.chat.clone());
        Self {
            config: Arc::new(config),
            chat: Arc::new(chat),
            start_time: Instant::now(),
        }
    }
}
