//! Chat page logic for Synapse.
//!
//! Provides canned reply selection, per-page chat sessions with simulated
//! reply latency, and the chat page's view state.

pub mod error;
pub mod orchestrator;
pub mod response;
pub mod session;
pub mod view;

pub use error::ChatError;
pub use orchestrator::ChatOrchestrator;
pub use response::{select_response, ReplyKind, ResponseRule, ResponseSelector, DEFAULT_RULES};
pub use session::{ChatSession, SessionSnapshot};
pub use view::{ChatEvent, ChatViewState, SUGGESTED_PROMPTS};
