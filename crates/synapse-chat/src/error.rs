//! Error types for the chat page.

/// Errors from chat session handling.
///
/// Reply selection itself never fails; these only guard message intake and
/// session lookup.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("session not found: {0}")]
    SessionNotFound(uuid::Uuid),
    #[error("session store unavailable: {0}")]
    SessionStore(String),
}
