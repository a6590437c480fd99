//! A single chat page's transcript.
//!
//! Each page load owns one session. User messages append immediately; the
//! matching assistant reply is appended later by the orchestrator once the
//! simulated delay has elapsed.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use synapse_core::types::{ChatMessage, Role};

use crate::view::ChatViewState;

/// Transcript and view state for one chat page instance.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub view: ChatViewState,
    pub started_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pending_replies: usize,
    last_message_ms: i64,
}

impl ChatSession {
    /// Create a session whose transcript opens with `greeting`.
    pub fn new(greeting: &str, now: DateTime<Utc>) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            view: ChatViewState::default(),
            started_at: now,
            last_activity: now,
            pending_replies: 0,
            last_message_ms: 0,
        };
        session.reset(greeting, now);
        session
    }

    /// True while at least one simulated reply is still on its way.
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// Append the user's message and mark a reply as pending.
    pub fn push_user_message(&mut self, content: &str, now: DateTime<Utc>) -> ChatMessage {
        self.pending_replies += 1;
        self.push(Role::User, content, now)
    }

    /// Append an assistant reply that was pending.
    pub fn deliver_reply(&mut self, content: &str, now: DateTime<Utc>) -> ChatMessage {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.push(Role::Assistant, content, now)
    }

    /// "New Chat": replace the transcript with a fresh greeting.
    ///
    /// Replies already in flight are not cancelled and will append to the
    /// new transcript.
    pub fn reset(&mut self, greeting: &str, now: DateTime<Utc>) {
        self.messages.clear();
        self.push(Role::Assistant, greeting, now);
    }

    /// Whether the session has been idle longer than `timeout`.
    pub fn is_expired(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now - self.last_activity > timeout
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            messages: self.messages.clone(),
            is_typing: self.is_typing(),
            sidebar_open: self.view.sidebar_open,
            sidebar_query: self.view.sidebar_query.clone(),
        }
    }

    fn push(&mut self, role: Role, content: &str, now: DateTime<Utc>) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_message_id(now),
            role,
            content: content.to_string(),
            timestamp: now,
        };
        self.last_activity = now;
        self.messages.push(message.clone());
        message
    }

    /// Epoch milliseconds of `now`, bumped past the previous id if needed.
    fn next_message_id(&mut self, now: DateTime<Utc>) -> String {
        let ms = now.timestamp_millis().max(self.last_message_ms + 1);
        self.last_message_ms = ms;
        ms.to_string()
    }
}

/// Read-only view of a session handed to the page and the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub is_typing: bool,
    pub sidebar_open: bool,
    pub sidebar_query: String,
}

// =============================================================================
// Tests
// =============================================================================
