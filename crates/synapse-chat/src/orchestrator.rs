//! Chat orchestrator: owns the live sessions and schedules simulated replies.
//!
//! Sending a message appends it to the session right away and spawns a task
//! that sleeps for the configured delay before appending the canned reply.
//! Replies are never cancelled or de-duplicated.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use synapse_core::config::ChatConfig;
use synapse_core::types::ChatMessage;

use crate::error::ChatError;
use crate::response::{ReplyKind, ResponseSelector};
use crate::session::{ChatSession, SessionSnapshot};
use crate::view::ChatEvent;

type SessionMap = HashMap<Uuid, ChatSession>;

/// Central coordinator for chat page sessions.
pub struct ChatOrchestrator {
    selector: ResponseSelector,
    sessions: Arc<Mutex<SessionMap>>,
    config: ChatConfig,
}

impl ChatOrchestrator {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            selector: ResponseSelector::default(),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Start a fresh session for a new page load.
    ///
    /// Idle sessions past the configured timeout are evicted first.
    pub fn create_session(&self) -> Result<SessionSnapshot, ChatError> {
        let now = Utc::now();
        let timeout = Duration::minutes(i64::from(self.config.session_timeout_minutes));

        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now, timeout));
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "Evicted idle chat sessions");
        }

        let session = ChatSession::new(&self.config.greeting, now);
        let snapshot = session.snapshot();
        sessions.insert(session.id, session);
        info!(session_id = %snapshot.id, active = sessions.len(), "Chat session created");
        Ok(snapshot)
    }

    pub fn snapshot(&self, session_id: Uuid) -> Result<SessionSnapshot, ChatError> {
        let sessions = self.lock()?;
        sessions
            .get(&session_id)
            .map(ChatSession::snapshot)
            .ok_or(ChatError::SessionNotFound(session_id))
    }

    /// Append a user message and schedule the canned reply.
    ///
    /// Must be called from within a tokio runtime.
    pub fn send_message(&self, session_id: Uuid, content: &str) -> Result<ChatMessage, ChatError> {
        if content.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let max = self.config.max_message_length;
        if content.chars().count() > max {
            return Err(ChatError::MessageTooLong(max));
        }

        let message = {
            let mut sessions = self.lock()?;
            let session = sessions
                .get_mut(&session_id)
                .ok_or(ChatError::SessionNotFound(session_id))?;
            session.push_user_message(content, Utc::now())
        };

        let kind = self.selector.classify(content);
        debug!(session_id = %session_id, reply = ?kind, "User message accepted");
        self.schedule_reply(session_id, kind);
        Ok(message)
    }

    /// "New Chat": reset the transcript to the greeting.
    pub fn new_chat(&self, session_id: Uuid) -> Result<SessionSnapshot, ChatError> {
        self.with_session(session_id, |session, greeting| {
            session.reset(greeting, Utc::now());
        })
    }

    /// Apply a sidebar event (open/close, search text) to a session.
    pub fn apply_event(
        &self,
        session_id: Uuid,
        event: ChatEvent,
    ) -> Result<SessionSnapshot, ChatError> {
        self.with_session(session_id, |session, _| session.view.apply(event))
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    // -- Private helpers --

    fn with_session(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut ChatSession, &str),
    ) -> Result<SessionSnapshot, ChatError> {
        let mut sessions = self.lock()?;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(ChatError::SessionNotFound(session_id))?;
        f(session, &self.config.greeting);
        Ok(session.snapshot())
    }

    fn schedule_reply(&self, session_id: Uuid, kind: ReplyKind) {
        let sessions = Arc::clone(&self.sessions);
        let delay = std::time::Duration::from_millis(self.config.reply_delay_ms);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut sessions = match sessions.lock() {
                Ok(s) => s,
                Err(e) => {
                    warn!(session_id = %session_id, "Dropping reply, session lock poisoned: {}", e);
                    return;
                }
            };
            match sessions.get_mut(&session_id) {
                Some(session) => {
                    session.deliver_reply(kind.text(), Utc::now());
                    debug!(session_id = %session_id, reply = ?kind, "Assistant reply delivered");
                }
                None => debug!(session_id = %session_id, "Session gone before reply landed"),
            }
        });
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionMap>, ChatError> {
        self.sessions
            .lock()
            .map_err(|e| ChatError::SessionStore(format!("session lock poisoned: {}", e)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    use synapse_core::types::Role;

    fn make_orchestrator() -> ChatOrchestrator {
        ChatOrchestrator::new(ChatConfig::default())
    }

    async fn wait_ms(ms: u64) {
        tokio::time::sleep(StdDuration::from_millis(ms)).await;
    }

    // ---- Sessions ----

    #[test]
    fn test_create_session_starts_with_greeting() {
        let orch = make_orchestrator();
        let snap = orch.create_session().unwrap();
        assert_eq!(snap.messages.len(), 1);
        assert_eq!(snap.messages[0].content, orch.config().greeting);
        assert!(!snap.is_typing);
        assert_eq!(orch.session_count(), 1);
    }

    #[test]
    fn test_sessions_are_independent() {
        let orch = make_orchestrator();
        let a = orch.create_session().unwrap();
        let b = orch.create_session().unwrap();
        assert_ne!(a.id, b.id);
        orch.apply_event(a.id, ChatEvent::SidebarToggled).unwrap();
        assert!(!orch.snapshot(a.id).unwrap().sidebar_open);
        assert!(orch.snapshot(b.id).unwrap().sidebar_open);
    }

    #[test]
    fn test_unknown_session() {
        let orch = make_orchestrator();
        let id = Uuid::new_v4();
        assert!(matches!(orch.snapshot(id), Err(ChatError::SessionNotFound(x)) if x == id));
        assert!(matches!(orch.new_chat(id), Err(ChatError::SessionNotFound(_))));
    }

    #[test]
    fn test_expired_sessions_are_evicted() {
        let orch = ChatOrchestrator::new(ChatConfig {
            session_timeout_minutes: 0,
            ..ChatConfig::default()
        });
        let first = orch.create_session().unwrap();
        {
            let mut sessions = orch.sessions.lock().unwrap();
            let session = sessions.get_mut(&first.id).unwrap();
            session.last_activity = Utc::now() - Duration::minutes(5);
        }
        let second = orch.create_session().unwrap();
        assert_eq!(orch.session_count(), 1);
        assert!(orch.snapshot(second.id).is_ok());
        assert!(orch.snapshot(first.id).is_err());
    }

    // ---- Validation ----

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let orch = make_orchestrator();
        let snap = orch.create_session().unwrap();
        assert!(matches!(
            orch.send_message(snap.id, "   "),
            Err(ChatError::EmptyMessage)
        ));
        assert!(matches!(
            orch.send_message(snap.id, ""),
            Err(ChatError::EmptyMessage)
        ));
        assert_eq!(orch.snapshot(snap.id).unwrap().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_message_too_long_rejected() {
        let orch = make_orchestrator();
        let snap = orch.create_session().unwrap();
        let max = orch.config().max_message_length;
        let long = "a".repeat(max + 1);
        assert!(matches!(
            orch.send_message(snap.id, &long),
            Err(ChatError::MessageTooLong(m)) if m == max
        ));
        assert!(orch.send_message(snap.id, &"a".repeat(max)).is_ok());
    }

    #[tokio::test]
    async fn test_send_to_unknown_session() {
        let orch = make_orchestrator();
        assert!(matches!(
            orch.send_message(Uuid::new_v4(), "hello"),
            Err(ChatError::SessionNotFound(_))
        ));
    }

    // ---- Delayed replies ----

    #[tokio::test(start_paused = true)]
    async fn test_user_message_appends_immediately_reply_after_delay() {
        let orch = make_orchestrator();
        let id = orch.create_session().unwrap().id;

        let msg = orch.send_message(id, "Debug my Python code").unwrap();
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Debug my Python code");

        let snap = orch.snapshot(id).unwrap();
        assert_eq!(snap.messages.len(), 2);
        assert!(snap.is_typing);

        wait_ms(1000).await;
        assert_eq!(orch.snapshot(id).unwrap().messages.len(), 2);

        wait_ms(600).await;
        let snap = orch.snapshot(id).unwrap();
        assert_eq!(snap.messages.len(), 3);
        assert!(!snap.is_typing);
        assert_eq!(snap.messages[2].role, Role::Assistant);
        assert_eq!(snap.messages[2].content, ReplyKind::Coding.text());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_sends_both_reply() {
        let orch = make_orchestrator();
        let id = orch.create_session().unwrap().id;

        orch.send_message(id, "write a story").unwrap();
        wait_ms(500).await;
        orch.send_message(id, "explain monads").unwrap();

        wait_ms(1100).await;
        let snap = orch.snapshot(id).unwrap();
        assert_eq!(snap.messages.len(), 4);
        assert!(snap.is_typing);
        assert_eq!(snap.messages[3].content, ReplyKind::Writing.text());

        wait_ms(500).await;
        let snap = orch.snapshot(id).unwrap();
        assert_eq!(snap.messages.len(), 5);
        assert!(!snap.is_typing);
        assert_eq!(snap.messages[4].content, ReplyKind::Learning.text());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_chat_does_not_cancel_pending_reply() {
        let orch = make_orchestrator();
        let id = orch.create_session().unwrap().id;

        orch.send_message(id, "hello there").unwrap();
        let snap = orch.new_chat(id).unwrap();
        assert_eq!(snap.messages.len(), 1);
        assert!(snap.is_typing);

        wait_ms(1600).await;
        let snap = orch.snapshot(id).unwrap();
        assert_eq!(snap.messages.len(), 2);
        assert_eq!(snap.messages[1].content, ReplyKind::General.text());
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_delay_is_honored() {
        let orch = ChatOrchestrator::new(ChatConfig {
            reply_delay_ms: 50,
            ..ChatConfig::default()
        });
        let id = orch.create_session().unwrap().id;
        orch.send_message(id, "learn").unwrap();
        wait_ms(60).await;
        assert_eq!(orch.snapshot(id).unwrap().messages.len(), 3);
    }
}
