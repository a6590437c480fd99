//! Chat page view state: the sidebar.
//!
//! State flows down into rendering and changes only through [`ChatEvent`]s.
//! The message input lives in the page script; the server only ever sees
//! submitted text, validated by the orchestrator.

use serde::{Deserialize, Serialize};

/// Starter prompts offered when the transcript is empty.
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "Help me write a story",
    "Explain quantum computing",
    "Debug my Python code",
    "Plan my weekend",
];

/// Sidebar interactions on the chat page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    SidebarOpened,
    SidebarClosed,
    SidebarToggled,
    SidebarQueryChanged(String),
}

/// State owned by the chat page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatViewState {
    pub sidebar_open: bool,
    pub sidebar_query: String,
}

impl Default for ChatViewState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            sidebar_query: String::new(),
        }
    }
}

impl ChatViewState {
    pub fn apply(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::SidebarOpened => self.sidebar_open = true,
            ChatEvent::SidebarClosed => self.sidebar_open = false,
            ChatEvent::SidebarToggled => self.sidebar_open = !self.sidebar_open,
            ChatEvent::SidebarQueryChanged(query) => self.sidebar_query = query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sidebar_open() {
        let state = ChatViewState::default();
        assert!(state.sidebar_open);
        assert!(state.sidebar_query.is_empty());
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut state = ChatViewState::default();
        state.apply(ChatEvent::SidebarToggled);
        assert!(!state.sidebar_open);
        state.apply(ChatEvent::SidebarToggled);
        assert!(state.sidebar_open);
        state.apply(ChatEvent::SidebarClosed);
        state.apply(ChatEvent::SidebarClosed);
        assert!(!state.sidebar_open);
        state.apply(ChatEvent::SidebarOpened);
        assert!(state.sidebar_open);
    }

    #[test]
    fn test_sidebar_query() {
        let mut state = ChatViewState::default();
        state.apply(ChatEvent::SidebarQueryChanged("python".to_string()));
        assert_eq!(state.sidebar_query, "python");
        state.apply(ChatEvent::SidebarQueryChanged(String::new()));
        assert!(state.sidebar_query.is_empty());
    }

    #[test]
    fn test_query_survives_sidebar_toggle() {
        let mut state = ChatViewState::default();
        state.apply(ChatEvent::SidebarQueryChanged("react".to_string()));
        state.apply(ChatEvent::SidebarToggled);
        assert_eq!(state.sidebar_query, "react");
        assert!(!state.sidebar_open);
    }
}
