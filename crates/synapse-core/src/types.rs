use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SynapseError;

// =============================================================================
// Enums
// =============================================================================

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Coarse recency bucket used to narrow the conversation list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowFilter {
    /// No time restriction.
    #[default]
    All,
    /// Same calendar date as now, in the local frame.
    Today,
    /// Within the last 7 days.
    Week,
    /// Within the last 30 days.
    Month,
}

impl WindowFilter {
    /// Every filter in the order the filter bar shows them.
    pub const ALL: [WindowFilter; 4] = [
        WindowFilter::All,
        WindowFilter::Today,
        WindowFilter::Week,
        WindowFilter::Month,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowFilter::All => "all",
            WindowFilter::Today => "today",
            WindowFilter::Week => "week",
            WindowFilter::Month => "month",
        }
    }
}

impl fmt::Display for WindowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowFilter {
    type Err = SynapseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(WindowFilter::All),
            "today" => Ok(WindowFilter::Today),
            "week" => Ok(WindowFilter::Week),
            "month" => Ok(WindowFilter::Month),
            other => Err(SynapseError::InvalidFilter(other.to_string())),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// A past conversation as listed in the chat sidebar and the history page.
///
/// Records are never patched in place; a list is rebuilt wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Unique within a list.
    pub id: String,
    pub title: String,
    /// Last message (chat sidebar) or summary (history page).
    pub preview: String,
    /// Only shown on the history page.
    pub message_count: u32,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A single turn in the live chat transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Derived from the creation time in epoch milliseconds.
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Tests
// =============================================================================
