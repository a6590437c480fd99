//! Canned reply selection.
//!
//! Replies come from an ordered table of keyword rules checked against the
//! lowercased input. The first rule with any keyword present as a substring
//! wins; when nothing matches the general reply is used. Selection is total.

use serde::{Deserialize, Serialize};

// =============================================================================
// ReplyKind
// =============================================================================

/// The four canned replies the assistant can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Coding,
    Writing,
    Learning,
    General,
}

impl ReplyKind {
    /// The reply text shown in the transcript.
    pub fn text(&self) -> &'static str {
        match self {
            ReplyKind::Coding => "I'd be happy to help with coding! I can assist with multiple programming languages including Python, JavaScript, TypeScript, and more. What specific coding challenge can I help you with?",
            ReplyKind::Writing => "Creative writing is one of my strengths! Whether you need help brainstorming ideas, developing characters, or crafting compelling narratives, I'm here to help. What kind of writing project are you working on?",
            ReplyKind::Learning => "I love helping people learn! I can break down complex topics into simple, understandable explanations. What would you like to learn about today?",
            ReplyKind::General => "That's an interesting question! I'm here to help with a wide range of topics including writing, coding, problem-solving, learning, and general conversation. Could you tell me more about what you'd like to explore?",
        }
    }
}

// =============================================================================
// Rule table
// =============================================================================

/// One row of the reply table.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    /// Lowercase substrings, any of which triggers the rule.
    pub keywords: &'static [&'static str],
    pub kind: ReplyKind,
}

impl ResponseRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Rules in priority order.
pub const DEFAULT_RULES: &[ResponseRule] = &[
    ResponseRule {
        keywords: &["code", "programming"],
        kind: ReplyKind::Coding,
    },
    ResponseRule {
        keywords: &["write", "story"],
        kind: ReplyKind::Writing,
    },
    ResponseRule {
        keywords: &["learn", "explain"],
        kind: ReplyKind::Learning,
    },
];

// =============================================================================
// ResponseSelector
// =============================================================================

/// Picks a canned reply for free-text input.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector {
    rules: &'static [ResponseRule],
    fallback: ReplyKind,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(DEFAULT_RULES, ReplyKind::General)
    }
}

impl ResponseSelector {
    pub fn new(rules: &'static [ResponseRule], fallback: ReplyKind) -> Self {
        Self { rules, fallback }
    }

    /// Classify `input` against the rule table.
    pub fn classify(&self, input: &str) -> ReplyKind {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.kind)
            .unwrap_or(self.fallback)
    }

    /// The reply text for `input`.
    pub fn select(&self, input: &str) -> &'static str {
        self.classify(input).text()
    }
}

/// Reply text for `input` using the default rule table.
pub fn select_response(input: &str) -> &'static str {
    ResponseSelector::default().select(input)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(input: &str) -> ReplyKind {
        ResponseSelector::default().classify(input)
    }

    #[test]
    fn test_coding_keywords() {
        assert_eq!(classify("Debug my Python code"), ReplyKind::Coding);
        assert_eq!(classify("I like programming"), ReplyKind::Coding);
        assert_eq!(classify("CODE REVIEW please"), ReplyKind::Coding);
    }

    #[test]
    fn test_writing_keywords() {
        assert_eq!(classify("Help me write a story"), ReplyKind::Writing);
        assert_eq!(classify("a short STORY"), ReplyKind::Writing);
    }

    #[test]
    fn test_learning_keywords() {
        assert_eq!(classify("Explain quantum computing"), ReplyKind::Learning);
        assert_eq!(classify("I want to learn Rust"), ReplyKind::Learning);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify("Plan my weekend"), ReplyKind::General);
        assert_eq!(select_response(""), ReplyKind::General.text());
        assert_eq!(select_response(""), select_response("xyz"));
    }

    #[test]
    fn test_first_rule_wins() {
        // Writing and learning keywords present too, coding is checked first.
        assert_eq!(
            classify("explain how to write this code"),
            ReplyKind::Coding
        );
        assert_eq!(classify("explain this story"), ReplyKind::Writing);
    }

    #[test]
    fn test_substring_match_inside_words() {
        assert_eq!(classify("barcode scanner"), ReplyKind::Coding);
        assert_eq!(classify("rewrite it"), ReplyKind::Writing);
        assert_eq!(classify("relearning"), ReplyKind::Learning);
    }

    #[test]
    fn test_select_returns_reply_text() {
        assert!(select_response("code").starts_with("I'd be happy to help with coding!"));
        assert!(select_response("story").starts_with("Creative writing"));
        assert!(select_response("learn").starts_with("I love helping people learn!"));
        assert!(select_response("hi").starts_with("That's an interesting question!"));
    }

    #[test]
    fn test_custom_table() {
        static RULES: &[ResponseRule] = &[ResponseRule {
            keywords: &["weekend"],
            kind: ReplyKind::Learning,
        }];
        let selector = ResponseSelector::new(RULES, ReplyKind::Writing);
        assert_eq!(selector.classify("Plan my weekend"), ReplyKind::Learning);
        assert_eq!(selector.classify("code"), ReplyKind::Writing);
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(classify("ÉCRIRE du CODE"), ReplyKind::Coding);
        assert_eq!(classify("日本語"), ReplyKind::General);
    }
}
