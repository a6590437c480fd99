//! Built-in sample conversations.
//!
//! There is no storage behind the pages: both lists are rebuilt relative to
//! `now` on every page load, so their relative ages never drift.

use chrono::{DateTime, Duration, Utc};

use crate::types::ConversationRecord;

fn record(
    id: &str,
    title: &str,
    preview: &str,
    message_count: u32,
    age: Duration,
    tags: &[&str],
    now: DateTime<Utc>,
) -> ConversationRecord {
    ConversationRecord {
        id: id.to_string(),
        title: title.to_string(),
        preview: preview.to_string(),
        message_count,
        timestamp: now - age,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Recent conversations listed in the chat sidebar.
pub fn sidebar_conversations(now: DateTime<Utc>) -> Vec<ConversationRecord> {
    vec![
        record(
            "1",
            "Story Ideas for Sci-Fi Novel",
            "Here are some creative concepts...",
            0,
            Duration::minutes(15),
            &[],
            now,
        ),
        record(
            "2",
            "Python Data Analysis Help",
            "You can use pandas for that...",
            0,
            Duration::hours(2),
            &[],
            now,
        ),
        record(
            "3",
            "Weekend Activity Planning",
            "Consider these fun options...",
            0,
            Duration::hours(5),
            &[],
            now,
        ),
    ]
}

/// Conversations shown on the history page.
pub fn history_conversations(now: DateTime<Utc>) -> Vec<ConversationRecord> {
    vec![
        record(
            "1",
            "Story Ideas for Sci-Fi Novel",
            "Discussing creative concepts for a science fiction novel including worldbuilding, character development, and plot structures...",
            15,
            Duration::minutes(15),
            &["creative writing", "fiction"],
            now,
        ),
        record(
            "2",
            "Python Data Analysis Help",
            "Working through pandas dataframes, data visualization with matplotlib, and statistical analysis techniques...",
            23,
            Duration::hours(2),
            &["coding", "python", "data science"],
            now,
        ),
        record(
            "3",
            "Weekend Activity Planning",
            "Exploring fun weekend activities, restaurant recommendations, and outdoor adventure options in the local area...",
            8,
            Duration::hours(5),
            &["planning", "leisure"],
            now,
        ),
        record(
            "4",
            "React Component Architecture",
            "Discussing best practices for component structure, state management patterns, and performance optimization...",
            31,
            Duration::hours(24),
            &["coding", "react", "frontend"],
            now,
        ),
        record(
            "5",
            "Marketing Strategy for Startup",
            "Developing a comprehensive marketing plan including social media strategy, content marketing, and growth hacking...",
            19,
            Duration::hours(48),
            &["business", "marketing"],
            now,
        ),
        record(
            "6",
            "Learn Machine Learning Basics",
            "Introduction to ML concepts, neural networks, training models, and practical applications in real-world scenarios...",
            42,
            Duration::hours(72),
            &["learning", "AI", "machine learning"],
            now,
        ),
    ]
}
