//! Conversation history browsing for Synapse.
//!
//! Provides the search-and-window filter over conversation records and the
//! history page's view state.

pub mod filter;
pub mod view;

pub use filter::{filter_conversations, matches_query, within_window};
pub use view::{EmptyState, HistoryEvent, HistoryListing, HistoryViewState};
