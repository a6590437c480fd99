//! History page view state.
//!
//! The page owns a search query and a selected window filter. Both change
//! only through [`HistoryEvent`]s; the visible listing is derived from the
//! state and the record list on every render.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use synapse_core::types::{ConversationRecord, WindowFilter};

use crate::filter::filter_conversations;

/// User interactions on the history page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// The search box text changed.
    QueryChanged(String),
    /// A filter button was pressed.
    FilterSelected(WindowFilter),
}

/// State owned by the history page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryViewState {
    pub query: String,
    pub filter: WindowFilter,
}

impl HistoryViewState {
    pub fn new(query: impl Into<String>, filter: WindowFilter) -> Self {
        Self {
            query: query.into(),
            filter,
        }
    }

    /// Apply a single UI event.
    pub fn apply(&mut self, event: HistoryEvent) {
        match event {
            HistoryEvent::QueryChanged(query) => self.query = query,
            HistoryEvent::FilterSelected(filter) => self.filter = filter,
        }
    }

    /// Derive what the page shows for `records` at `now`.
    pub fn listing<Tz: TimeZone>(
        &self,
        records: &[ConversationRecord],
        now: &DateTime<Tz>,
    ) -> HistoryListing {
        let results = filter_conversations(records, &self.query, self.filter, now);
        debug!(
            query = %self.query,
            filter = %self.filter,
            total = records.len(),
            matched = results.len(),
            "History listing derived"
        );
        HistoryListing {
            results,
            query_active: !self.query.is_empty(),
        }
    }
}

/// Informational placeholder shown instead of the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

/// The filtered result set plus the bits of text derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryListing {
    pub results: Vec<ConversationRecord>,
    query_active: bool,
}

impl HistoryListing {
    /// "1 conversation found" / "4 conversations found".
    pub fn summary(&self) -> String {
        let n = self.results.len();
        let plural = if n == 1 { "" } else { "s" };
        format!("{} conversation{} found", n, plural)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.results.is_empty() {
            return None;
        }
        let hint = if self.query_active {
            "Try adjusting your search or filters"
        } else {
            "You haven't started any conversations yet"
        };
        Some(EmptyState {
            title: "No conversations found",
            hint,
        })
    }

    /// The export/organize panel only appears when there is something to manage.
    pub fn show_manage_panel(&self) -> bool {
        !self.results.is_empty()
    }
}
