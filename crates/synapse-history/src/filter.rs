//! Conversation filtering by search query and recency window.
//!
//! A record survives when the query matches its title, preview or one of its
//! tags (case-insensitive substring) and its timestamp falls inside the
//! selected window. The filter is stable: survivors keep their input order.

use chrono::{DateTime, Duration, TimeZone, Utc};

use synapse_core::types::{ConversationRecord, WindowFilter};

/// Days covered by [`WindowFilter::Week`].
pub const WEEK_DAYS: i64 = 7;
/// Days covered by [`WindowFilter::Month`].
pub const MONTH_DAYS: i64 = 30;

/// Return the records matching `query` and `window`, in their original order.
///
/// An empty query matches everything. `now` fixes both the reference instant
/// and the time zone whose calendar decides [`WindowFilter::Today`].
pub fn filter_conversations<Tz: TimeZone>(
    records: &[ConversationRecord],
    query: &str,
    window: WindowFilter,
    now: &DateTime<Tz>,
) -> Vec<ConversationRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches_query(r, &needle) && within_window(&r.timestamp, window, now))
        .cloned()
        .collect()
}

/// Whether `record` contains the already-lowercased `needle`.
pub fn matches_query(record: &ConversationRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(needle)
        || record.preview.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Whether `timestamp` falls inside `window` as seen from `now`.
pub fn within_window<Tz: TimeZone>(
    timestamp: &DateTime<Utc>,
    window: WindowFilter,
    now: &DateTime<Tz>,
) -> bool {
    match window {
        WindowFilter::All => true,
        WindowFilter::Today => {
            timestamp.with_timezone(&now.timezone()).date_naive() == now.date_naive()
        }
        WindowFilter::Week => *timestamp >= days_before(now, WEEK_DAYS),
        WindowFilter::Month => *timestamp >= days_before(now, MONTH_DAYS),
    }
}

fn days_before<Tz: TimeZone>(now: &DateTime<Tz>, days: i64) -> DateTime<Utc> {
    now.with_timezone(&Utc) - Duration::days(days)
}

// =============================================================================
// Tests
// =============================================================================
