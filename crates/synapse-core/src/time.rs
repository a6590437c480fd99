//! Relative timestamps ("5 minutes ago") for the chat and history views.
//!
//! The two views use different tables: the chat view has a "Just now" tier
//! and jumps straight from hours to a numeric date, while the history view
//! has no sub-minute tier but adds a "days ago" tier before a short date.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;
const MINUTES_PER_WEEK: i64 = 10_080;

/// Which formatting table to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeStyle {
    /// Chat transcript and sidebar: `Just now` / minutes / hours / `1/5/2025`.
    Chat,
    /// History cards: minutes / hours / days / `Jan 5, 2025`.
    History,
}

/// Format `timestamp` relative to `now`.
///
/// The difference is floored to whole minutes. Timestamps after `now` count
/// as zero minutes old. Calendar dates are rendered in `now`'s time zone.
pub fn format_relative_time<Tz>(
    timestamp: &DateTime<Utc>,
    now: &DateTime<Tz>,
    style: TimeStyle,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let diff = now
        .with_timezone(&Utc)
        .signed_duration_since(*timestamp)
        .num_minutes()
        .max(0);

    if style == TimeStyle::Chat && diff < 1 {
        return "Just now".to_string();
    }
    if diff < MINUTES_PER_HOUR {
        return format!("{} minutes ago", diff);
    }
    if diff < MINUTES_PER_DAY {
        return format!("{} hours ago", diff / MINUTES_PER_HOUR);
    }
    if style == TimeStyle::History && diff < MINUTES_PER_WEEK {
        return format!("{} days ago", diff / MINUTES_PER_DAY);
    }

    let local = timestamp.with_timezone(&now.timezone());
    match style {
        TimeStyle::Chat => local.format("%-m/%-d/%Y").to_string(),
        TimeStyle::History => local.format("%b %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 0).unwrap()
    }

    fn minutes_ago(minutes: i64) -> DateTime<Utc> {
        now() - Duration::minutes(minutes)
    }

    #[test]
    fn test_chat_just_now() {
        let ts = now() - Duration::seconds(30);
        assert_eq!(format_relative_time(&ts, &now(), TimeStyle::Chat), "Just now");
    }

    #[test]
    fn test_history_has_no_just_now_tier() {
        let ts = now() - Duration::seconds(30);
        assert_eq!(
            format_relative_time(&ts, &now(), TimeStyle::History),
            "0 minutes ago"
        );
    }

    #[test]
    fn test_minutes_tier() {
        let ts = minutes_ago(45);
        assert_eq!(format_relative_time(&ts, &now(), TimeStyle::Chat), "45 minutes ago");
        assert_eq!(
            format_relative_time(&ts, &now(), TimeStyle::History),
            "45 minutes ago"
        );
    }

    #[test]
    fn test_hours_tier_floors() {
        let ts = minutes_ago(130);
        assert_eq!(format_relative_time(&ts, &now(), TimeStyle::Chat), "2 hours ago");
        assert_eq!(format_relative_time(&ts, &now(), TimeStyle::History), "2 hours ago");
    }

    #[test]
    fn test_partial_minute_floors() {
        let ts = now() - Duration::seconds(119);
        assert_eq!(format_relative_time(&ts, &now(), TimeStyle::Chat), "1 minutes ago");
    }

    #[test]
    fn test_history_days_tier() {
        let ts = minutes_ago(20_000);
        assert_eq!(
            format_relative_time(&ts, &now(), TimeStyle::History),
            "13 days ago"
        );
    }

    #[test]
    fn test_chat_skips_days_tier() {
        // 2025-01-06 14:40 UTC
        let ts = minutes_ago(20_000);
        assert_eq!(format_relative_time(&ts, &now(), TimeStyle::Chat), "1/6/2025");
    }

    #[test]
    fn test_day_boundary_between_tiers() {
        let ts = minutes_ago(1440);
        assert_eq!(format_relative_time(&ts, &now(), TimeStyle::History), "1 days ago");
        assert_eq!(format_relative_time(&ts, &now(), TimeStyle::Chat), "1/19/2025");
    }

    #[test]
    fn test_history_full_date_after_a_week() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(
            format_relative_time(&ts, &now(), TimeStyle::History),
            "Jan 5, 2025"
        );
    }

    #[test]
    fn test_week_boundary_is_exclusive() {
        let ts = minutes_ago(10_080);
        assert_eq!(
            format_relative_time(&ts, &now(), TimeStyle::History),
            "Jan 13, 2025"
        );
        let ts = minutes_ago(10_079);
        assert_eq!(
            format_relative_time(&ts, &now(), TimeStyle::History),
            "6 days ago"
        );
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        let ts = now() + Duration::minutes(10);
        assert_eq!(format_relative_time(&ts, &now(), TimeStyle::Chat), "Just now");
        assert_eq!(
            format_relative_time(&ts, &now(), TimeStyle::History),
            "0 minutes ago"
        );
    }

    #[test]
    fn test_date_uses_now_time_zone() {
        // 23:30 UTC on Jan 4 is already Jan 5 in UTC+2.
        let ts = Utc.with_ymd_and_hms(2025, 1, 4, 23, 30, 0).unwrap();
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now_local = now().with_timezone(&tz);
        assert_eq!(
            format_relative_time(&ts, &now_local, TimeStyle::History),
            "Jan 5, 2025"
        );
        assert_eq!(format_relative_time(&ts, &now_local, TimeStyle::Chat), "1/5/2025");
    }
}
