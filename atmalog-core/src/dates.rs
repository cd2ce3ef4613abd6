use crate::entry::PersistedJournalEntry;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::fmt::{Display, Write};

/// `Friday, 15 Aug 2025`
pub const DEFAULT_DATE_FORMAT: &str = "%A, %d %b %Y";

/// Selects the entries written in the `days` days leading up to `now`,
/// preserving their newest-first order.
///
/// An entry exactly `days` days old is excluded; entries dated after `now`
/// are kept.
///
/// # Examples
///
/// ```
/// # use chrono::{Duration, TimeZone, Utc};
/// # use atmalog_core::dates::window_start;
/// let now = Utc.with_ymd_and_hms(2025, 8, 15, 9, 0, 0).unwrap();
/// assert_eq!(window_start(now, 7), now - Duration::days(7));
/// ```
pub fn entries_in_window(
    entries: &[PersistedJournalEntry],
    now: DateTime<Utc>,
    days: u32,
) -> Vec<PersistedJournalEntry> {
    let start = window_start(now, days);
    entries
        .iter()
        .filter(|e| e.date > start)
        .cloned()
        .collect()
}

/// First instant outside the window: `now - days`, or the earliest
/// representable instant when the window reaches further back than that.
pub fn window_start(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Whether `fmt` is a strftime pattern chrono can render.
pub fn is_valid_date_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Formats `date` with `fmt`, using [`DEFAULT_DATE_FORMAT`] when `fmt` cannot be rendered.
pub fn format_date<Tz>(date: &DateTime<Tz>, fmt: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", date.format(fmt)).is_err() {
        out.clear();
        let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
    }
    out
}
