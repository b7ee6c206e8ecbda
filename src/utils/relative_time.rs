//! Deterministic timestamp formatting for the list and stats views.
//!
//! `now` is always injected so rendering is reproducible under test; there
//! is no hidden clock in here.

use chrono::{DateTime, Utc};

/// Human bucket for "how long ago": "Never", "just now", "N minutes ago",
/// "N hours ago", "N days ago". Truncating division only, singular at
/// exactly one. A timestamp in the future renders as "just now".
pub fn format_relative(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(t) = timestamp else {
        return "Never".to_string();
    };

    let seconds = (now - t).num_seconds().max(0);
    if seconds < 60 {
        return "just now".to_string();
    }

    let (count, unit) = if seconds < 3600 {
        (seconds / 60, "minute")
    } else if seconds < 86400 {
        (seconds / 3600, "hour")
    } else {
        (seconds / 86400, "day")
    };

    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, plural)
}

/// Absolute human-readable form, e.g. "Aug 20, 2025, 10:04:05 AM".
/// Absent timestamps render as an empty string.
pub fn format_absolute(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(t) => t.format("%b %d, %Y, %I:%M:%S %p").to_string(),
        None => String::new(),
    }
}
