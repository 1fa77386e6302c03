use chrono::{DateTime, Utc};

/// Relative age of `timestamp` as seen at `now`: "45s ago", "2m ago",
/// "2h ago", "1d ago". Each unit is floored.
///
/// A timestamp later than `now` (clock skew) counts as zero elapsed.
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);
    if seconds < 60 {
        return format!("{seconds}s ago");
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}
