use chrono::{DateTime, Datelike, Utc};

/// Format a message timestamp relative to `now`:
/// - under a minute: "just now"
/// - under a day: "5m ago", "3h ago"
/// - under a week: "2d ago"
/// - older: "Jan 15 14:03" this year, "Dec 3, 2024" otherwise
///
/// Timestamps in the future (clock skew between machines) render as "just now".
pub fn format_timestamp(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*timestamp);

    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else if timestamp.year() == now.year() {
        timestamp.format("%b %-d %H:%M").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}
