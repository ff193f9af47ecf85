use chrono::{DateTime, FixedOffset};

/// Format a feed or tracker timestamp for display.
///
/// Accepts RFC 3339 and RFC 2822. Anything else is shown verbatim.
pub fn format_published(raw: &str) -> String {
    match parse(raw.trim()) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
}
