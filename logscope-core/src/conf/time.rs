use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

/// Parses a window bound: a full RFC 3339 timestamp, or a plain
/// `YYYY-MM-DD` date taken as midnight UTC.
pub fn parse_time_bound(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).fixed_offset())
}
