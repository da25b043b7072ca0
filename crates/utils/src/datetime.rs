use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a backend timestamp into local time.
///
/// Offset-less timestamps are taken as local time.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
}

/// Local calendar date of a backend timestamp, or the raw value if it
/// cannot be parsed.
#[must_use]
pub fn format_display_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}
