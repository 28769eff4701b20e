use chrono::{DateTime, NaiveDate, Utc};

/// Parses a booking date.
///
/// Accepts an RFC 3339 timestamp, converted to UTC, or a plain `YYYY-MM-DD` date,
/// taken as midnight UTC.
///
/// # Arguments
/// - `value` - The submitted date string
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Successfully parsed date
/// - `None` - Neither format matched
pub fn parse_booking_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
