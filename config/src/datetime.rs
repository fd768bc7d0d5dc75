use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseError};

/// Parses a configured target as a civil date-time.
///
/// A bare date means midnight. Date and time may be separated by `T` or a
/// single space. Offsets and `Z` suffixes are rejected: targets are local
/// wall-clock values.
pub fn parse_target_datetime(raw: &str) -> Result<NaiveDateTime, ParseError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    let normalized = trimmed.replacen(' ', "T", 1);
    // Errors are reported against the full seconds form.
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f").or_else(|err| {
        NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M").map_err(|_| err)
    })
}
