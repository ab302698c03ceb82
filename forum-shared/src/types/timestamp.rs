use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a backend timestamp string.
///
/// The backend emits either RFC 3339 strings or zone-less
/// `LocalDateTime`-style strings (`2024-05-01T10:30:00`, with optional
/// fractional seconds). Zone-less values are interpreted as UTC.
///
/// Returns `None` for anything unparsable; callers decide the fallback
/// (sort as epoch, display "Unknown time") rather than panicking.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Render a backend timestamp for display.
///
/// Unparsable input degrades to the "Unknown time" label instead of an
/// error; a malformed date must never take down a view.
pub fn display_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(parsed) => parsed.format("%B %-d, %Y %H:%M").to_string(),
        None => "Unknown time".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_timestamp("2024-05-01T10:30:00Z").unwrap();
        assert_eq!(parsed.timestamp(), 1714559400);
    }

    #[test]
    fn test_parse_local_datetime_without_zone() {
        let parsed = parse_timestamp("2024-05-01T10:30:00").unwrap();
        assert_eq!(parsed.timestamp(), 1714559400);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert!(parse_timestamp("2024-05-01T10:30:00.123456").is_some());
    }

    #[test]
    fn test_parse_garbage_returns_none() {
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_display_falls_back_to_unknown_time() {
        assert_eq!(display_timestamp("garbage"), "Unknown time");
        assert!(display_timestamp("2024-05-01T10:30:00").starts_with("May 1, 2024"));
    }
}
