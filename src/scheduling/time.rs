//! Candidate time parsing. Everything without an explicit offset is
//! taken to be UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::SchedulingError;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_candidate_time(raw: &str) -> Result<DateTime<Utc>, SchedulingError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| SchedulingError::InvalidTimeFormat(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_utc_suffix() {
        let dt = parse_candidate_time("2023-11-14T22:13:20Z").unwrap();
        assert_eq!(dt.timestamp(), 1700000000);
    }

    #[test]
    fn test_parses_offsets() {
        let dt = parse_candidate_time("2023-11-15T00:13:20+02:00").unwrap();
        assert_eq!(dt.timestamp(), 1700000000);
    }

    #[test]
    fn test_parses_datetime_local_input() {
        // What a browser submits for <input type="datetime-local">
        let dt = parse_candidate_time("2025-06-01T10:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-06-01T10:00:00+00:00");

        let dt = parse_candidate_time("2025-04-23 09:30:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-04-23T09:30:00+00:00");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_candidate_time("next tuesday").unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidTimeFormat(_)));
    }
}
