//! Tolerant frame timestamp parsing.

use chrono::{DateTime, Utc};
use tracing::warn;

/// Parse an ISO-8601/RFC-3339 frame timestamp.
///
/// A bare `Z` suffix and explicit offsets are both accepted. On parse
/// failure the current wall-clock time is substituted so a malformed
/// timestamp never fails frame ingestion; the substitution is logged.
pub fn parse_frame_timestamp(raw: &str) -> DateTime<Utc> {
    // Edge devices emit naive `utcnow().isoformat() + "Z"` strings as well
    // as fully offset-qualified ones.
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Utc);
    }
    if let Ok(naive) = raw.parse::<chrono::NaiveDateTime>() {
        return naive.and_utc();
    }
    warn!(timestamp = raw, "unparseable frame timestamp, substituting now");
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_zulu_suffix() {
        let ts = parse_frame_timestamp("2025-03-01T12:30:00Z");
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn parses_explicit_offset() {
        let ts = parse_frame_timestamp("2025-03-01T14:30:00+02:00");
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn parses_naive_isoformat() {
        let ts = parse_frame_timestamp("2025-03-01T12:30:00.250000");
        assert_eq!(ts.timestamp(), 1740832200);
    }

    #[test]
    fn garbage_falls_back_to_now() {
        let before = Utc::now();
        let ts = parse_frame_timestamp("not-a-timestamp");
        let after = Utc::now();
        assert!(ts >= before && ts <= after);
    }
}
