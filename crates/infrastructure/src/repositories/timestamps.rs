use chrono::{DateTime, SubsecRound, Utc};
use pagevisits_domain::DomainError;
use tracing::error;

// Fixed width so that text order in SQLite is chronological order.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Current time at the precision the store keeps, so a returned record
/// compares equal to the same record read back later.
pub(crate) fn now_stored() -> DateTime<Utc> {
    stored_precision(Utc::now())
}

pub(crate) fn stored_precision(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(6)
}

pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            error!(error = %e, value = raw, "Stored timestamp is not RFC 3339");
            DomainError::Storage(format!("Invalid stored timestamp '{}': {}", raw, e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_is_fixed_width_and_sortable() {
        let early = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let late = early + chrono::Duration::microseconds(1);

        let a = format_timestamp(early);
        let b = format_timestamp(late);

        assert_eq!(a, "2026-01-02T03:04:05.000000Z");
        assert_eq!(a.len(), b.len());
        assert!(a < b);
    }

    #[test]
    fn test_parse_roundtrips_formatted_value() {
        let at = Utc.with_ymd_and_hms(2026, 5, 6, 7, 8, 9).unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(parse_timestamp(&format_timestamp(at)).unwrap(), at);
    }

    #[test]
    fn test_stored_precision_survives_storage() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 10, 8, 20).unwrap()
            + chrono::Duration::nanoseconds(730_227_405);

        let stored = stored_precision(at);

        assert_eq!(stored.timestamp_subsec_nanos(), 730_227_000);
        assert_eq!(parse_timestamp(&format_timestamp(stored)).unwrap(), stored);
        assert_eq!(stored_precision(stored), stored);
        assert_eq!(now_stored().timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(DomainError::Storage(_))
        ));
    }
}
