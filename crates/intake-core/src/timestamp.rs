//! # Intake Timestamp
//!
//! The timestamp is stored as text, `YYYY-MM-DD HH:MM:SS`, in local time.
//! Reading the clock happens in the app layer; this module only formats and
//! checks.

use chrono::NaiveDateTime;

use crate::error::ValidationError;

/// `strftime` pattern for intake timestamps.
pub const INTAKE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a local date-time as an intake timestamp.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use intake_core::timestamp::format_intake_timestamp;
///
/// let at = NaiveDate::from_ymd_opt(2025, 3, 1)
///     .unwrap()
///     .and_hms_opt(9, 5, 0)
///     .unwrap();
/// assert_eq!(format_intake_timestamp(at), "2025-03-01 09:05:00");
/// ```
pub fn format_intake_timestamp(at: NaiveDateTime) -> String {
    at.format(INTAKE_TIMESTAMP_FORMAT).to_string()
}

/// Parses an intake timestamp, rejecting anything not in the stored format.
pub fn parse_intake_timestamp(value: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(value, INTAKE_TIMESTAMP_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: "intake_timestamp".to_string(),
            reason: format!("expected YYYY-MM-DD HH:MM:SS ({})", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_is_zero_padded() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let text = format_intake_timestamp(at);
        assert_eq!(text, "2024-01-02 03:04:05");
        assert_eq!(text.len(), 19);
    }

    #[test]
    fn test_parse_roundtrip_and_rejects() {
        let at = parse_intake_timestamp("2025-12-31 23:59:59").unwrap();
        assert_eq!(format_intake_timestamp(at), "2025-12-31 23:59:59");

        assert!(parse_intake_timestamp("2025-12-31T23:59:59").is_err());
        assert!(parse_intake_timestamp("31/12/2025 23:59").is_err());
        assert!(parse_intake_timestamp("").is_err());
    }
}
