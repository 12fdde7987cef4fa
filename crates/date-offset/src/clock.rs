//! Turning user input and clock readings into a "today" date.
//!
//! The calculator never reads the clock. Front-ends obtain the current
//! instant themselves (`chrono::Utc::now()` or the browser's clock) and use
//! these helpers to pin it to a calendar date.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{OffsetError, Result};

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns [`OffsetError::InvalidDate`] if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| OffsetError::InvalidDate(format!("'{}': {}", s, e)))
}

/// The calendar date of `now` as seen in the IANA timezone `timezone`.
///
/// # Errors
///
/// Returns [`OffsetError::InvalidTimezone`] if `timezone` is not a valid
/// IANA name.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use date_offset::today_in_timezone;
///
/// // 02:00 UTC on June 3 is still June 2 in New York.
/// let now = Utc.with_ymd_and_hms(2025, 6, 3, 2, 0, 0).unwrap();
/// let today = today_in_timezone(now, "America/New_York").unwrap();
/// assert_eq!(today, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
/// ```
pub fn today_in_timezone(now: DateTime<Utc>, timezone: &str) -> Result<NaiveDate> {
    let tz = parse_timezone(timezone)?;
    Ok(now.with_timezone(&tz).date_naive())
}

fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| OffsetError::InvalidTimezone(format!("'{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(
            parse_date("2025-06-02").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        assert_eq!(
            parse_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_invalid() {
        let err = parse_date("2025-02-30").unwrap_err().to_string();
        assert!(err.contains("Invalid date"), "got: {err}");
        assert!(parse_date("06/02/2025").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_today_in_timezone_east_of_utc() {
        // 22:00 UTC on June 2 is already June 3 in Tokyo
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 22, 0, 0).unwrap();
        let today = today_in_timezone(now, "Asia/Tokyo").unwrap();
        assert_eq!(today, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
    }

    #[test]
    fn test_today_in_timezone_utc() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 23, 59, 59).unwrap();
        let today = today_in_timezone(now, "UTC").unwrap();
        assert_eq!(today, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    }

    #[test]
    fn test_today_in_invalid_timezone() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();
        let err = today_in_timezone(now, "Mars/Olympus").unwrap_err().to_string();
        assert!(err.contains("Invalid timezone"), "got: {err}");
    }
}
