//! Month-overflow policies.
//!
//! Adding months keeps the day-of-month, which may not exist in the target
//! month (January 31 plus one month). A [`MonthOverflow`] decides what date
//! that becomes.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::error::OffsetError;

/// How to normalize a day-of-month that the target month does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthOverflow {
    /// Keep counting into the following month: 2025-01-31 + 1 month is
    /// 2025-03-03. This is how browser `Date.setMonth` behaves.
    #[default]
    Rollover,
    /// Stop at the last day of the target month: 2025-01-31 + 1 month is
    /// 2025-02-28.
    Clamp,
}

impl fmt::Display for MonthOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthOverflow::Rollover => f.write_str("rollover"),
            MonthOverflow::Clamp => f.write_str("clamp"),
        }
    }
}

impl FromStr for MonthOverflow {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rollover" => Ok(MonthOverflow::Rollover),
            "clamp" => Ok(MonthOverflow::Clamp),
            _ => Err(OffsetError::InvalidPolicy(format!(
                "'{}' (expected rollover or clamp)",
                s.trim()
            ))),
        }
    }
}

/// Shift `date` by a signed number of months under `policy`.
///
/// Returns `None` when the result falls outside the range `NaiveDate` can
/// represent.
pub fn add_months(date: NaiveDate, months: i64, policy: MonthOverflow) -> Option<NaiveDate> {
    match policy {
        MonthOverflow::Rollover => add_months_rollover(date, months),
        MonthOverflow::Clamp => add_months_clamp(date, months),
    }
}

fn add_months_rollover(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let total = i64::from(date.year())
        .checked_mul(12)?
        .checked_add(i64::from(date.month0()))?
        .checked_add(months)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = total.rem_euclid(12) as u32 + 1;

    // Day 1 always exists; the starting day-of-month is then counted forward
    // from it, spilling into the next month when it is too large.
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_days(Days::new(u64::from(date.day() - 1)))
}

fn add_months_clamp(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let n = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(n)
    } else {
        date.checked_sub_months(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_rollover_plain_month() {
        let r = add_months(d(2025, 6, 2), 1, MonthOverflow::Rollover).unwrap();
        assert_eq!(r, d(2025, 7, 2));
    }

    #[test]
    fn test_rollover_jan_31_non_leap_year() {
        // February 31 is February 28 + 3 days
        let r = add_months(d(2025, 1, 31), 1, MonthOverflow::Rollover).unwrap();
        assert_eq!(r, d(2025, 3, 3));
    }

    #[test]
    fn test_rollover_jan_31_leap_year() {
        let r = add_months(d(2024, 1, 31), 1, MonthOverflow::Rollover).unwrap();
        assert_eq!(r, d(2024, 3, 2));
    }

    #[test]
    fn test_rollover_backwards_into_short_month() {
        let r = add_months(d(2025, 3, 31), -1, MonthOverflow::Rollover).unwrap();
        assert_eq!(r, d(2025, 3, 3));
    }

    #[test]
    fn test_rollover_into_thirty_day_month() {
        let r = add_months(d(2025, 5, 31), 1, MonthOverflow::Rollover).unwrap();
        assert_eq!(r, d(2025, 7, 1));
    }

    #[test]
    fn test_rollover_crosses_year_boundaries() {
        assert_eq!(
            add_months(d(2025, 11, 15), 3, MonthOverflow::Rollover).unwrap(),
            d(2026, 2, 15)
        );
        assert_eq!(
            add_months(d(2025, 2, 15), -14, MonthOverflow::Rollover).unwrap(),
            d(2023, 12, 15)
        );
        assert_eq!(
            add_months(d(2025, 1, 1), -1, MonthOverflow::Rollover).unwrap(),
            d(2024, 12, 1)
        );
    }

    #[test]
    fn test_clamp_jan_31() {
        assert_eq!(
            add_months(d(2025, 1, 31), 1, MonthOverflow::Clamp).unwrap(),
            d(2025, 2, 28)
        );
        assert_eq!(
            add_months(d(2024, 1, 31), 1, MonthOverflow::Clamp).unwrap(),
            d(2024, 2, 29)
        );
    }

    #[test]
    fn test_clamp_backwards() {
        assert_eq!(
            add_months(d(2025, 3, 31), -1, MonthOverflow::Clamp).unwrap(),
            d(2025, 2, 28)
        );
    }

    #[test]
    fn test_policies_agree_when_day_exists() {
        for months in [-25, -12, -1, 0, 1, 5, 12, 40] {
            assert_eq!(
                add_months(d(2025, 6, 15), months, MonthOverflow::Rollover),
                add_months(d(2025, 6, 15), months, MonthOverflow::Clamp),
                "months = {months}"
            );
        }
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(add_months(d(2025, 6, 2), i64::MAX, MonthOverflow::Rollover), None);
        assert_eq!(add_months(NaiveDate::MAX, 1, MonthOverflow::Rollover), None);
        assert_eq!(add_months(NaiveDate::MIN, -1, MonthOverflow::Clamp), None);
        assert_eq!(add_months(d(2025, 6, 2), i64::MIN, MonthOverflow::Clamp), None);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Rollover".parse::<MonthOverflow>().unwrap(), MonthOverflow::Rollover);
        assert_eq!("clamp".parse::<MonthOverflow>().unwrap(), MonthOverflow::Clamp);
        let err = "wrap".parse::<MonthOverflow>().unwrap_err().to_string();
        assert!(err.contains("Invalid month overflow policy"), "got: {err}");
    }
}
