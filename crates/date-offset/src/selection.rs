//! The inputs of a date-offset computation.
//!
//! A front-end owns exactly one [`Selection`] and replaces it wholesale on
//! every interaction (`with_amount`, `with_unit`, `with_direction`), then
//! hands it to [`crate::calculate`]. Nothing here holds hidden state.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::Serialize;

use crate::error::OffsetError;

// ── Unit ────────────────────────────────────────────────────────────────────

/// The calendar unit an amount is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Day,
    #[default]
    Week,
    Month,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Day, Unit::Week, Unit::Month];

    pub fn singular(self) -> &'static str {
        match self {
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Unit::Day => "days",
            Unit::Week => "weeks",
            Unit::Month => "months",
        }
    }

    /// The label agreeing in number with `amount` ("1 day", "2 days").
    pub fn label(self, amount: Amount) -> &'static str {
        if amount.get() == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

impl FromStr for Unit {
    type Err = OffsetError;

    /// Accepts `day`/`days`/`d`, `week`/`weeks`/`w`, `month`/`months`/`m`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" | "d" => Ok(Unit::Day),
            "week" | "weeks" | "w" => Ok(Unit::Week),
            "month" | "months" | "m" => Ok(Unit::Month),
            _ => Err(OffsetError::InvalidUnit(format!(
                "'{}' (expected day, week, or month)",
                s.trim()
            ))),
        }
    }
}

// ── Direction ───────────────────────────────────────────────────────────────

/// Whether the offset points into the past or the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Before,
    #[default]
    After,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Before, Direction::After];

    /// `+1` for after, `-1` for before.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Before => -1,
            Direction::After => 1,
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Direction::Before => "was",
            Direction::After => "is",
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Direction::Before => "before today",
            Direction::After => "from today",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Before => f.write_str("before"),
            Direction::After => f.write_str("after"),
        }
    }
}

impl FromStr for Direction {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "before" | "ago" => Ok(Direction::Before),
            "after" | "from-now" | "later" => Ok(Direction::After),
            _ => Err(OffsetError::InvalidDirection(format!(
                "'{}' (expected before or after)",
                s.trim()
            ))),
        }
    }
}

// ── Amount ──────────────────────────────────────────────────────────────────

/// A strictly positive number of units.
///
/// There is no zero amount: "nothing entered" is `Option::<Amount>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(NonZeroU32);

impl Amount {
    /// Returns `None` for zero.
    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Amount)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Read an amount the way a browser number field is read.
    ///
    /// Leading whitespace and an optional `+` are skipped, then the leading
    /// run of ASCII digits is taken and anything after it is ignored, so
    /// `"12abc"` is 12. Empty, non-numeric, negative, and zero input give
    /// `None`. A value that does not fit in a `u32` becomes `u32::MAX`.
    ///
    /// ```
    /// use date_offset::Amount;
    ///
    /// assert_eq!(Amount::parse(" 3 ").map(Amount::get), Some(3));
    /// assert_eq!(Amount::parse("12abc").map(Amount::get), Some(12));
    /// assert_eq!(Amount::parse("0"), None);
    /// assert_eq!(Amount::parse("-4"), None);
    /// assert_eq!(Amount::parse(""), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim_start();
        let s = s.strip_prefix('+').unwrap_or(s);
        let end = s
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(s.len());
        let digits = &s[..end];
        if digits.bytes().all(|b| b == b'0') {
            return None;
        }
        // A digit run too long for u32 saturates so the calculator reports it
        // as out of range instead of clearing the result.
        Amount::new(digits.parse::<u32>().unwrap_or(u32::MAX))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Selection ───────────────────────────────────────────────────────────────

/// Everything the user has chosen, as one immutable value.
///
/// The default matches a freshly opened calculator: no amount, weeks, after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub amount: Option<Amount>,
    pub unit: Unit,
    pub direction: Direction,
}

impl Selection {
    pub fn new(amount: Option<Amount>, unit: Unit, direction: Direction) -> Self {
        Self {
            amount,
            unit,
            direction,
        }
    }

    pub fn with_amount(self, amount: Option<Amount>) -> Self {
        Self { amount, ..self }
    }

    pub fn with_unit(self, unit: Unit) -> Self {
        Self { unit, ..self }
    }

    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    /// True when there is nothing to compute and the result area should be
    /// cleared.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(n: u32) -> Amount {
        Amount::new(n).unwrap()
    }

    #[test]
    fn test_unit_from_str_accepts_aliases() {
        assert_eq!("day".parse::<Unit>().unwrap(), Unit::Day);
        assert_eq!("Days".parse::<Unit>().unwrap(), Unit::Day);
        assert_eq!("w".parse::<Unit>().unwrap(), Unit::Week);
        assert_eq!(" MONTHS ".parse::<Unit>().unwrap(), Unit::Month);
    }

    #[test]
    fn test_unit_from_str_rejects_unknown() {
        let err = "fortnight".parse::<Unit>().unwrap_err().to_string();
        assert!(err.contains("Invalid unit"), "got: {err}");
        assert!(err.contains("fortnight"), "got: {err}");
    }

    #[test]
    fn test_unit_label_agrees_with_amount() {
        assert_eq!(Unit::Day.label(amount(1)), "day");
        assert_eq!(Unit::Day.label(amount(2)), "days");
        assert_eq!(Unit::Week.label(amount(1)), "week");
        assert_eq!(Unit::Month.label(amount(12)), "months");
    }

    #[test]
    fn test_direction_words() {
        assert_eq!(Direction::After.verb(), "is");
        assert_eq!(Direction::After.phrase(), "from today");
        assert_eq!(Direction::Before.verb(), "was");
        assert_eq!(Direction::Before.phrase(), "before today");
        assert_eq!(Direction::After.sign(), 1);
        assert_eq!(Direction::Before.sign(), -1);
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("Before".parse::<Direction>().unwrap(), Direction::Before);
        assert_eq!("ago".parse::<Direction>().unwrap(), Direction::Before);
        assert_eq!("after".parse::<Direction>().unwrap(), Direction::After);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_amount_parse_leading_digits() {
        assert_eq!(Amount::parse("7"), Some(amount(7)));
        assert_eq!(Amount::parse("  20"), Some(amount(20)));
        assert_eq!(Amount::parse("+5"), Some(amount(5)));
        assert_eq!(Amount::parse("12abc"), Some(amount(12)));
        assert_eq!(Amount::parse("3.9"), Some(amount(3)));
        assert_eq!(Amount::parse("007"), Some(amount(7)));
    }

    #[test]
    fn test_amount_parse_empty_state() {
        assert_eq!(Amount::parse(""), None);
        assert_eq!(Amount::parse("   "), None);
        assert_eq!(Amount::parse("0"), None);
        assert_eq!(Amount::parse("-3"), None);
        assert_eq!(Amount::parse("abc"), None);
        assert_eq!(Amount::parse("+"), None);
        assert_eq!(Amount::parse("000"), None);
    }

    #[test]
    fn test_amount_parse_saturates_oversized_values() {
        assert_eq!(Amount::parse("4294967295"), Some(amount(u32::MAX)));
        assert_eq!(Amount::parse("4294967296"), Some(amount(u32::MAX)));
        assert_eq!(Amount::parse("99999999999 days"), Some(amount(u32::MAX)));
    }

    #[test]
    fn test_selection_default_is_empty_weeks_after() {
        let sel = Selection::default();
        assert!(sel.is_empty());
        assert_eq!(sel.unit, Unit::Week);
        assert_eq!(sel.direction, Direction::After);
    }

    #[test]
    fn test_selection_builders_return_new_values() {
        let base = Selection::default();
        let next = base
            .with_amount(Amount::new(3))
            .with_unit(Unit::Day)
            .with_direction(Direction::Before);
        assert!(base.is_empty());
        assert_eq!(next.amount, Amount::new(3));
        assert_eq!(next.unit, Unit::Day);
        assert_eq!(next.direction, Direction::Before);
        assert!(next.with_amount(None).is_empty());
    }
}
