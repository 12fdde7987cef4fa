//! Date-offset computation and result formatting.
//!
//! Every function here is pure: today's date is always an argument, never
//! read from the system clock, so results are reproducible in tests and the
//! same code runs unchanged behind the CLI and the WASM front-end.
//!
//! # Functions
//!
//! - [`compute_target_date`]: Today plus or minus N days, weeks, or months
//! - [`shift_date`]: The same arithmetic with an explicit signed offset
//! - [`format_result`]: Build the "N units from today is" sentence and the long date
//! - [`calculate`]: Run a whole [`Selection`] through both steps
//! - [`quick_pick_table`]: Results for every quick-pick amount (1 to 20)

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::{OffsetError, Result};
use crate::overflow::{add_months, MonthOverflow};
use crate::selection::{Amount, Direction, Selection, Unit};

/// Amounts offered as one-tap choices by the front-ends.
pub const QUICK_PICKS: RangeInclusive<u32> = 1..=20;

/// `strftime` pattern of the isolated date string, e.g. "Monday, June 2, 2025".
pub const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

// ── Options ─────────────────────────────────────────────────────────────────

/// Options for the `*_with_options` functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorOptions {
    /// How month arithmetic treats a day-of-month the target month lacks.
    pub month_overflow: MonthOverflow,
}

// ── ResultText ──────────────────────────────────────────────────────────────

/// The rendered outcome of one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultText {
    /// e.g. "2 weeks before today was".
    pub sentence: String,
    /// The long date shown under the sentence, e.g. "Monday, May 19, 2025".
    pub date_string: String,
    /// The target date itself (ISO 8601 when serialized).
    pub target_date: NaiveDate,
}

impl ResultText {
    /// What a "copy" action puts on the clipboard: the date string verbatim.
    pub fn clipboard_text(&self) -> &str {
        &self.date_string
    }

    /// The markup the result area displays: the sentence, a line break, and
    /// the date in bold.
    pub fn to_html(&self) -> String {
        format!("{}<br><strong>{}</strong>", self.sentence, self.date_string)
    }
}

impl fmt::Display for ResultText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.sentence, self.date_string)
    }
}

// ── compute_target_date ─────────────────────────────────────────────────────

/// Compute the date `amount` units before or after `today`.
///
/// Month arithmetic uses [`MonthOverflow::Rollover`]. For another policy, use
/// [`compute_target_date_with_options`].
///
/// # Errors
///
/// Returns [`OffsetError::OutOfRange`] if the result cannot be represented.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_offset::{compute_target_date, Amount, Direction, Unit};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let two = Amount::new(2).unwrap();
/// let target = compute_target_date(today, two, Unit::Week, Direction::Before).unwrap();
/// assert_eq!(target, NaiveDate::from_ymd_opt(2025, 5, 19).unwrap());
/// ```
pub fn compute_target_date(
    today: NaiveDate,
    amount: Amount,
    unit: Unit,
    direction: Direction,
) -> Result<NaiveDate> {
    compute_target_date_with_options(
        today,
        amount,
        unit,
        direction,
        &CalculatorOptions::default(),
    )
}

/// Compute the date `amount` units before or after `today` with options.
///
/// The signed offset is `+amount` for [`Direction::After`] and `-amount` for
/// [`Direction::Before`]; see [`shift_date`].
///
/// # Errors
///
/// Returns [`OffsetError::OutOfRange`] if the result cannot be represented.
pub fn compute_target_date_with_options(
    today: NaiveDate,
    amount: Amount,
    unit: Unit,
    direction: Direction,
    options: &CalculatorOptions,
) -> Result<NaiveDate> {
    let offset = direction.sign() * i64::from(amount.get());
    shift_date(today, offset, unit, options)
}

/// Shift `today` by a signed number of units.
///
/// - [`Unit::Day`]: `offset` days.
/// - [`Unit::Week`]: `7 × offset` days.
/// - [`Unit::Month`]: `offset` calendar months, normalized by
///   `options.month_overflow`.
///
/// A zero offset returns `today`.
///
/// # Errors
///
/// Returns [`OffsetError::OutOfRange`] if the result falls outside the range
/// of `NaiveDate`.
pub fn shift_date(
    today: NaiveDate,
    offset: i64,
    unit: Unit,
    options: &CalculatorOptions,
) -> Result<NaiveDate> {
    let shifted = match unit {
        Unit::Day => add_days(today, offset),
        Unit::Week => offset.checked_mul(7).and_then(|days| add_days(today, days)),
        Unit::Month => add_months(today, offset, options.month_overflow),
    };

    shifted.ok_or_else(|| {
        OffsetError::OutOfRange(format!(
            "{today} shifted by {offset} {} is not a representable date",
            unit.plural()
        ))
    })
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let n = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(n)
    } else {
        date.checked_sub_days(n)
    }
}

// ── format_result ───────────────────────────────────────────────────────────

/// Describe a computed target date.
///
/// The sentence is `"{amount} {unit} {phrase} {verb}"`: the unit is
/// singular only when the amount is 1, the phrase is "from today" or
/// "before today", and the verb is "is" or "was".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_offset::{format_result, Amount, Direction, Unit};
///
/// let target = NaiveDate::from_ymd_opt(2025, 7, 2).unwrap();
/// let one = Amount::new(1).unwrap();
/// let text = format_result(target, one, Unit::Month, Direction::After);
/// assert_eq!(text.sentence, "1 month from today is");
/// assert_eq!(text.date_string, "Wednesday, July 2, 2025");
/// ```
pub fn format_result(
    target: NaiveDate,
    amount: Amount,
    unit: Unit,
    direction: Direction,
) -> ResultText {
    let sentence = format!(
        "{} {} {} {}",
        amount,
        unit.label(amount),
        direction.phrase(),
        direction.verb()
    );

    ResultText {
        sentence,
        date_string: format_long_date(target),
        target_date: target,
    }
}

/// Format a date as "Weekday, Month D, YYYY".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

// ── calculate ───────────────────────────────────────────────────────────────

/// Compute and describe the result for a [`Selection`].
///
/// Returns `Ok(None)` when the selection has no amount: the caller should
/// clear whatever result it is displaying.
///
/// # Errors
///
/// Returns [`OffsetError::OutOfRange`] if the target date cannot be
/// represented.
pub fn calculate(selection: &Selection, today: NaiveDate) -> Result<Option<ResultText>> {
    calculate_with_options(selection, today, &CalculatorOptions::default())
}

/// Compute and describe the result for a [`Selection`] with options.
pub fn calculate_with_options(
    selection: &Selection,
    today: NaiveDate,
    options: &CalculatorOptions,
) -> Result<Option<ResultText>> {
    let Some(amount) = selection.amount else {
        debug!(%today, "no amount selected, nothing to compute");
        return Ok(None);
    };

    let target = compute_target_date_with_options(
        today,
        amount,
        selection.unit,
        selection.direction,
        options,
    )?;

    debug!(
        %today,
        %amount,
        unit = %selection.unit,
        direction = %selection.direction,
        policy = %options.month_overflow,
        %target,
        "computed target date"
    );

    Ok(Some(format_result(
        target,
        amount,
        selection.unit,
        selection.direction,
    )))
}

/// Results for every amount in [`QUICK_PICKS`], in ascending order.
///
/// # Errors
///
/// Returns [`OffsetError::OutOfRange`] if any target date cannot be
/// represented (only possible for a `today` at the edge of the calendar).
pub fn quick_pick_table(
    today: NaiveDate,
    unit: Unit,
    direction: Direction,
    options: &CalculatorOptions,
) -> Result<Vec<ResultText>> {
    QUICK_PICKS
        .filter_map(Amount::new)
        .map(|amount| {
            let selection = Selection::new(Some(amount), unit, direction);
            calculate_with_options(&selection, today, options)
        })
        .filter_map(Result::transpose)
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
