//! # date-offset
//!
//! Deterministic date-offset computation.
//!
//! Given today's date, a positive amount, a unit (days, weeks, months) and a
//! direction (before, after), compute the target calendar date and describe
//! it: `"2 weeks before today was"` / `"Monday, May 19, 2025"`. The long date
//! string on its own is what a "copy" action hands to the clipboard.
//!
//! ## Modules
//!
//! - [`selection`]: Unit, direction, amount, and the immutable [`Selection`]
//! - [`calculator`]: Target-date arithmetic, result formatting, quick picks
//! - [`overflow`]: Month-overflow policies (rollover, clamp)
//! - [`clock`]: Date parsing and "today" in a timezone
//! - [`error`]: Error types

pub mod calculator;
pub mod clock;
pub mod error;
pub mod overflow;
pub mod selection;

pub use calculator::{
    calculate, calculate_with_options, compute_target_date, compute_target_date_with_options,
    format_long_date, format_result, quick_pick_table, shift_date, CalculatorOptions, ResultText,
    LONG_DATE_FORMAT, QUICK_PICKS,
};
pub use clock::{parse_date, today_in_timezone};
pub use error::OffsetError;
pub use overflow::{add_months, MonthOverflow};
pub use selection::{Amount, Direction, Selection, Unit};
