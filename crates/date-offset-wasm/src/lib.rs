//! WASM bindings for the date-offset calculator.
//!
//! A web page keeps its own selection (amount field, unit and direction
//! buttons) and calls [`calculate`] on every change, passing today's date
//! from the browser clock. The page renders [`OffsetResult::html`] into the
//! result area and copies [`OffsetResult::date_string`] on "copy".

use date_offset::{
    calculate_with_options, parse_date, Amount, CalculatorOptions, Direction, MonthOverflow,
    OffsetError, ResultText, Selection, Unit, QUICK_PICKS,
};
use wasm_bindgen::prelude::*;

/// One computed result, exposed to JavaScript through getters.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetResult {
    inner: ResultText,
}

#[wasm_bindgen]
impl OffsetResult {
    #[wasm_bindgen(getter)]
    pub fn sentence(&self) -> String {
        self.inner.sentence.clone()
    }

    #[wasm_bindgen(getter, js_name = dateString)]
    pub fn date_string(&self) -> String {
        self.inner.clipboard_text().to_string()
    }

    #[wasm_bindgen(getter, js_name = isoDate)]
    pub fn iso_date(&self) -> String {
        self.inner.target_date.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn html(&self) -> String {
        self.inner.to_html()
    }
}

/// Compute the result for the current selection.
///
/// `today` is `YYYY-MM-DD`; `amount` is the raw text of the amount field;
/// `month_overflow` is `"rollover"` or `"clamp"`. Returns `undefined` when
/// the amount is empty, zero, or non-numeric.
#[wasm_bindgen]
pub fn calculate(
    today: &str,
    amount: &str,
    unit: &str,
    direction: &str,
    month_overflow: &str,
) -> Result<Option<OffsetResult>, JsError> {
    calculate_from_strings(today, amount, unit, direction, month_overflow)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// The amounts the page should offer as buttons.
#[wasm_bindgen(js_name = quickPicks)]
pub fn quick_picks() -> Vec<u32> {
    QUICK_PICKS.collect()
}

fn calculate_from_strings(
    today: &str,
    amount: &str,
    unit: &str,
    direction: &str,
    month_overflow: &str,
) -> Result<Option<OffsetResult>, OffsetError> {
    let today = parse_date(today)?;
    let selection = Selection::new(
        Amount::parse(amount),
        unit.parse::<Unit>()?,
        direction.parse::<Direction>()?,
    );
    let options = CalculatorOptions {
        month_overflow: month_overflow.parse::<MonthOverflow>()?,
    };

    let result = calculate_with_options(&selection, today, &options)?;
    Ok(result.map(|inner| OffsetResult { inner }))
}
