//! Input checks applied to raw form strings before they reach SQLite.

use chrono::NaiveDate;

use crate::error::{LibraryError, Result};

/// Date format used by every form field and stored in the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trim `raw` and reject it when nothing is left.
pub fn required(label: &str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        Err(LibraryError::validation(format!("{label} is required.")))
    } else {
        Ok(value.to_string())
    }
}

/// Most significant digits a price may carry. Any plain decimal of this length
/// survives the trip through a SQLite REAL unchanged.
pub const PRICE_DIGITS: usize = 15;

/// Plain non-negative decimal such as `499` or `12.50`. Exponents, signs and
/// values with more than [`PRICE_DIGITS`] significant digits are rejected.
pub fn price(label: &str, raw: &str) -> Result<f64> {
    let value = required(label, raw)?;
    if value.starts_with('-') {
        return Err(LibraryError::validation(format!(
            "{label} must be zero or more."
        )));
    }

    let (whole, fraction) = value.split_once('.').unwrap_or((value.as_str(), ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(LibraryError::validation(format!("{label} must be a number.")));
    }

    let fraction = fraction.trim_end_matches('0');
    let significant = format!("{whole}{fraction}").trim_start_matches('0').len();
    if significant > PRICE_DIGITS {
        return Err(LibraryError::validation(format!(
            "{label} may have at most {PRICE_DIGITS} significant digits."
        )));
    }

    value
        .parse::<f64>()
        .map_err(|_| LibraryError::validation(format!("{label} must be a number.")))
}

pub fn quantity(label: &str, raw: &str) -> Result<i64> {
    let value = required(label, raw)?;
    let parsed = value
        .parse::<i64>()
        .map_err(|_| LibraryError::validation(format!("{label} must be a whole number.")))?;
    if parsed < 0 {
        return Err(LibraryError::validation(format!(
            "{label} must be zero or more."
        )));
    }
    Ok(parsed)
}

pub fn date(label: &str, raw: &str) -> Result<NaiveDate> {
    let value = required(label, raw)?;
    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map_err(|_| LibraryError::validation(format!("{label} must be YYYY-MM-DD.")))
}
