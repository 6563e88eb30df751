//! Helpers over [`Decimal`]: null-coalescing, truncation, and percentages.
//!
//! Percentages are expressed in hundredths, so `15` means fifteen percent.

use commonplace_foundation::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest number of fractional digits a [`Decimal`] can hold.
pub const MAX_PLACES: u32 = 28;

/// Returns the value, or zero when there is none.
#[must_use]
pub fn zero_if_none(value: Option<Decimal>) -> Decimal {
    value.unwrap_or_default()
}

/// Returns `None` for a missing or zero value, whatever its scale.
#[must_use]
pub fn none_if_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

/// Cuts `value` down to `places` fractional digits, rounding toward zero.
///
/// The result always has exactly `places` fractional digits, so
/// `truncate(1.5, 3)` renders as `1.500`. When the integer part leaves no
/// room for that many digits, the scale stops at the largest one that fits.
///
/// # Errors
///
/// Returns `InvalidArgument` if `places` exceeds [`MAX_PLACES`].
pub fn truncate(value: Decimal, places: u32) -> Result<Decimal> {
    if places > MAX_PLACES {
        return Err(Error::invalid_argument(format!(
            "cannot keep {places} decimal places, at most {MAX_PLACES} are supported"
        ))
        .in_operation("truncate"));
    }
    let mut truncated = value.round_dp_with_strategy(places, RoundingStrategy::ToZero);
    truncated.rescale(places);
    Ok(truncated)
}

/// Returns `percent` percent of `value`.
///
/// ```
/// use commonplace_number::percent;
/// use rust_decimal::Decimal;
///
/// let tip = percent(Decimal::new(8000, 2), Decimal::new(15, 0)).unwrap();
/// assert_eq!(tip, Decimal::new(12, 0));
/// ```
///
/// # Errors
///
/// Returns `OutOfRange` if the product overflows.
pub fn percent(value: Decimal, percent: Decimal) -> Result<Decimal> {
    share(value, percent).map_err(|err| err.in_operation("percent"))
}

/// Returns `value` increased by `percent` percent of itself.
///
/// # Errors
///
/// Returns `OutOfRange` if the result overflows.
pub fn add_percent(value: Decimal, percent: Decimal) -> Result<Decimal> {
    share(value, percent)
        .and_then(|part| checked(value.checked_add(part), value, percent))
        .map_err(|err| err.in_operation("add_percent"))
}

/// Returns `value` decreased by `percent` percent of itself.
///
/// # Errors
///
/// Returns `OutOfRange` if the result overflows.
pub fn subtract_percent(value: Decimal, percent: Decimal) -> Result<Decimal> {
    share(value, percent)
        .and_then(|part| checked(value.checked_sub(part), value, percent))
        .map_err(|err| err.in_operation("subtract_percent"))
}

fn share(value: Decimal, percent: Decimal) -> Result<Decimal> {
    let scaled = value
        .checked_mul(percent)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED));
    checked(scaled, value, percent)
}

fn checked(result: Option<Decimal>, value: Decimal, percent: Decimal) -> Result<Decimal> {
    result.ok_or_else(|| Error::out_of_range(format!("{percent}% of {value} does not fit in a decimal")))
}
