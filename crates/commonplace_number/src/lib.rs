//! Decimal truncation and percentage helpers.
//!
//! All arithmetic is checked: a result that does not fit in a
//! [`Decimal`](rust_decimal::Decimal) is an `OutOfRange` error, never a panic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decimal;

pub use decimal::{add_percent, none_if_zero, percent, subtract_percent, truncate, zero_if_none};
