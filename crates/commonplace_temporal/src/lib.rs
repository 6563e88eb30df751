//! Calendar dates, granularities, and interval generation.
//!
//! This crate provides:
//! - [`Granularity`] - Calendar step sizes (days through seconds)
//! - [`CalendarPoint`] - Whole-unit arithmetic over `NaiveDate` and `NaiveDateTime`
//! - [`interval`] - Eager enumeration of points between two bounds
//! - [`dates`] - Construction, formatting, parsing, and time zone placement

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dates;
pub mod granularity;
pub mod interval;
pub mod point;

pub use config::IntervalConfig;
pub use granularity::Granularity;
pub use interval::{Interval, interval, interval_with};
pub use point::CalendarPoint;
