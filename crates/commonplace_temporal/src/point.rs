//! Calendar points and whole-unit arithmetic.
//!
//! Unit counts follow the calendar rather than elapsed time: a month is only
//! complete once the day of month has been reached, so `2024-01-31` to
//! `2024-02-29` is zero months while `2024-01-31` to `2024-03-31` is two.

use std::fmt;

use chrono::format::{DelayedFormat, StrftimeItems};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta};
use commonplace_foundation::{Error, Result};

use crate::granularity::Granularity;

/// A date or date-time on which whole-unit addition is defined.
pub trait CalendarPoint: Copy + Ord + fmt::Debug + fmt::Display {
    /// Human-readable kind, used in error messages.
    const KIND: &'static str;

    /// Returns true if points of this kind can be stepped by `granularity`.
    fn supports(granularity: Granularity) -> bool;

    /// Counts the complete `granularity` units from `self` to `end`.
    ///
    /// `self` must not be after `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the granularity is unsupported or the count does
    /// not fit in a `u64`.
    fn units_until(self, end: Self, granularity: Granularity) -> Result<u64>;

    /// Returns the point `amount` units after `self`.
    ///
    /// Month and year steps clamp to the last day of shorter months.
    ///
    /// # Errors
    ///
    /// Returns an error if the granularity is unsupported or the result is
    /// outside chrono's representable range.
    fn plus(self, amount: u64, granularity: Granularity) -> Result<Self>;

    /// Prepares a strftime rendering of the point.
    fn strftime<'a>(&self, pattern: &'a str) -> DelayedFormat<StrftimeItems<'a>>;
}

fn unsupported<P: CalendarPoint>(granularity: Granularity) -> Error {
    Error::unsupported_granularity(granularity.name(), P::KIND)
}

fn overflow<P: CalendarPoint>(start: P, amount: u64, granularity: Granularity) -> Error {
    Error::out_of_range(format!("{start} plus {amount} {granularity}"))
}

fn non_negative(count: i64) -> Result<u64> {
    u64::try_from(count).map_err(|_| Error::invalid_argument("start is after end"))
}

/// Months since year zero, scaled by 32 so the day of month breaks ties.
fn packed_month_day(date: NaiveDate) -> i64 {
    (i64::from(date.year()) * 12 + i64::from(date.month0())) * 32 + i64::from(date.day())
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (packed_month_day(end) - packed_month_day(start)) / 32
}

fn add_months<P: CalendarPoint>(
    start: P,
    amount: u64,
    granularity: Granularity,
    months: u64,
    add: impl FnOnce(Months) -> Option<P>,
) -> Result<P> {
    let months = u32::try_from(months).map_err(|_| overflow(start, amount, granularity))?;
    add(Months::new(months)).ok_or_else(|| overflow(start, amount, granularity))
}

impl CalendarPoint for NaiveDate {
    const KIND: &'static str = "date";

    fn supports(granularity: Granularity) -> bool {
        granularity.is_date_based()
    }

    fn units_until(self, end: Self, granularity: Granularity) -> Result<u64> {
        match granularity {
            Granularity::Days => non_negative(end.signed_duration_since(self).num_days()),
            Granularity::Months => non_negative(months_between(self, end)),
            Granularity::Years => non_negative(months_between(self, end) / 12),
            Granularity::Hours | Granularity::Minutes | Granularity::Seconds => {
                Err(unsupported::<Self>(granularity))
            }
        }
    }

    fn plus(self, amount: u64, granularity: Granularity) -> Result<Self> {
        match granularity {
            Granularity::Days => self
                .checked_add_days(Days::new(amount))
                .ok_or_else(|| overflow(self, amount, granularity)),
            Granularity::Months => {
                add_months(self, amount, granularity, amount, |m| self.checked_add_months(m))
            }
            Granularity::Years => {
                let months = amount
                    .checked_mul(12)
                    .ok_or_else(|| overflow(self, amount, granularity))?;
                add_months(self, amount, granularity, months, |m| self.checked_add_months(m))
            }
            Granularity::Hours | Granularity::Minutes | Granularity::Seconds => {
                Err(unsupported::<Self>(granularity))
            }
        }
    }

    fn strftime<'a>(&self, pattern: &'a str) -> DelayedFormat<StrftimeItems<'a>> {
        self.format(pattern)
    }
}

impl CalendarPoint for NaiveDateTime {
    const KIND: &'static str = "date-time";

    fn supports(_granularity: Granularity) -> bool {
        true
    }

    fn units_until(self, end: Self, granularity: Granularity) -> Result<u64> {
        if granularity.is_date_based() {
            // A day only counts once the start's time of day is reached.
            let mut end_date = end.date();
            if end_date > self.date() && end.time() < self.time() {
                end_date = end_date
                    .pred_opt()
                    .ok_or_else(|| Error::out_of_range(format!("day before {end_date}")))?;
            }
            return self.date().units_until(end_date, granularity);
        }

        let elapsed = end.signed_duration_since(self);
        let count = match granularity {
            Granularity::Hours => elapsed.num_hours(),
            Granularity::Minutes => elapsed.num_minutes(),
            _ => elapsed.num_seconds(),
        };
        non_negative(count)
    }

    fn plus(self, amount: u64, granularity: Granularity) -> Result<Self> {
        let signed = i64::try_from(amount).map_err(|_| overflow(self, amount, granularity))?;
        let delta = match granularity {
            Granularity::Days => {
                return self
                    .checked_add_days(Days::new(amount))
                    .ok_or_else(|| overflow(self, amount, granularity));
            }
            Granularity::Months => {
                return add_months(self, amount, granularity, amount, |m| {
                    self.checked_add_months(m)
                });
            }
            Granularity::Years => {
                let months = amount
                    .checked_mul(12)
                    .ok_or_else(|| overflow(self, amount, granularity))?;
                return add_months(self, amount, granularity, months, |m| {
                    self.checked_add_months(m)
                });
            }
            Granularity::Hours => TimeDelta::try_hours(signed),
            Granularity::Minutes => TimeDelta::try_minutes(signed),
            Granularity::Seconds => TimeDelta::try_seconds(signed),
        };
        delta
            .and_then(|delta| self.checked_add_signed(delta))
            .ok_or_else(|| overflow(self, amount, granularity))
    }

    fn strftime<'a>(&self, pattern: &'a str) -> DelayedFormat<StrftimeItems<'a>> {
        self.format(pattern)
    }
}
