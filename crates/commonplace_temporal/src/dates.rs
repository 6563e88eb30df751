//! Construction, field access, formatting, and parsing of calendar points.
//!
//! Patterns use chrono's strftime syntax (`%Y-%m-%d %H:%M:%S`).

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use commonplace_foundation::{Error, Result};

use crate::point::CalendarPoint;

/// Creates a date from its components.
///
/// # Errors
///
/// Returns `InvalidDate` if the components do not name a real day.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::invalid_date(format!("{year:04}-{month:02}-{day:02}")))
}

/// Creates a date-time from its components.
///
/// # Errors
///
/// Returns `InvalidDate` if the components do not name a real instant.
pub fn date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<NaiveDateTime> {
    date(year, month, day)?
        .and_hms_opt(hour, minute, second)
        .ok_or_else(|| {
            Error::invalid_date(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            ))
        })
}

/// Creates a date-time with zero seconds.
///
/// # Errors
///
/// Returns `InvalidDate` if the components do not name a real instant.
pub fn date_time_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    date_time(year, month, day, hour, minute, 0)
}

/// Returns the day of month, starting at 1.
#[must_use]
pub fn day_of_month(point: &impl Datelike) -> u32 {
    point.day()
}

/// Returns the month, starting at 1.
#[must_use]
pub fn month(point: &impl Datelike) -> u32 {
    point.month()
}

/// Returns the year.
#[must_use]
pub fn year(point: &impl Datelike) -> i32 {
    point.year()
}

/// Renders `point` with a strftime pattern.
///
/// # Errors
///
/// Returns `InvalidFormat` if the pattern is malformed or asks for a field
/// the point does not have, such as `%H` on a plain date.
pub fn format<P: CalendarPoint>(point: P, pattern: &str) -> Result<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", point.strftime(pattern)).map_err(|_| {
        Error::invalid_format(pattern, format!("cannot render a {} with this pattern", P::KIND))
            .in_operation("format")
    })?;
    Ok(rendered)
}

/// Parses a date with a strftime pattern.
///
/// # Errors
///
/// Returns `InvalidFormat` if `text` does not match `pattern`.
pub fn parse_date(text: &str, pattern: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, pattern)
        .map_err(|e| Error::invalid_format(pattern, e.to_string()).in_operation("parse_date"))
}

/// Parses a date-time with a strftime pattern.
///
/// # Errors
///
/// Returns `InvalidFormat` if `text` does not match `pattern`.
pub fn parse_date_time(text: &str, pattern: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, pattern)
        .map_err(|e| Error::invalid_format(pattern, e.to_string()).in_operation("parse_date_time"))
}

/// Places a wall-clock date-time in `zone`.
///
/// When the wall-clock time is ambiguous (clocks falling back), the earlier
/// instant is chosen.
///
/// # Errors
///
/// Returns `InvalidDate` if the time was skipped in `zone` (clocks springing
/// forward).
pub fn in_zone<Tz: TimeZone>(point: NaiveDateTime, zone: &Tz) -> Result<DateTime<Tz>> {
    zone.from_local_datetime(&point)
        .earliest()
        .ok_or_else(|| Error::invalid_date(format!("{point} does not exist in the target time zone")))
}

/// Returns the first instant of `day` in `zone`.
///
/// # Errors
///
/// Returns `InvalidDate` if midnight was skipped in `zone`.
pub fn start_of_day<Tz: TimeZone>(day: NaiveDate, zone: &Tz) -> Result<DateTime<Tz>> {
    in_zone(day.and_time(NaiveTime::MIN), zone)
}

/// Places a wall-clock date-time in the system time zone.
///
/// # Errors
///
/// See [`in_zone`].
pub fn to_local(point: NaiveDateTime) -> Result<DateTime<Local>> {
    in_zone(point, &Local)
}

/// Returns the wall-clock date-time of an instant in its own zone.
#[must_use]
pub fn wall_clock<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDateTime {
    instant.naive_local()
}
