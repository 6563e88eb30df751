//! Integration tests for interval generation
//!
//! Covers calendar-correct stepping, ordering checks, unit/point
//! compatibility, and the point limit.

use chrono::{NaiveDate, NaiveDateTime};
use commonplace::foundation::{ErrorKind, SemanticLimit};
use commonplace::temporal::dates::{date, date_time};
use commonplace::temporal::{CalendarPoint, Granularity, IntervalConfig, interval, interval_with};
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    date(y, m, day).unwrap()
}

fn dt(y: i32, m: u32, day: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    date_time(y, m, day, h, min, s).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn three_days() {
    let days = interval(d(2024, 1, 1), d(2024, 1, 3), Granularity::Days).unwrap();
    assert_eq!(days, [d(2024, 1, 1), d(2024, 1, 2), d(2024, 1, 3)]);
}

#[test]
fn months_across_leap_february() {
    let months = interval(d(2024, 1, 31), d(2024, 3, 31), Granularity::Months).unwrap();
    assert_eq!(months, [d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 31)]);
}

#[test]
fn start_after_end_fails() {
    let err = interval(d(2024, 5, 1), d(2024, 4, 1), Granularity::Days).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}

#[test]
fn hours_over_dates_fail_fast() {
    let err = interval(d(2024, 1, 1), d(2024, 1, 1), Granularity::Hours).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedGranularity { .. }));
}

// =============================================================================
// Date-time intervals
// =============================================================================

#[test]
fn minutes_over_date_times() {
    let minutes = interval(
        dt(2024, 12, 31, 23, 58, 30),
        dt(2025, 1, 1, 0, 1, 0),
        Granularity::Minutes,
    )
    .unwrap();
    assert_eq!(
        minutes,
        [
            dt(2024, 12, 31, 23, 58, 30),
            dt(2024, 12, 31, 23, 59, 30),
            dt(2025, 1, 1, 0, 0, 30),
        ]
    );
}

#[test]
fn years_over_date_times() {
    let years = interval(
        dt(2020, 2, 29, 8, 0, 0),
        dt(2022, 3, 1, 8, 0, 0),
        Granularity::Years,
    )
    .unwrap();
    assert_eq!(years, [dt(2020, 2, 29, 8, 0, 0), dt(2021, 2, 28, 8, 0, 0), dt(2022, 2, 28, 8, 0, 0)]);
}

#[test]
fn date_times_accept_every_granularity() {
    let at = dt(2024, 1, 1, 0, 0, 0);
    for g in Granularity::ALL {
        assert_eq!(interval(at, at, g).unwrap(), [at]);
    }
}

// =============================================================================
// Limits
// =============================================================================

#[test]
fn default_limit_stops_runaway_seconds() {
    let err = interval(dt(2000, 1, 1, 0, 0, 0), dt(2024, 1, 1, 0, 0, 0), Granularity::Seconds)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(SemanticLimit::MaxIntervalPoints { .. })
    ));
}

#[test]
fn custom_limit() {
    let config = IntervalConfig::default().with_max_points(12);
    assert!(interval_with(d(2024, 1, 1), d(2024, 12, 1), Granularity::Months, &config).is_ok());
    assert!(interval_with(d(2024, 1, 1), d(2025, 1, 1), Granularity::Months, &config).is_err());
}

#[test]
fn rejections_name_the_interval_operation() {
    let reversed = interval(d(2024, 5, 1), d(2024, 4, 1), Granularity::Days).unwrap_err();
    assert_eq!(reversed.operation(), Some("interval"));

    let hourly = interval(d(2024, 5, 1), d(2024, 5, 2), Granularity::Hours).unwrap_err();
    assert_eq!(hourly.operation(), Some("interval"));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn granularity_and_points_serialize() {
    let g: Granularity = rmp_serde::from_slice(&rmp_serde::to_vec_named(&Granularity::Months).unwrap())
        .unwrap();
    assert_eq!(g, Granularity::Months);

    let months = interval(d(2024, 1, 31), d(2024, 3, 31), g).unwrap();
    let bytes = rmp_serde::to_vec_named(months.as_slice()).unwrap();
    let points: Vec<NaiveDate> = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(months, points[..]);
}

// =============================================================================
// Properties
// =============================================================================

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1950i32..2050, 1u32..=12, 1u32..=31).prop_map(|(y, m, day)| {
        // Fall back to the last valid day of the month.
        (0..4)
            .find_map(|back| NaiveDate::from_ymd_opt(y, m, day - back))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn consecutive_points_are_one_unit_apart(a in date_strategy(), b in date_strategy(), pick in 0usize..3) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let granularity = [Granularity::Days, Granularity::Months, Granularity::Years][pick];
        let points = interval(start, end, granularity).unwrap();

        prop_assert_eq!(points.start(), start);
        prop_assert!(points.end() <= end);
        for (i, point) in points.iter().enumerate() {
            prop_assert_eq!(*point, start.plus(i as u64, granularity).unwrap());
        }
        prop_assert_eq!(
            points.len() as u64,
            start.units_until(end, granularity).unwrap() + 1
        );
    }

    #[test]
    fn reversed_bounds_fail_for_every_unit(a in date_strategy(), b in date_strategy()) {
        prop_assume!(a != b);
        let (start, end) = if a > b { (a, b) } else { (b, a) };
        for g in Granularity::ALL {
            let start = start.and_hms_opt(0, 0, 0).unwrap();
            let end = end.and_hms_opt(0, 0, 0).unwrap();
            let err = interval(start, end, g).unwrap_err();
            prop_assert!(err.is_invalid_argument());
        }
    }
}
