//! Interval generation between two calendar points.
//!
//! [`interval`] enumerates `start, start + 1 unit, start + 2 units, ...` up to
//! the last whole unit that does not pass `end`. The result is built eagerly
//! and never changes afterwards.

use std::ops::Index;

use commonplace_foundation::{Error, Result, SemanticLimit};

use crate::config::IntervalConfig;
use crate::granularity::Granularity;
use crate::point::CalendarPoint;

/// An ordered, immutable run of calendar points one unit apart.
///
/// Never empty: the first point is always the requested start.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<P> {
    points: Vec<P>,
    granularity: Granularity,
}

impl<P: CalendarPoint> Interval<P> {
    /// Returns the first point.
    #[must_use]
    pub fn start(&self) -> P {
        self.points[0]
    }

    /// Returns the last point.
    #[must_use]
    pub fn end(&self) -> P {
        self.points[self.points.len() - 1]
    }
}

impl<P> Interval<P> {
    /// Returns the step between consecutive points.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points. Generated intervals always have at
    /// least one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[P] {
        &self.points
    }

    /// Consumes the interval, returning its points.
    #[must_use]
    pub fn into_vec(self) -> Vec<P> {
        self.points
    }
}

impl<P> Index<usize> for Interval<P> {
    type Output = P;

    fn index(&self, index: usize) -> &P {
        &self.points[index]
    }
}

impl<P> IntoIterator for Interval<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Interval<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<P: PartialEq> PartialEq<[P]> for Interval<P> {
    fn eq(&self, other: &[P]) -> bool {
        self.points == other
    }
}

impl<P: PartialEq, const N: usize> PartialEq<[P; N]> for Interval<P> {
    fn eq(&self, other: &[P; N]) -> bool {
        self.points == other
    }
}

/// Enumerates the points from `start` to `end` stepped by `granularity`,
/// using the default [`IntervalConfig`].
///
/// # Errors
///
/// See [`interval_with`].
pub fn interval<P: CalendarPoint>(start: P, end: P, granularity: Granularity) -> Result<Interval<P>> {
    interval_with(start, end, granularity, &IntervalConfig::default())
}

/// Enumerates the points from `start` to `end` stepped by `granularity`.
///
/// The interval holds `n + 1` points, where `n` is the number of complete
/// units from `start` to `end`. Point `i` is `start` plus `i` units, so the
/// last point equals `end` whenever `end` is a whole number of units away.
///
/// # Errors
///
/// - [`UnsupportedGranularity`](commonplace_foundation::ErrorKind::UnsupportedGranularity)
///   if `P` cannot be stepped by `granularity` (hours over plain dates).
/// - [`InvalidArgument`](commonplace_foundation::ErrorKind::InvalidArgument)
///   if `start` is after `end`.
/// - [`LimitExceeded`](commonplace_foundation::ErrorKind::LimitExceeded) if
///   the interval would hold more than `config.max_points` points.
/// - [`OutOfRange`](commonplace_foundation::ErrorKind::OutOfRange) if a step
///   leaves chrono's representable range.
pub fn interval_with<P: CalendarPoint>(
    start: P,
    end: P,
    granularity: Granularity,
    config: &IntervalConfig,
) -> Result<Interval<P>> {
    generate(start, end, granularity, config).map_err(|err| err.in_operation("interval"))
}

fn generate<P: CalendarPoint>(
    start: P,
    end: P,
    granularity: Granularity,
    config: &IntervalConfig,
) -> Result<Interval<P>> {
    if !P::supports(granularity) {
        tracing::debug!(%granularity, point = P::KIND, "interval rejected: unsupported granularity");
        return Err(Error::unsupported_granularity(granularity.name(), P::KIND));
    }

    if start > end {
        tracing::debug!(%start, %end, "interval rejected: start after end");
        return Err(Error::invalid_argument(format!(
            "start {} {start} is after end {} {end}",
            P::KIND,
            P::KIND
        )));
    }

    let count = start.units_until(end, granularity)?;
    let requested = count.saturating_add(1);
    let limit = u64::try_from(config.max_points).unwrap_or(u64::MAX);
    if requested > limit {
        tracing::debug!(requested, limit, "interval rejected: too many points");
        return Err(Error::limit_exceeded(SemanticLimit::MaxIntervalPoints {
            limit: config.max_points,
            requested,
        }));
    }

    let points = (0..=count)
        .map(|step| start.plus(step, granularity))
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(%granularity, count, point = P::KIND, "generated interval");

    Ok(Interval {
        points,
        granularity,
    })
}
