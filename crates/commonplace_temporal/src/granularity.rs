//! Calendar step sizes.

use std::fmt;
use std::str::FromStr;

use commonplace_foundation::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The calendar step used to enumerate points between two bounds.
///
/// Days, months, and years step any calendar point. Hours, minutes, and
/// seconds need a point that carries a time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Granularity {
    /// One calendar day.
    Days,
    /// One calendar month, clamped to the last day of shorter months.
    Months,
    /// Twelve calendar months.
    Years,
    /// Sixty minutes.
    Hours,
    /// Sixty seconds.
    Minutes,
    /// One second.
    Seconds,
}

impl Granularity {
    /// Every granularity, largest date unit first.
    pub const ALL: [Self; 6] = [
        Self::Years,
        Self::Months,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// Returns the lowercase plural name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    /// Returns true for days, months, and years.
    #[must_use]
    pub const fn is_date_based(self) -> bool {
        matches!(self, Self::Days | Self::Months | Self::Years)
    }

    /// Returns true for hours, minutes, and seconds.
    #[must_use]
    pub const fn is_time_based(self) -> bool {
        !self.is_date_based()
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    /// Accepts singular or plural names in any case (`"day"`, `"Months"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let unit = match lower.strip_suffix('s').unwrap_or(&lower) {
            "day" => Self::Days,
            "month" => Self::Months,
            "year" => Self::Years,
            "hour" => Self::Hours,
            "minute" => Self::Minutes,
            "second" => Self::Seconds,
            _ => return Err(Error::invalid_argument(format!("unknown granularity: {s}"))),
        };
        Ok(unit)
    }
}
