use std::fmt;

use thiserror::Error;

/// Display units, ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl Unit {
    /// Coarsest first, the order units appear in rendered lists.
    pub const DESCENDING: [Unit; 6] = [
        Unit::Years,
        Unit::Months,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Unit::Seconds => "second",
            Unit::Minutes => "minute",
            Unit::Hours => "hour",
            Unit::Days => "day",
            Unit::Months => "month",
            Unit::Years => "year",
        }
    }

    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
            Unit::Months => "months",
            Unit::Years => "years",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("smallest unit {smallest} is coarser than largest unit {largest}")]
pub struct InvalidWindowError {
    pub smallest: Unit,
    pub largest: Unit,
}

/// The `(smallest, largest)` unit window a duration is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrecisionPolicy {
    smallest: Unit,
    largest: Unit,
}

impl PrecisionPolicy {
    /// Multi-month spans: calendar units only.
    pub const CALENDAR: Self = Self::fixed(Unit::Days, Unit::Years);
    /// A few days out: days and hours.
    pub const DAYS_HOURS: Self = Self::fixed(Unit::Hours, Unit::Days);
    /// One or two days out: down to the minute.
    pub const DAYS_MINUTES: Self = Self::fixed(Unit::Minutes, Unit::Days);
    /// Under a day: full clock detail.
    pub const CLOCK: Self = Self::fixed(Unit::Seconds, Unit::Hours);

    const fn fixed(smallest: Unit, largest: Unit) -> Self {
        Self { smallest, largest }
    }

    pub fn new(smallest: Unit, largest: Unit) -> Result<Self, InvalidWindowError> {
        if smallest > largest {
            return Err(InvalidWindowError { smallest, largest });
        }
        Ok(Self { smallest, largest })
    }

    #[must_use]
    pub const fn smallest(self) -> Unit {
        self.smallest
    }

    #[must_use]
    pub const fn largest(self) -> Unit {
        self.largest
    }

    /// Whether `unit` falls inside the window, bounds included.
    #[must_use]
    pub fn contains(self, unit: Unit) -> bool {
        self.smallest <= unit && unit <= self.largest
    }
}

impl fmt::Display for PrecisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.smallest, self.largest)
    }
}
