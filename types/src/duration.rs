use std::cmp::Ordering;

use crate::Unit;

/// Direction of a target relative to the observation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    /// Target lies in the past.
    Negative,
    /// Target is exactly now.
    #[default]
    Zero,
    /// Target lies in the future.
    Positive,
}

impl Sign {
    /// Sign of `target` measured from `now`.
    #[must_use]
    pub fn between<T: Ord>(target: &T, now: &T) -> Self {
        match target.cmp(now) {
            Ordering::Greater => Sign::Positive,
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
        }
    }

    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    #[must_use]
    pub const fn is_past(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// A calendar-aware duration split into unsigned magnitudes plus a sign.
///
/// Keeping the direction out of the fields means calendar arithmetic never has
/// to reason about mixed-sign components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SignedDuration {
    pub sign: Sign,
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl SignedDuration {
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            years: 0,
            months: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// True when every magnitude field is zero, regardless of sign.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }

    /// Magnitude of a single unit field.
    #[must_use]
    pub const fn get(&self, unit: Unit) -> u32 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    /// Copy with one unit field replaced.
    #[must_use]
    pub const fn with(self, unit: Unit, value: u32) -> Self {
        let mut out = self;
        match unit {
            Unit::Years => out.years = value,
            Unit::Months => out.months = value,
            Unit::Days => out.days = value,
            Unit::Hours => out.hours = value,
            Unit::Minutes => out.minutes = value,
            Unit::Seconds => out.seconds = value,
        }
        out
    }

    /// The years/months/days portion only.
    #[must_use]
    pub const fn calendar(self) -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
            ..self
        }
    }

    /// The hours/minutes/seconds portion only.
    #[must_use]
    pub const fn clock(self) -> Self {
        Self {
            years: 0,
            months: 0,
            days: 0,
            ..self
        }
    }
}
