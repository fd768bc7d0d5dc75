//! English renderings of a [`SignedDuration`].
//!
//! Long form is a comma-separated unit list ("2 years, 3 months, 18 days");
//! the clock form is fixed-width `HH:MM:SS`. Both render magnitudes only;
//! direction is the caller's concern.

use chrono::NaiveDateTime;

use dayspan_types::{PrecisionPolicy, SignedDuration, Unit};

use crate::calendar::days_in_months;

/// The two halves of a split rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitParts {
    /// Years, months and days. Empty when all three are zero.
    pub calendar_part: String,
    /// Hours, minutes and seconds, always `HH:MM:SS`.
    pub clock_part: String,
}

/// Renders `d` inside `policy`'s window.
///
/// `now` anchors the month-to-day fold when the window's largest unit is
/// finer than months. A window whose units are all zero renders the smallest
/// unit as zero ("0 seconds").
#[must_use]
pub fn format_auto(d: &SignedDuration, policy: PrecisionPolicy, now: NaiveDateTime) -> String {
    let windowed = round_to_window(d, policy, now);
    let list = long_list(&windowed, |unit| policy.contains(unit));
    if list.is_empty() {
        format!("0 {}", policy.smallest().plural())
    } else {
        list
    }
}

/// Always both halves, never coarsened.
#[must_use]
pub fn format_split(d: &SignedDuration) -> SplitParts {
    let clock = d.clock();
    SplitParts {
        calendar_part: long_list(&d.calendar(), |_| true),
        clock_part: format!("{:02}:{:02}:{:02}", clock.hours, clock.minutes, clock.seconds),
    }
}

/// Re-expresses `d` within the window: units coarser than `largest` fold down
/// into it, units finer than `smallest` are floored away.
///
/// Months fold into days by walking the calendar from `now` in the duration's
/// direction, so "1 month" from Jan 31 is 28 or 29 days rather than a guess.
#[must_use]
pub fn round_to_window(
    d: &SignedDuration,
    policy: PrecisionPolicy,
    now: NaiveDateTime,
) -> SignedDuration {
    let largest = policy.largest();
    let mut out = *d;

    if largest < Unit::Years {
        out.months = out.months.saturating_add(out.years.saturating_mul(12));
        out.years = 0;
    }
    if largest < Unit::Months {
        let folded = days_in_months(now, out.months, d.sign);
        out.days = out.days.saturating_add(folded);
        out.months = 0;
    }
    if largest < Unit::Days {
        out.hours = out.hours.saturating_add(out.days.saturating_mul(24));
        out.days = 0;
    }
    if largest < Unit::Hours {
        out.minutes = out.minutes.saturating_add(out.hours.saturating_mul(60));
        out.hours = 0;
    }
    if largest < Unit::Minutes {
        out.seconds = out.seconds.saturating_add(out.minutes.saturating_mul(60));
        out.minutes = 0;
    }

    for unit in Unit::DESCENDING {
        if unit < policy.smallest() {
            out = out.with(unit, 0);
        }
    }
    out
}

fn long_list(d: &SignedDuration, include: impl Fn(Unit) -> bool) -> String {
    Unit::DESCENDING
        .into_iter()
        .filter(|unit| include(*unit))
        .filter_map(|unit| match d.get(unit) {
            0 => None,
            1 => Some(format!("1 {}", unit.singular())),
            n => Some(format!("{n} {}", unit.plural())),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
