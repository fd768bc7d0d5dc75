//! Calendar-aware difference between two civil date-times.
//!
//! Whole months are counted by stepping from `now` toward the target with
//! month-end clamping (Jan 31 + 1 month = Feb 28/29). What is left over is an
//! exact span, split into days and clock fields at 86 400 seconds per day:
//! naive date-times carry no offset, so every day is the same length.

use chrono::{Datelike, Months, NaiveDateTime};

use dayspan_types::{Sign, SignedDuration};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// `target - now`, calendar-aware, truncated to whole seconds.
///
/// The sign compares the exact instants, so a target half a second ahead is
/// `Positive` with all-zero magnitudes.
///
/// A month step counts as whole when its clamped landing date does not pass
/// the target: Jan 31 to Feb 28 is 1 month, 0 days, not 28 days.
#[must_use]
pub fn compute_duration(target: NaiveDateTime, now: NaiveDateTime) -> SignedDuration {
    let sign = Sign::between(&target, &now);
    if sign == Sign::Zero {
        return SignedDuration::zero();
    }

    let months = whole_months(now, target, sign);
    let anchor = shift_months(now, months, sign).unwrap_or(now);
    let rest = (target - anchor).num_seconds().unsigned_abs();

    SignedDuration {
        sign,
        years: months / 12,
        months: months % 12,
        days: saturate(rest / SECS_PER_DAY),
        hours: saturate(rest % SECS_PER_DAY / SECS_PER_HOUR),
        minutes: saturate(rest % SECS_PER_HOUR / SECS_PER_MINUTE),
        seconds: saturate(rest % SECS_PER_MINUTE),
    }
}

/// Moves `from` by `months` in the direction of `sign`.
pub(crate) fn shift_months(from: NaiveDateTime, months: u32, sign: Sign) -> Option<NaiveDateTime> {
    if months == 0 {
        return Some(from);
    }
    let step = Months::new(months);
    match sign {
        Sign::Negative => from.checked_sub_months(step),
        Sign::Zero | Sign::Positive => from.checked_add_months(step),
    }
}

/// Number of days covered by `months` calendar months starting at `from`.
pub(crate) fn days_in_months(from: NaiveDateTime, months: u32, sign: Sign) -> u32 {
    match shift_months(from, months, sign) {
        Some(shifted) => saturate((shifted - from).num_days().unsigned_abs()),
        None => u32::MAX,
    }
}

/// Largest month count that can be stepped from `now` without passing `target`.
fn whole_months(now: NaiveDateTime, target: NaiveDateTime, sign: Sign) -> u32 {
    let span = i64::from(target.year() - now.year()) * 12 + i64::from(target.month())
        - i64::from(now.month());
    let span = match sign {
        Sign::Positive => span,
        Sign::Negative => -span,
        Sign::Zero => 0,
    };

    // The raw month-number distance is an upper bound: one more step always
    // lands in the month after the target's.
    let mut months = u32::try_from(span.max(0)).unwrap_or(u32::MAX);
    while months > 0 && overshoots(now, target, months, sign) {
        months -= 1;
    }
    months
}

fn overshoots(now: NaiveDateTime, target: NaiveDateTime, months: u32, sign: Sign) -> bool {
    match shift_months(now, months, sign) {
        Some(shifted) => match sign {
            Sign::Positive => shifted > target,
            Sign::Negative => shifted < target,
            Sign::Zero => false,
        },
        None => true,
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
