//! End-to-end engine behavior on real date pairs: sign, precision routing,
//! rendered strings and calendar round trips.

use chrono::{Months, NaiveDateTime, TimeDelta};

use dayspan_core::{compute_duration, format_split, render, select_precision};
use dayspan_types::{PrecisionPolicy, Sign, SignedDuration};

use crate::common::{at, midnight};

fn policy_between(target: NaiveDateTime, now: NaiveDateTime) -> PrecisionPolicy {
    select_precision(&compute_duration(target, now))
}

/// Re-applies a computed duration to `now`, in its own direction.
fn replay(now: NaiveDateTime, d: &SignedDuration) -> NaiveDateTime {
    let months = Months::new(d.years * 12 + d.months);
    let rest = TimeDelta::days(i64::from(d.days))
        + TimeDelta::hours(i64::from(d.hours))
        + TimeDelta::minutes(i64::from(d.minutes))
        + TimeDelta::seconds(i64::from(d.seconds));
    match d.sign {
        Sign::Negative => now.checked_sub_months(months).unwrap() - rest,
        Sign::Zero | Sign::Positive => now.checked_add_months(months).unwrap() + rest,
    }
}

#[test]
fn future_deadline_counts_down() {
    let rendering = render(midnight(2027, 9, 23), midnight(2025, 6, 5));

    assert_eq!(rendering.sign, Sign::Positive);
    assert_eq!(rendering.sign.as_i8(), 1);
    assert_eq!(rendering.strings.auto_formatted, "2 years, 3 months, 18 days");
    assert_eq!(rendering.strings.calendar_part, "2 years, 3 months, 18 days");
    assert_eq!(rendering.strings.clock_part, "00:00:00");
}

#[test]
fn old_milestone_counts_up_at_calendar_precision() {
    let target = midnight(2014, 9, 6);
    for now in [
        midnight(2014, 9, 7),
        at(2020, 2, 29, 13, 45, 0),
        midnight(2025, 6, 5),
        at(2031, 12, 31, 23, 59, 59),
    ] {
        let d = compute_duration(target, now);
        assert_eq!(d.sign, Sign::Negative, "now = {now}");
        if now > midnight(2014, 9, 14) {
            assert_eq!(select_precision(&d), PrecisionPolicy::CALENDAR, "now = {now}");
        }
    }
}

#[test]
fn half_hour_ahead_uses_clock_precision() {
    let now = at(2025, 6, 5, 9, 15, 0);
    let target = now + TimeDelta::minutes(30);
    let rendering = render(target, now);

    assert_eq!(rendering.sign, Sign::Positive);
    assert_eq!(policy_between(target, now), PrecisionPolicy::CLOCK);
    assert_eq!(rendering.strings.auto_formatted, "30 minutes");
    assert_eq!(rendering.strings.calendar_part, "");
    assert_eq!(rendering.strings.clock_part, "00:30:00");
}

#[test]
fn sign_follows_ordering() {
    let now = at(2025, 6, 5, 12, 0, 0);

    assert_eq!(render(now + TimeDelta::days(1), now).sign, Sign::Positive);
    assert_eq!(render(now - TimeDelta::days(1), now).sign, Sign::Negative);
    assert_eq!(render(now, now).sign, Sign::Zero);
    assert_eq!(render(now, now).sign.as_i8(), 0);
    assert!(render(now - TimeDelta::seconds(1), now).sign.is_past());
}

#[test]
fn precision_routes_on_whole_days() {
    let now = midnight(2025, 3, 10);
    let cases = [
        (TimeDelta::days(8), PrecisionPolicy::CALENDAR),
        (TimeDelta::days(7), PrecisionPolicy::DAYS_HOURS),
        (TimeDelta::days(3), PrecisionPolicy::DAYS_HOURS),
        (TimeDelta::days(2) + TimeDelta::seconds(1), PrecisionPolicy::DAYS_MINUTES),
        (TimeDelta::days(2), PrecisionPolicy::DAYS_MINUTES),
        (TimeDelta::hours(23), PrecisionPolicy::CLOCK),
    ];

    for (offset, expected) in cases {
        assert_eq!(policy_between(now + offset, now), expected, "ahead {offset}");
        assert_eq!(policy_between(now - offset, now), expected, "behind {offset}");
    }
}

#[test]
fn a_month_and_a_week_is_calendar_precision() {
    let now = midnight(2025, 3, 10);
    let target = now.checked_add_months(Months::new(1)).unwrap() + TimeDelta::days(7);

    let d = compute_duration(target, now);
    assert_eq!((d.months, d.days), (1, 7));
    assert_eq!(select_precision(&d), PrecisionPolicy::CALENDAR);
    assert_eq!(render(target, now).strings.auto_formatted, "1 month, 7 days");
}

#[test]
fn auto_format_drops_units_below_the_window() {
    let now = midnight(2025, 3, 10);

    let three_days = now + TimeDelta::days(3) + TimeDelta::hours(4) + TimeDelta::minutes(5);
    assert_eq!(render(three_days, now).strings.auto_formatted, "3 days, 4 hours");

    let one_day = now
        + TimeDelta::days(1)
        + TimeDelta::hours(2)
        + TimeDelta::minutes(30)
        + TimeDelta::seconds(15);
    assert_eq!(
        render(one_day, now).strings.auto_formatted,
        "1 day, 2 hours, 30 minutes"
    );
    assert_eq!(render(one_day, now).strings.clock_part, "02:30:15");

    let two_days_one_second = now + TimeDelta::days(2) + TimeDelta::seconds(1);
    assert_eq!(render(two_days_one_second, now).strings.auto_formatted, "2 days");
}

#[test]
fn split_is_stable_across_calls() {
    let now = at(2025, 6, 5, 8, 0, 0);
    for target in [
        midnight(2027, 9, 23),
        midnight(2014, 9, 6),
        now + TimeDelta::seconds(59),
        now,
    ] {
        let d = compute_duration(target, now);
        assert_eq!(format_split(&d), format_split(&d));
        assert_eq!(render(target, now), render(target, now));
    }
}

#[test]
fn durations_replay_to_the_target() {
    let pairs = [
        (midnight(2027, 9, 23), midnight(2025, 6, 5)),
        (midnight(2014, 9, 6), midnight(2025, 6, 5)),
        (at(2025, 3, 1, 6, 0, 0), at(2025, 1, 31, 18, 30, 45)),
        (at(2024, 2, 29, 12, 0, 0), at(2028, 2, 28, 11, 59, 59)),
        (at(2016, 1, 15, 0, 0, 0), at(2025, 12, 31, 23, 59, 59)),
    ];

    for (target, now) in pairs {
        let d = compute_duration(target, now);
        assert_eq!(replay(now, &d), target, "target = {target}, now = {now}");
    }
}

#[test]
fn replay_truncates_the_sub_second_remainder() {
    let now = midnight(2025, 6, 5);
    let target = now + TimeDelta::days(40) + TimeDelta::milliseconds(750);

    let d = compute_duration(target, now);
    assert_eq!(replay(now, &d).date(), target.date());
    assert_eq!(target - replay(now, &d), TimeDelta::milliseconds(750));
}
