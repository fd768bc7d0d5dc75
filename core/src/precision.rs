use dayspan_types::{PrecisionPolicy, SignedDuration};

/// Picks the display window for a duration. First matching rule wins:
///
/// | magnitude                              | window              |
/// |----------------------------------------|---------------------|
/// | years > 0, months > 0, or days > 7     | (days, years)       |
/// | days > 2                               | (hours, days)       |
/// | days > 0                               | (minutes, days)     |
/// | under a day                            | (seconds, hours)    |
///
/// Thresholds compare the integer `days` field with strict `>`, so exactly
/// 7 days lands in the second row and exactly 2 days in the third.
#[must_use]
pub fn select_precision(d: &SignedDuration) -> PrecisionPolicy {
    if d.years > 0 || d.months > 0 || d.days > 7 {
        PrecisionPolicy::CALENDAR
    } else if d.days > 2 {
        PrecisionPolicy::DAYS_HOURS
    } else if d.days > 0 {
        PrecisionPolicy::DAYS_MINUTES
    } else {
        PrecisionPolicy::CLOCK
    }
}
