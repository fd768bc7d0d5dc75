//! Duration engine for dayspan.
//!
//! Pure functions only: every call takes a target and an observation instant
//! and returns fresh values. Nothing here knows about clocks, slots or the
//! refresh loop that drives it.
//!
//! ```text
//! compute_duration(target, now) -> SignedDuration
//!         |                               |
//!         v                               v
//! select_precision(d) -> window     format_split(d) -> calendar + clock
//!         |
//!         v
//! format_auto(d, window, now) -> "2 years, 3 months, 18 days"
//! ```

mod calendar;
mod format;
mod precision;

pub use calendar::compute_duration;
pub use format::{SplitParts, format_auto, format_split, round_to_window};
pub use precision::select_precision;

use chrono::NaiveDateTime;

use dayspan_types::{RenderedStrings, Rendering};

/// Compute once, render every string the driver needs for one target.
#[must_use]
pub fn render(target: NaiveDateTime, now: NaiveDateTime) -> Rendering {
    let duration = compute_duration(target, now);
    let policy = select_precision(&duration);
    let SplitParts {
        calendar_part,
        clock_part,
    } = format_split(&duration);

    Rendering {
        sign: duration.sign,
        strings: RenderedStrings {
            auto_formatted: format_auto(&duration, policy, now),
            calendar_part,
            clock_part,
        },
    }
}
