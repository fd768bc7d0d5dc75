//! The built-in board driven end to end through a recording sink.

use chrono::TimeDelta;
use insta::assert_snapshot;

use dayspan_config::Board;
use dayspan_driver::{Driver, ManualClock, SlotKey, SlotKind};
use dayspan_types::TargetId;

use crate::common::{RecordingSink, at, midnight};

fn builtin_driver(clock: ManualClock) -> Driver<ManualClock, RecordingSink> {
    Driver::new(Board::builtin().unwrap(), clock, RecordingSink::default())
}

fn key(id: &str, kind: SlotKind) -> SlotKey {
    SlotKey::new(TargetId::new(id).unwrap(), kind)
}

#[test]
fn builtin_board_first_frame() {
    let clock = ManualClock::at(midnight(2025, 6, 5));
    let mut driver = builtin_driver(clock);

    let report = driver.tick().unwrap();
    assert_eq!(report.writes, 4 * 3 + 4);

    assert_snapshot!(driver.into_sink().transcript(), @r#"
    gold-header = "Days from 2014-09-06"
    gold-text = "10 years, 8 months, 29 days"
    gold-subtext = "ago"
    bronze-header = "Days from 2015-07-28"
    bronze-text = "9 years, 10 months, 8 days"
    bronze-subtext = "ago"
    arrival-header = "Days since arrival"
    arrival-text = "9 years, 4 months, 21 days"
    arrival-subtext = "ago"
    application-header = "Days since application"
    application-text = "6 months, 9 days"
    application-subtext = "ago"
    deadline-header = "Days to 2027-09-23"
    deadline-text = "2 years, 3 months, 18 days"
    deadline-text2 = "00:00:00"
    deadline-subtext = ""
    "#);
}

#[test]
fn featured_card_carries_the_clock_line() {
    let clock = ManualClock::at(at(2025, 6, 5, 12, 34, 56));
    let mut driver = builtin_driver(clock);
    driver.tick().unwrap();

    let slots = driver.slots();
    assert_eq!(
        slots.get(&key("deadline", SlotKind::Text)),
        Some("2 years, 3 months, 17 days")
    );
    assert_eq!(slots.get(&key("deadline", SlotKind::Text2)), Some("11:25:04"));
    // Small cards stay at day precision even with a clock remainder.
    assert_eq!(
        slots.get(&key("gold", SlotKind::Text)),
        Some("10 years, 8 months, 29 days")
    );
}

#[test]
fn steady_clock_produces_a_quiet_second_frame() {
    let clock = ManualClock::at(midnight(2025, 6, 5));
    let mut driver = builtin_driver(clock.clone());
    driver.tick().unwrap();

    assert_eq!(driver.tick().unwrap().writes, 0);

    clock.advance(TimeDelta::days(1));
    let report = driver.tick().unwrap();
    // Every text slot moves by a day; headers and subtexts hold still.
    assert_eq!(report.writes, 5);
}

#[test]
fn snapshot_lists_every_slot_once() {
    let clock = ManualClock::at(midnight(2025, 6, 5));
    let mut driver = builtin_driver(clock.clone());
    driver.tick().unwrap();
    clock.advance(TimeDelta::hours(3));
    driver.tick().unwrap();

    let snapshot = driver.slots().snapshot();
    assert_eq!(snapshot.len(), 16);
    assert_eq!(driver.slots().len(), 16);
}
