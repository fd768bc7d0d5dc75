//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::io;

use chrono::{NaiveDate, NaiveDateTime};

use dayspan_driver::{SlotKey, SlotSink};

/// Local wall-clock instant.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

pub fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0, 0)
}

/// Records every slot write as `slot = "content"`, in write order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub lines: Vec<String>,
}

impl RecordingSink {
    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

impl SlotSink for RecordingSink {
    fn write(&mut self, slot: &SlotKey, content: &str) -> io::Result<()> {
        self.lines.push(format!("{slot} = {content:?}"));
        Ok(())
    }
}
