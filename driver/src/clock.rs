//! Boundary: where the observation instant comes from.
//!
//! All wall-clock access lives here. The engine only ever sees the
//! `NaiveDateTime` a [`Clock`] hands out.

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDateTime, TimeDelta};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("clock unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Source of "now" as a local civil date-time.
pub trait Clock {
    fn now(&self) -> Result<NaiveDateTime, ClockError>;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        (**self).now()
    }
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        Ok(Local::now().naive_local())
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and advance
/// time while the driver owns another. An unset clock reports
/// [`ClockError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Option<NaiveDateTime>>>,
}

impl ManualClock {
    #[must_use]
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(Some(now))),
        }
    }

    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn set(&self, now: NaiveDateTime) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = Some(now);
        }
    }

    /// No-op while unset.
    pub fn advance(&self, by: TimeDelta) {
        if let Ok(mut guard) = self.now.lock()
            && let Some(now) = guard.as_mut()
        {
            *now += by;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        let now = *self.now.lock().map_err(|_| ClockError::Unavailable {
            reason: "manual clock lock poisoned".to_string(),
        })?;
        now.ok_or_else(|| ClockError::Unavailable {
            reason: "manual clock not set".to_string(),
        })
    }
}
