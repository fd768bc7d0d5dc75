//! Core domain types for dayspan.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod duration;
mod ids;
mod precision;

pub use duration::{Sign, SignedDuration};
pub use ids::{EmptyIdError, TargetId};
pub use precision::{InvalidWindowError, PrecisionPolicy, Unit};

use chrono::NaiveDateTime;

// ============================================================================
// Targets
// ============================================================================

/// One configured card: a civil date-time to count toward or away from.
///
/// Immutable once built. `source` keeps the date text exactly as configured,
/// because headers echo it back to the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    id: TargetId,
    label: Option<String>,
    target: NaiveDateTime,
    source: String,
}

impl TargetSpec {
    #[must_use]
    pub fn new(
        id: TargetId,
        label: Option<String>,
        target: NaiveDateTime,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label: label.filter(|l| !l.trim().is_empty()),
            target,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &TargetId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

// ============================================================================
// Rendered output
// ============================================================================

/// Strings produced for one target at one observation instant.
///
/// Never cached across ticks: the observation instant moves on every call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedStrings {
    /// Auto-precision long form, e.g. "2 years, 3 months, 18 days".
    pub auto_formatted: String,
    /// Years, months and days only. Empty when all three are zero.
    pub calendar_part: String,
    /// Hours, minutes and seconds as `HH:MM:SS`.
    pub clock_part: String,
}

/// Direction plus rendered strings; what the driver consumes per target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub sign: Sign,
    pub strings: RenderedStrings,
}
