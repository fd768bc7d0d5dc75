//! Presentation driver for dayspan.
//!
//! Bridges a [`Board`](dayspan_config::Board) and the pure engine in
//! [`dayspan_core`]: on every tick it samples a [`Clock`], renders each card,
//! and forwards changed text to a [`SlotSink`].
//!
//! ```text
//! RefreshHandle (tokio interval) -> Driver::tick()
//!                                       |
//!                  Clock::now() --------+
//!                                       v
//!                 dayspan_core::render(target, now)
//!                                       |
//!                                       v
//!                 CardText -> SlotStore (skip unchanged) -> SlotSink
//! ```

mod card;
mod clock;
mod driver;
mod refresh;
mod slots;

pub use card::{CardKind, CardText};
pub use clock::{Clock, ClockError, ManualClock, SystemClock};
pub use driver::{Driver, DriverError, TickReport};
pub use refresh::{RefreshError, RefreshHandle, StopToken, TickStats};
pub use slots::{SlotKey, SlotKind, SlotSink, SlotStore};
