//! The repeating refresh task.
//!
//! ```text
//! RefreshHandle::spawn(driver, interval)
//!        |
//!        v
//!   interval tick -> stop requested? -> driver.tick() -> stats
//!        ^                                     |
//!        +-------------------------------------+
//! ```
//!
//! Cancellation is checked at tick boundaries only. A tick is synchronous and
//! short, so nothing needs to be unwound mid-iteration.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;

use crate::clock::Clock;
use crate::driver::{Driver, DriverError};
use crate::slots::SlotSink;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Counters accumulated over the life of a refresh task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Ticks that reached the engine.
    pub ticks: u64,
    /// Slot writes across all ticks.
    pub writes: u64,
    /// Ticks dropped because the clock was unavailable.
    pub skipped: u64,
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Driver(#[from] DriverError),
    #[error("refresh task panicked or was aborted: {0}")]
    Join(#[from] JoinError),
    #[error("refresh task did not stop within {0:?}")]
    Timeout(Duration),
}

/// Cloneable stop request for a running refresh task.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Owns a spawned refresh loop.
///
/// Dropping the handle requests a stop but does not wait for it.
pub struct RefreshHandle {
    stop: StopToken,
    join: Option<JoinHandle<Result<TickStats, DriverError>>>,
}

impl RefreshHandle {
    /// Spawns the loop on the current tokio runtime. The first tick fires
    /// immediately.
    pub fn spawn<C, S>(driver: Driver<C, S>, interval: Duration) -> Self
    where
        C: Clock + Send + 'static,
        S: SlotSink + Send + 'static,
    {
        let stop = StopToken::default();
        let join = tokio::spawn(refresh_loop(driver, interval, stop.clone()));
        Self {
            stop,
            join: Some(join),
        }
    }

    #[must_use]
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn cancel(&self) {
        self.stop.cancel();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Waits for the loop to end on its own (cancellation or a sink failure).
    pub async fn join(mut self) -> Result<TickStats, RefreshError> {
        match self.join.take() {
            Some(join) => Ok(join.await??),
            None => Ok(TickStats::default()),
        }
    }

    /// Requests a stop and waits a bounded time for the loop to exit.
    pub async fn shutdown(mut self) -> Result<TickStats, RefreshError> {
        self.stop.cancel();
        let Some(mut join) = self.join.take() else {
            return Ok(TickStats::default());
        };

        match tokio::time::timeout(SHUTDOWN_TIMEOUT, &mut join).await {
            Ok(result) => Ok(result??),
            Err(_) => {
                join.abort();
                Err(RefreshError::Timeout(SHUTDOWN_TIMEOUT))
            }
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.stop.cancel();
    }
}

async fn refresh_loop<C: Clock, S: SlotSink>(
    mut driver: Driver<C, S>,
    interval: Duration,
    stop: StopToken,
) -> Result<TickStats, DriverError> {
    let mut frames = tokio::time::interval(interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut stats = TickStats::default();
    let mut clock_down = false;

    tracing::debug!(?interval, cards = driver.board().len(), "Refresh loop started");

    loop {
        frames.tick().await;
        if stop.is_cancelled() {
            break;
        }

        match driver.tick() {
            Ok(report) => {
                if clock_down {
                    tracing::info!("Clock available again");
                    clock_down = false;
                }
                stats.ticks += 1;
                stats.writes += report.writes as u64;
                if report.writes > 0 {
                    tracing::trace!(now = %report.now, writes = report.writes, "Slots updated");
                }
            }
            Err(DriverError::Clock(err)) => {
                stats.skipped += 1;
                if clock_down {
                    tracing::debug!(%err, "Skipping refresh tick");
                } else {
                    tracing::warn!(%err, "Clock unavailable, skipping refresh ticks");
                    clock_down = true;
                }
            }
            Err(err) => {
                tracing::error!(%err, "Refresh loop stopped");
                return Err(err);
            }
        }
    }

    tracing::debug!(
        ticks = stats.ticks,
        writes = stats.writes,
        skipped = stats.skipped,
        "Refresh loop stopped"
    );
    Ok(stats)
}
