use std::io;

use chrono::NaiveDateTime;
use thiserror::Error;

use dayspan_config::Board;
use dayspan_types::TargetSpec;

use crate::card::{CardKind, CardText};
use crate::clock::{Clock, ClockError};
use crate::slots::{SlotKey, SlotSink, SlotStore};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Clock(#[from] ClockError),
    #[error("failed to write slot: {0}")]
    Sink(#[from] io::Error),
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub now: NaiveDateTime,
    /// Slots whose content actually changed.
    pub writes: usize,
}

/// Samples the clock, runs the engine for every card, and pushes changed text
/// into the slot store.
///
/// Owns its board; there is no shared card registry.
#[derive(Debug)]
pub struct Driver<C, S> {
    board: Board,
    clock: C,
    slots: SlotStore<S>,
}

impl<C: Clock, S: SlotSink> Driver<C, S> {
    #[must_use]
    pub fn new(board: Board, clock: C, sink: S) -> Self {
        Self {
            board,
            clock,
            slots: SlotStore::new(sink),
        }
    }

    pub fn tick(&mut self) -> Result<TickReport, DriverError> {
        let now = self.clock.now()?;
        let mut writes = 0;

        for spec in self.board.cards() {
            writes += write_card(&mut self.slots, CardKind::Small, spec, now)?;
        }
        if let Some(spec) = self.board.featured() {
            writes += write_card(&mut self.slots, CardKind::Featured, spec, now)?;
        }

        Ok(TickReport { now, writes })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn slots(&self) -> &SlotStore<S> {
        &self.slots
    }

    pub fn into_sink(self) -> S {
        self.slots.into_sink()
    }
}

fn write_card<S: SlotSink>(
    slots: &mut SlotStore<S>,
    kind: CardKind,
    spec: &TargetSpec,
    now: NaiveDateTime,
) -> io::Result<usize> {
    let rendering = dayspan_core::render(spec.target(), now);
    let card = CardText::compose(kind, spec, &rendering);

    let mut writes = 0;
    for (slot, content) in card.slots() {
        if slots.update(SlotKey::new(spec.id().clone(), slot), content)? {
            writes += 1;
        }
    }
    Ok(writes)
}
