//! Named display slots and the write-skipping store in front of them.

use std::collections::HashMap;
use std::fmt;
use std::io;

use dayspan_types::TargetId;

/// Which piece of a card a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotKind {
    /// "Days to <date>", "Days from <date>", or the configured label.
    Header,
    /// Auto-precision text on small cards, the calendar part on the featured card.
    Text,
    /// The clock part on the featured card.
    Text2,
    /// "ago" for past targets, empty otherwise.
    Subtext,
}

impl SlotKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SlotKind::Header => "header",
            SlotKind::Text => "text",
            SlotKind::Text2 => "text2",
            SlotKind::Subtext => "subtext",
        }
    }
}

/// Address of one slot: a card id plus the piece of that card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub id: TargetId,
    pub kind: SlotKind,
}

impl SlotKey {
    #[must_use]
    pub fn new(id: TargetId, kind: SlotKind) -> Self {
        Self { id, kind }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.id, self.kind.as_str())
    }
}

/// Destination for slot contents (a terminal, a test recorder, a template).
pub trait SlotSink {
    fn write(&mut self, slot: &SlotKey, content: &str) -> io::Result<()>;
}

impl<S: SlotSink + ?Sized> SlotSink for Box<S> {
    fn write(&mut self, slot: &SlotKey, content: &str) -> io::Result<()> {
        (**self).write(slot, content)
    }
}

/// Remembers what each slot currently shows and only forwards changes.
#[derive(Debug)]
pub struct SlotStore<S> {
    sink: S,
    current: HashMap<SlotKey, String>,
}

impl<S: SlotSink> SlotStore<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            current: HashMap::new(),
        }
    }

    /// Returns whether the sink was written to.
    pub fn update(&mut self, slot: SlotKey, content: &str) -> io::Result<bool> {
        if self
            .current
            .get(&slot)
            .is_some_and(|existing| existing == content)
        {
            return Ok(false);
        }

        self.sink.write(&slot, content)?;
        self.current.insert(slot, content.to_string());
        Ok(true)
    }

    #[must_use]
    pub fn get(&self, slot: &SlotKey) -> Option<&str> {
        self.current.get(slot).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Every slot with its current content, sorted by key.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(&SlotKey, &str)> {
        let mut entries: Vec<_> = self
            .current
            .iter()
            .map(|(key, value)| (key, value.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
