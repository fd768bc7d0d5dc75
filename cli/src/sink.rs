use std::io::{self, Write};

use dayspan_driver::{SlotKey, SlotSink};

/// Writes each slot change as one `<slot>: <content>` line.
pub(crate) struct LineSink<W> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SlotSink for LineSink<W> {
    fn write(&mut self, slot: &SlotKey, content: &str) -> io::Result<()> {
        if content.is_empty() {
            writeln!(self.out, "{slot}:")?;
        } else {
            writeln!(self.out, "{slot}: {content}")?;
        }
        self.out.flush()
    }
}
