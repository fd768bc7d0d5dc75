//! Text for each card slot, derived from one engine rendering.

use dayspan_types::{Rendering, Sign, TargetSpec};

use crate::slots::SlotKind;

const AGO_MARKER: &str = "ago";

/// The two card layouts on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Header plus one auto-precision line.
    Small,
    /// Header plus calendar and clock lines; always shows both.
    Featured,
}

/// Slot contents for one card at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub header: String,
    pub text: String,
    pub text2: Option<String>,
    pub subtext: &'static str,
}

impl CardText {
    #[must_use]
    pub fn compose(kind: CardKind, spec: &TargetSpec, rendering: &Rendering) -> Self {
        let subtext = if rendering.sign.is_past() {
            AGO_MARKER
        } else {
            ""
        };

        match kind {
            CardKind::Small => Self {
                header: spec
                    .label()
                    .map_or_else(|| generated_header(spec, rendering.sign), str::to_string),
                text: rendering.strings.auto_formatted.clone(),
                text2: None,
                subtext,
            },
            CardKind::Featured => Self {
                header: generated_header(spec, rendering.sign),
                text: rendering.strings.calendar_part.clone(),
                text2: Some(rendering.strings.clock_part.clone()),
                subtext,
            },
        }
    }

    /// `(slot, content)` pairs in display order.
    pub fn slots(&self) -> impl Iterator<Item = (SlotKind, &str)> {
        [
            Some((SlotKind::Header, self.header.as_str())),
            Some((SlotKind::Text, self.text.as_str())),
            self.text2.as_deref().map(|text2| (SlotKind::Text2, text2)),
            Some((SlotKind::Subtext, self.subtext)),
        ]
        .into_iter()
        .flatten()
    }
}

/// "Days to 2027-09-23" for future targets (and exactly now), "Days from ..." for past ones.
fn generated_header(spec: &TargetSpec, sign: Sign) -> String {
    let direction = if sign.is_past() { "from" } else { "to" };
    format!("Days {direction} {}", spec.source())
}
