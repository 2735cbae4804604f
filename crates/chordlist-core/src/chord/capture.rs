use super::{encode, ChordOutcome, RawKeyEvent};

/// State of a chord capture field.
///
/// Each key-down replaces the previous chord; nothing accumulates across
/// events. Events that do not encode to a chord leave the text untouched and
/// are handed back so the caller can move focus or the suggestion selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordCapture {
    text: String,
}

impl ChordCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &RawKeyEvent) -> ChordOutcome {
        let outcome = encode(event);
        if let ChordOutcome::Chord(text) = &outcome {
            self.text.clone_from(text);
        }
        outcome
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
