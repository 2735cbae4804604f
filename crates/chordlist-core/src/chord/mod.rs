//! Key-chord capture
//!
//! Converts raw key-down events into canonical chord strings such as
//! `⌘ + ⇧ + C`. Encoding is a pure function of the event: the modifier
//! tokens always appear in the order command, shift, option, control,
//! regardless of the order the keys were pressed in.

mod capture;
pub mod keycodes;

use bitflags::bitflags;

pub use capture::ChordCapture;

/// Separator placed between chord tokens.
pub const TOKEN_SEPARATOR: &str = " + ";

bitflags! {
    /// Modifier keys held during a key-down event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const COMMAND = 0b0001; // cmd/super
        const SHIFT   = 0b0010;
        const OPTION  = 0b0100; // alt
        const CONTROL = 0b1000;
    }
}

/// Canonical token order.
const MODIFIER_SYMBOLS: [(Modifiers, &str); 4] = [
    (Modifiers::COMMAND, "⌘"),
    (Modifiers::SHIFT, "⇧"),
    (Modifiers::OPTION, "⌥"),
    (Modifiers::CONTROL, "⌃"),
];

impl Modifiers {
    /// Symbols for the held modifiers, in canonical order
    pub fn symbols(self) -> impl Iterator<Item = &'static str> {
        MODIFIER_SYMBOLS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, symbol)| symbol)
    }

    /// Parse a modifier name such as `cmd`, `shift`, `alt`, or `ctrl`.
    #[must_use]
    pub fn parse_alias(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cmd" | "command" | "super" | "meta" => Some(Self::COMMAND),
            "shift" => Some(Self::SHIFT),
            "opt" | "option" | "alt" => Some(Self::OPTION),
            "ctrl" | "control" => Some(Self::CONTROL),
            _ => None,
        }
    }
}

/// A full key-down event as delivered by the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawKeyEvent {
    pub modifiers: Modifiers,
    pub key_code: u16,
    /// Text produced by the key with modifiers ignored
    pub characters: Option<String>,
}

impl RawKeyEvent {
    #[must_use]
    pub fn new(modifiers: Modifiers, key_code: u16, characters: Option<&str>) -> Self {
        Self {
            modifiers,
            key_code,
            characters: characters.map(str::to_string),
        }
    }

    #[must_use]
    pub fn kind(&self) -> KeyKind {
        KeyKind::classify(self.key_code)
    }
}

/// Category of a key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Tab,
    /// Function key with its number (1-20)
    Function(u8),
    Numpad,
    Printable,
}

impl KeyKind {
    #[must_use]
    pub fn classify(key_code: u16) -> Self {
        if key_code == keycodes::TAB {
            Self::Tab
        } else if let Some(number) = keycodes::function_key_number(key_code) {
            Self::Function(number)
        } else if keycodes::is_numpad(key_code) {
            Self::Numpad
        } else {
            Self::Printable
        }
    }
}

/// What a key-down event means to the capture field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordOutcome {
    /// Canonical chord text
    Chord(String),
    /// Tab: move focus to the next control
    AdvanceFocus,
    /// Control+N: move the suggestion selection down
    SelectNext,
    /// Control+P: move the suggestion selection up
    SelectPrevious,
    /// Nothing recognizable; keep the previous chord text
    NoChord,
}

/// Encode a key-down event into a chord.
#[must_use]
pub fn encode(event: &RawKeyEvent) -> ChordOutcome {
    let kind = event.kind();
    if kind == KeyKind::Tab {
        return ChordOutcome::AdvanceFocus;
    }

    let characters = event.characters.as_deref().unwrap_or_default();
    if event.modifiers.contains(Modifiers::CONTROL) {
        match characters {
            "n" => return ChordOutcome::SelectNext,
            "p" => return ChordOutcome::SelectPrevious,
            _ => {}
        }
    }

    let mut tokens: Vec<String> = event.modifiers.symbols().map(str::to_string).collect();

    match kind {
        KeyKind::Function(number) => tokens.push(format!("F{number}")),
        KeyKind::Numpad if !characters.is_empty() => {
            tokens.push(format!("Num{}", characters.to_uppercase()));
        }
        KeyKind::Printable if !characters.is_empty() => tokens.push(characters.to_uppercase()),
        _ => {}
    }

    if tokens.is_empty() {
        ChordOutcome::NoChord
    } else {
        ChordOutcome::Chord(tokens.join(TOKEN_SEPARATOR))
    }
}
