//! Hardware key codes recognized by the chord encoder.
//!
//! Values follow the macOS virtual key-code table (`kVK_*`).

/// Tab moves focus instead of producing a chord.
pub const TAB: u16 = 48;

/// F1 through F20, indexed by function-key number minus one.
pub const FUNCTION_KEYS: [u16; 20] = [
    122, 120, 99, 118, 96, 97, 98, 100, 101, 109, 103, 111, 105, 107, 113, 106, 64, 79, 80, 90,
];

/// Numeric keypad keys outside the contiguous `82..=92` digit block.
const NUMPAD_EXTRA: [u16; 7] = [65, 67, 69, 75, 76, 78, 81];

/// Function-key number (1-20) for a key code.
#[must_use]
pub fn function_key_number(key_code: u16) -> Option<u8> {
    FUNCTION_KEYS
        .iter()
        .position(|&code| code == key_code)
        .and_then(|index| u8::try_from(index + 1).ok())
}

/// Whether the key code belongs to the numeric keypad.
///
/// F20 (90) sits inside the keypad block and counts as a function key.
#[must_use]
pub fn is_numpad(key_code: u16) -> bool {
    ((82..=92).contains(&key_code) || NUMPAD_EXTRA.contains(&key_code))
        && function_key_number(key_code).is_none()
}
