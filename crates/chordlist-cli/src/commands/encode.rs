use chordlist_core::{encode, ChordOutcome, Modifiers, RawKeyEvent};

use crate::error::CliError;

pub fn run_encode(
    modifiers: &[Modifiers],
    key_code: u16,
    characters: Option<&str>,
) -> Result<(), CliError> {
    let held = modifiers
        .iter()
        .fold(Modifiers::empty(), |held, modifier| held | *modifier);
    let outcome = encode(&RawKeyEvent::new(held, key_code, characters));

    println!("{}", describe_outcome(outcome)?);
    Ok(())
}

/// Human-readable line for an encoder outcome.
pub fn describe_outcome(outcome: ChordOutcome) -> Result<String, CliError> {
    match outcome {
        ChordOutcome::Chord(text) => Ok(text),
        ChordOutcome::AdvanceFocus => Ok("(tab: advance focus)".to_string()),
        ChordOutcome::SelectNext => Ok("(select next suggestion)".to_string()),
        ChordOutcome::SelectPrevious => Ok("(select previous suggestion)".to_string()),
        ChordOutcome::NoChord => Err(CliError::NoChord),
    }
}
