use crate::*;

/// Trailing characters skipped over to reach the move letter.
const CLOSERS: [char; 8] = ['.', '!', '?', '\'', '"', '`', '\u{2019}', '\u{201D}'];

/// Reads the move letter off the end of a completion.
///
/// The prompt asks for step-by-step reasoning followed by the bare letter, so
/// the letter is the last character, or the one before a closing
/// punctuation mark or quote. Anything else is rejected rather than guessed.
pub fn extract(text: &str) -> Result<Move, DecisionError> {
    let mut tail = text.trim().chars().rev();
    let last = tail.next().ok_or(DecisionError::Empty)?;
    let token = match CLOSERS.contains(&last) {
        true => tail.next().ok_or(DecisionError::Unrecognized(last))?,
        false => last,
    };
    Move::try_from(token).map_err(DecisionError::Unrecognized)
}
