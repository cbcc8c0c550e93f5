use crate::error::InputError;
use crate::link::{InputLine, INPUT_CAPACITY};

/// Canonicalize an operator line so it ends in exactly one `\n`.
///
/// The value stops at the first `\0` or `\n`. End of data counts as the end
/// marker unless the buffer is full, in which case the line has no
/// terminator at all and is rejected.
pub fn normalize(raw: &[u8]) -> Result<InputLine, InputError> {
    let end = match raw.iter().position(|&b| b == 0 || b == b'\n') {
        Some(pos) => pos,
        None if raw.len() < INPUT_CAPACITY => raw.len(),
        None => return Err(InputError::Unterminated),
    };

    let mut line = InputLine::new();
    line.extend_from_slice(&raw[..end])
        .map_err(|_| InputError::Unterminated)?;
    line.push(b'\n').map_err(|_| InputError::Unterminated)?;
    Ok(line)
}

/// Named setters ignore empty lines and lines starting with a space.
pub fn is_rejected(raw: &[u8]) -> bool {
    matches!(raw.first(), None | Some(b' '))
}
