//! Escape sequence scanner
//!
//! Frames control sequences following the ECMA-48 grammar
//! `CSI parameter-bytes intermediate-bytes final-byte` and dispatches the
//! one function this crate handles, SGR (`m`). Everything else that still
//! parses as a control sequence is consumed and discarded so it never
//! shows up as text.

use super::cursor::{Cursor, Exhausted};
use super::sgr;
use crate::style::{StyleChange, TextStyle};

/// Parameter byte of a control sequence (ECMA-48 5.4)
pub(crate) fn is_parameter_byte(c: char) -> bool {
    matches!(c, '\x30'..='\x3f')
}

/// Intermediate byte of a control sequence (ECMA-48 5.4)
pub(crate) fn is_intermediate_byte(c: char) -> bool {
    matches!(c, '\x20'..='\x2f')
}

/// Final byte of a control sequence (ECMA-48 5.4)
pub(crate) fn is_final_byte(c: char) -> bool {
    matches!(c, '\x40'..='\x7e')
}

/// Why an escape sequence could not be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum EscapeError {
    /// The chunk ended in the middle of the sequence; scanning can resume
    /// once more input arrives
    #[error("escape sequence cut off by chunk boundary")]
    Incomplete,
    /// The characters after ESC do not form a control sequence
    #[error("malformed escape sequence")]
    Invalid,
}

impl From<Exhausted> for EscapeError {
    fn from(_: Exhausted) -> Self {
        EscapeError::Incomplete
    }
}

/// Scan one control sequence, starting right after its ESC.
///
/// On success the cursor stands on the first character after the
/// sequence and the SGR changes (empty for any other function) are
/// returned. On failure the cursor is left wherever scanning stopped;
/// recovery is the caller's job.
pub(crate) fn scan(
    cursor: &mut Cursor<'_>,
    style: &mut TextStyle,
) -> Result<Vec<StyleChange>, EscapeError> {
    // only CSI sequences are recognized; other escape families (OSC,
    // DCS, ...) fail here and fall back to being shown as text
    if cursor.next_char()? != '[' {
        return Err(EscapeError::Invalid);
    }

    let params = cursor.take_while_greedy(is_parameter_byte)?;
    cursor.take_while_greedy(is_intermediate_byte)?;

    let fin = cursor.next_char()?;
    if !is_final_byte(fin) {
        return Err(EscapeError::Invalid);
    }

    if fin == 'm' {
        Ok(sgr::apply(params, style))
    } else {
        tracing::debug!("discarding unsupported CSI sequence {:?} {:?}", params, fin);
        Ok(Vec::new())
    }
}
