//! Stream parser and style tracker
//!
//! The top-level entry point. Feed it decoded chunks of pty output in
//! any sizes; escape sequences split by a read boundary are carried over
//! to the next call, and the cumulative text style survives across calls
//! for the lifetime of the parser.

use super::cursor::{Cursor, Exhausted};
use super::escape::{self, EscapeError};
use super::event::Event;
use crate::style::TextStyle;

const BEL: char = '\x07';
const ESC: char = '\x1b';

/// Resumable parser for decoded pty output.
///
/// The caller is expected to run incremental decoding on the raw byte
/// stream first: chunk boundaries may fall anywhere, including inside an
/// escape sequence, but never inside a single character.
#[derive(Debug, Default)]
pub struct Parser {
    /// Unparsed tail of the previous call, starting at its ESC
    leftover: String,
    /// Buffer the events of the current call borrow from
    scratch: String,
    style: TextStyle,
}

impl Parser {
    /// Create a parser with no pending input and default style
    pub fn new() -> Self {
        Self::default()
    }

    /// The cumulative text style after everything parsed so far
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Whether a partial escape sequence is waiting for more input
    pub fn has_leftover(&self) -> bool {
        !self.leftover.is_empty()
    }

    /// Parse one chunk and return the events it produced, in input order.
    ///
    /// `Text` payloads borrow the parser, so the returned events must be
    /// consumed before the next call. A chunk ending in the middle of an
    /// escape sequence produces no event for the partial sequence; its
    /// characters are replayed in front of the next chunk.
    pub fn parse(&mut self, chunk: &str) -> Vec<Event<'_>> {
        self.scratch.clear();
        self.scratch.push_str(&self.leftover);
        self.scratch.push_str(chunk);
        self.leftover.clear();

        let buf = self.scratch.as_str();
        let style = &mut self.style;
        let leftover = &mut self.leftover;

        let mut cursor = Cursor::new(buf);
        let mut events = Vec::new();
        // start of the text run to be flushed next
        let mut start = 0;
        // set after an invalid escape so the ESC is read once as plain text
        let mut ignore_esc = false;

        loop {
            let at = cursor.offset();
            let code = match cursor.next_char() {
                Ok(code) => code,
                Err(Exhausted) => break,
            };

            match code {
                BEL => {
                    if at > start {
                        events.push(Event::Text(&buf[start..at]));
                    }
                    events.push(Event::Bell);
                    start = cursor.offset();
                }
                ESC if !ignore_esc => {
                    cursor.waypoint();
                    match escape::scan(&mut cursor, style) {
                        Ok(changes) => {
                            cursor.commit();
                            if at > start {
                                events.push(Event::Text(&buf[start..at]));
                            }
                            events.extend(changes.into_iter().map(Event::Style));
                            start = cursor.offset();
                        }
                        Err(EscapeError::Incomplete) => {
                            if at > start {
                                events.push(Event::Text(&buf[start..at]));
                            }
                            leftover.push_str(&buf[at..]);
                            return events;
                        }
                        Err(EscapeError::Invalid) => {
                            // give the characters back and show the ESC
                            // itself as text; on the next round it is an
                            // ordinary character
                            tracing::debug!("no control sequence after ESC at byte {}", at);
                            cursor.backtrack();
                            ignore_esc = true;
                        }
                    }
                }
                _ => ignore_esc = false,
            }
        }

        if buf.len() > start {
            events.push(Event::Text(&buf[start..]));
        }

        events
    }
}
