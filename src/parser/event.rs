//! Events produced by the stream parser

use serde::Serialize;

use crate::style::StyleChange;

/// One parsed unit of terminal output.
///
/// `Text` borrows the parser's internal buffer, so the events of one
/// [`parse`](super::Parser::parse) call have to be consumed before the
/// next call; the borrow checker enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Event<'a> {
    /// A run of ordinary text, to be shown with the currently active style
    Text(&'a str),
    /// The BEL control character
    Bell,
    /// One style attribute changed
    Style(StyleChange),
}

impl<'a> Event<'a> {
    /// The text payload, if this is a text event
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Event::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this is a text event
    pub fn is_text(&self) -> bool {
        matches!(self, Event::Text(_))
    }
}
