//! Resumable ANSI escape sequence stream parser
//!
//! Splits decoded terminal output into text, bell and style change
//! events while tracking the cumulative SGR text style. Input arrives in
//! chunks of arbitrary sizes, as read from a pty; escape sequences cut
//! off by a chunk boundary resume on the next call.
//!
//! - `color`: the 16 color, 256 color and truecolor model
//! - `style`: text attributes and the changes that update them
//! - `parser`: cursor, CSI scanner, SGR interpreter and stream parser

pub mod color;
pub mod parser;
pub mod style;
