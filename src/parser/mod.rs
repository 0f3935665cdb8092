//! Escape sequence parsing
//!
//! The submodules build on each other: a backtrackable [`Cursor`] over a
//! chunk, the CSI scanner and SGR interpreter on top of it, and the
//! resumable [`Parser`] that turns chunks into [`Event`]s.

mod cursor;
mod escape;
mod event;
mod sgr;
mod stream;

pub use cursor::{Cursor, Exhausted};
pub use event::Event;
pub use stream::Parser;
