//! Text style state
//!
//! Cumulative presentation state as selected by SGR sequences, and the
//! per-attribute change operations that mutate it. Every attribute is an
//! independent axis; attributes never interact, and only a reset touches
//! more than one of them at a time.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Font weight (SGR 1, 2 and 22)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Faint,
}

/// Underline mode (SGR 4, 21 and 24)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
}

/// Cumulative text presentation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    /// Foreground color; `None` is the terminal default
    pub foreground: Option<Color>,
    /// Background color; `None` is the terminal default
    pub background: Option<Color>,
    pub weight: Weight,
    pub italic: bool,
    pub underline: Underline,
    pub strikethrough: bool,
    pub concealed: bool,
}

impl TextStyle {
    /// Create a style with every attribute at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every attribute to its default (SGR 0)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether every attribute is at its default
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Apply a single change to the matching attribute
    pub fn apply(&mut self, change: StyleChange) {
        match change {
            StyleChange::Reset => self.reset(),
            StyleChange::Foreground(color) => self.foreground = color,
            StyleChange::Background(color) => self.background = color,
            StyleChange::Weight(weight) => self.weight = weight,
            StyleChange::Italic(on) => self.italic = on,
            StyleChange::Underline(underline) => self.underline = underline,
            StyleChange::Strikethrough(on) => self.strikethrough = on,
            StyleChange::Concealed(on) => self.concealed = on,
        }
    }
}

/// A change to a single attribute of the text style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleChange {
    /// Return every attribute to its default (SGR 0)
    Reset,
    /// Select the foreground color; `None` is the terminal default
    Foreground(Option<Color>),
    /// Select the background color; `None` is the terminal default
    Background(Option<Color>),
    Weight(Weight),
    Italic(bool),
    Underline(Underline),
    Strikethrough(bool),
    Concealed(bool),
}
