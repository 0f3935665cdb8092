//! Color model
//!
//! The three color schemes an SGR sequence can select (the classic 16
//! color palette, the xterm 256 color palette and 24-bit direct color)
//! and their resolution to normalized RGB values.

use serde::{Deserialize, Serialize};

/// The eight base colors of the classic palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

const BASE_COLORS: [BasicColor; 8] = [
    BasicColor::Black,
    BasicColor::Red,
    BasicColor::Green,
    BasicColor::Yellow,
    BasicColor::Blue,
    BasicColor::Magenta,
    BasicColor::Cyan,
    BasicColor::White,
];

// X11 color values matching xterm's defaults for the classic palette:
// red3, green3, yellow3, blue2, magenta3, cyan3 and gray90 for the
// regular set, gray50 and the named full-intensity colors (plus
// CornflowerBlue) for the bright set.
const REGULAR_RGB: [(u8, u8, u8); 8] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
];

const BRIGHT_RGB: [(u8, u8, u8); 8] = [
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (100, 149, 237),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

impl BasicColor {
    /// Map a palette index 0-7 to its base color
    pub fn from_index(index: u8) -> Option<Self> {
        BASE_COLORS.get(usize::from(index)).copied()
    }
}

/// Errors constructing a [`Color`] from unvalidated integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("palette index {0} out of range (0-255)")]
    PaletteIndex(u32),
    #[error("channel value {0} out of range (0-255)")]
    Channel(u32),
}

/// A color as selected by an SGR sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// One of the 16 classic palette entries (SGR 30-37, 40-47, 90-97,
    /// 100-107)
    Basic { name: BasicColor, bright: bool },
    /// An entry of the 256 color palette (SGR 38/48 with mode 5)
    Palette256(u8),
    /// A 24-bit direct color (SGR 38/48 with mode 2)
    TrueColor(u8, u8, u8),
}

impl Color {
    /// Select a 256 color palette entry, validating the index
    pub fn palette(index: u32) -> Result<Self, ColorError> {
        match u8::try_from(index) {
            Ok(index) => Ok(Color::Palette256(index)),
            Err(_) => Err(ColorError::PaletteIndex(index)),
        }
    }

    /// Select a direct color, validating each channel
    pub fn truecolor(r: u32, g: u32, b: u32) -> Result<Self, ColorError> {
        let channel = |value: u32| u8::try_from(value).map_err(|_| ColorError::Channel(value));
        Ok(Color::TrueColor(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Resolve this color to its normalized RGB value
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::Basic { name, bright } => basic_rgb(name, bright),
            Color::Palette256(index) => palette_rgb(index),
            Color::TrueColor(r, g, b) => Rgb::from_bytes(r, g, b),
        }
    }
}

/// Normalized RGB triple with each channel in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// The three channels as a tuple
    pub fn channels(self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }
}

fn basic_rgb(name: BasicColor, bright: bool) -> Rgb {
    let (r, g, b) = if bright {
        BRIGHT_RGB[name as usize]
    } else {
        REGULAR_RGB[name as usize]
    };
    Rgb::from_bytes(r, g, b)
}

fn palette_rgb(index: u8) -> Rgb {
    match index {
        0..=7 => basic_rgb(BASE_COLORS[usize::from(index)], false),
        8..=15 => basic_rgb(BASE_COLORS[usize::from(index - 8)], true),
        16..=231 => {
            // 6x6x6 color cube: n = 16 + 36r + 6g + b with r, g, b in
            // 0..=5. The channel values are reverse engineered from
            // xterm's 256colres.pl; they are not documented anywhere.
            let t = index - 16;
            let r = t / 36;
            let g = (t % 36) / 6;
            let b = t % 6;
            Rgb::new(cube_channel(r), cube_channel(g), cube_channel(b))
        }
        _ => {
            // grayscale ramp in 24 steps
            let c = f64::from(index - 232) / 24.0;
            Rgb::new(c, c, c)
        }
    }
}

/// Channel value for one axis of the color cube
fn cube_channel(axis: u8) -> f64 {
    if axis == 0 {
        0.0
    } else {
        (f64::from(axis) * 40.0 + 55.0) / 255.0
    }
}
