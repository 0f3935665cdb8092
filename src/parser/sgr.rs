//! Select Graphic Rendition interpreter
//!
//! Turns the parameter list of a `CSI ... m` sequence into style changes.
//! ECMA-48 separates parameters with semicolons and reserves colons for
//! sub-parameters, but real applications emit both forms interchangeably
//! (`38;5;196` as well as `38:5:196`), so both separators are accepted.
//! When a colon is used anywhere, the whole parameter string is taken as a
//! single instruction with sub-arguments and processing stops after it.

use crate::color::{BasicColor, Color};
use crate::style::{StyleChange, TextStyle, Underline, Weight};

/// Interpret one SGR parameter string, mutating `style` along the way.
///
/// Returns the applied changes in parameter order. Unknown codes and
/// malformed extended-color arguments are dropped without failing the
/// rest of the list.
pub(crate) fn apply(params: &str, style: &mut TextStyle) -> Vec<StyleChange> {
    let colon_form = params.contains(':');
    let tokens: Vec<&str> = params.split(|c| c == ';' || c == ':').collect();
    let mut changes = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        if let Some(code) = parse_code(tokens[i]) {
            let change = match code {
                0 => Some(StyleChange::Reset),
                1 => Some(StyleChange::Weight(Weight::Bold)),
                2 => Some(StyleChange::Weight(Weight::Faint)),
                3 => Some(StyleChange::Italic(true)),
                4 => Some(StyleChange::Underline(Underline::Single)),
                8 => Some(StyleChange::Concealed(true)),
                9 => Some(StyleChange::Strikethrough(true)),
                21 => Some(StyleChange::Underline(Underline::Double)),
                22 => Some(StyleChange::Weight(Weight::Normal)),
                23 => Some(StyleChange::Italic(false)),
                24 => Some(StyleChange::Underline(Underline::None)),
                28 => Some(StyleChange::Concealed(false)),
                29 => Some(StyleChange::Strikethrough(false)),
                30..=37 => foreground(code - 30, false),
                38 => extended_color(&tokens, &mut i, colon_form).map(StyleChange::Foreground),
                39 => Some(StyleChange::Foreground(None)),
                40..=47 => background(code - 40, false),
                48 => extended_color(&tokens, &mut i, colon_form).map(StyleChange::Background),
                49 => Some(StyleChange::Background(None)),
                90..=97 => foreground(code - 90, true),
                100..=107 => background(code - 100, true),
                other => {
                    tracing::trace!("ignoring SGR parameter {}", other);
                    None
                }
            };

            if let Some(change) = change {
                style.apply(change);
                changes.push(change);
            }
        }

        i += 1;

        // a colon marks the parameter string as one instruction with
        // sub-arguments, so nothing after the first group is an
        // independent SGR code
        if colon_form {
            break;
        }
    }

    changes
}

/// Numeric value of one parameter token; an empty token is the implied 0
fn parse_code(token: &str) -> Option<u32> {
    if token.is_empty() {
        Some(0)
    } else {
        token.parse().ok()
    }
}

fn foreground(index: u32, bright: bool) -> Option<StyleChange> {
    let name = BasicColor::from_index(index as u8)?;
    Some(StyleChange::Foreground(Some(Color::Basic { name, bright })))
}

fn background(index: u32, bright: bool) -> Option<StyleChange> {
    let name = BasicColor::from_index(index as u8)?;
    Some(StyleChange::Background(Some(Color::Basic { name, bright })))
}

/// Parse the arguments following an SGR 38 or 48.
///
/// `None` means the attempt was malformed and is dropped; `Some(None)` is
/// an explicit reset to the default color; `Some(Some(_))` selects a
/// color. `i` is left on the last consumed token so already-consumed
/// arguments are never reinterpreted as SGR codes.
fn extended_color(tokens: &[&str], i: &mut usize, colon_form: bool) -> Option<Option<Color>> {
    let mode = take_int(tokens, i)?;
    match mode {
        0 => Some(None),
        5 => {
            let index = take_int(tokens, i)?;
            match Color::palette(index) {
                Ok(color) => Some(Some(color)),
                Err(err) => {
                    tracing::debug!("dropping extended color: {}", err);
                    None
                }
            }
        }
        2 => {
            // ISO 8613-6 places a colorspace id before the channels; the
            // widespread xterm form sends the three channels directly.
            // With colon separation the remaining tokens all belong to
            // this instruction, so four or more of them mean the first is
            // a colorspace id.
            let remaining = tokens.len() - *i - 1;
            if colon_form && remaining >= 4 {
                take_int(tokens, i)?;
            }
            let r = take_int(tokens, i)?;
            let g = take_int(tokens, i)?;
            let b = take_int(tokens, i)?;
            match Color::truecolor(r, g, b) {
                Ok(color) => Some(Some(color)),
                Err(err) => {
                    tracing::debug!("dropping extended color: {}", err);
                    None
                }
            }
        }
        other => {
            tracing::debug!("unknown extended color mode {}", other);
            None
        }
    }
}

/// Consume the next token as an integer
fn take_int(tokens: &[&str], i: &mut usize) -> Option<u32> {
    *i += 1;
    tokens.get(*i)?.parse().ok()
}
