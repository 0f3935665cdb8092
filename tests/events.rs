//! End to end tests for the stream parser
//!
//! These tests feed decoded terminal output to a parser, chunked the way
//! a pty read loop would deliver it, and check the resulting event
//! stream and cumulative style.

use termstream::color::{BasicColor, Color};
use termstream::parser::{Event, Parser};
use termstream::style::{StyleChange, Underline, Weight};

/// Owned copy of an event, so results can be collected across calls
#[derive(Debug, Clone, PartialEq)]
enum Ev {
    Text(String),
    Bell,
    Style(StyleChange),
}

impl From<Event<'_>> for Ev {
    fn from(event: Event<'_>) -> Self {
        match event {
            Event::Text(text) => Ev::Text(text.to_owned()),
            Event::Bell => Ev::Bell,
            Event::Style(change) => Ev::Style(change),
        }
    }
}

/// Feed all chunks to a fresh parser and collect the events
fn events_of(chunks: &[&str]) -> Vec<Ev> {
    let mut parser = Parser::new();
    let mut events = Vec::new();
    for chunk in chunks {
        events.extend(parser.parse(chunk).into_iter().map(Ev::from));
    }
    events
}

fn text(s: &str) -> Ev {
    Ev::Text(s.to_owned())
}

fn fg(color: Color) -> Ev {
    Ev::Style(StyleChange::Foreground(Some(color)))
}

fn basic(name: BasicColor) -> Color {
    Color::Basic {
        name,
        bright: false,
    }
}

#[test]
fn test_plain_text() {
    assert_eq!(events_of(&["hello"]), vec![text("hello")]);
}

#[test]
fn test_bell_between_text() {
    assert_eq!(
        events_of(&["a\x07b"]),
        vec![text("a"), Ev::Bell, text("b")]
    );
}

#[test]
fn test_bold_red_prefix() {
    assert_eq!(
        events_of(&["\x1b[1;31mhello"]),
        vec![
            Ev::Style(StyleChange::Weight(Weight::Bold)),
            fg(basic(BasicColor::Red)),
            text("hello"),
        ]
    );
}

#[test]
fn test_palette_color() {
    assert_eq!(
        events_of(&["\x1b[38;5;196mX"]),
        vec![fg(Color::Palette256(196)), text("X")]
    );
}

#[test]
fn test_sequence_split_across_reads() {
    assert_eq!(
        events_of(&["\x1b[1", "m"]),
        vec![Ev::Style(StyleChange::Weight(Weight::Bold))]
    );
}

#[test]
fn test_clear_screen_produces_nothing() {
    assert_eq!(events_of(&["\x1b[2J"]), vec![]);
}

#[test]
fn test_single_character_chunks() {
    let input = "\x1b[38;5;196mhi";
    let chunks: Vec<String> = input.chars().map(String::from).collect();
    let refs: Vec<&str> = chunks.iter().map(String::as_str).collect();

    assert_eq!(
        events_of(&refs),
        vec![fg(Color::Palette256(196)), text("h"), text("i")]
    );
}

#[test]
fn test_colon_separated_underline_style() {
    // a colon separated SGR is one instruction with sub arguments
    assert_eq!(
        events_of(&["\x1b[4:3mx"]),
        vec![Ev::Style(StyleChange::Underline(Underline::Single)), text("x")]
    );
    assert_eq!(
        events_of(&["\x1b[38:2:12:34:56mx"]),
        vec![fg(Color::TrueColor(12, 34, 56)), text("x")]
    );
}

#[test]
fn test_invalid_escape_passes_through_as_text() {
    assert_eq!(events_of(&["a\x1bZb"]), vec![text("a\x1bZb")]);
}

#[test]
fn test_ls_color_listing() {
    // typical `ls --color` output for one directory and one file
    assert_eq!(
        events_of(&["\x1b[0m\x1b[01;34msrc\x1b[0m  README.md\n"]),
        vec![
            Ev::Style(StyleChange::Reset),
            Ev::Style(StyleChange::Weight(Weight::Bold)),
            fg(basic(BasicColor::Blue)),
            text("src"),
            Ev::Style(StyleChange::Reset),
            text("  README.md\n"),
        ]
    );
}

#[test]
fn test_grep_match_highlight() {
    // grep brackets matches with SGR and erase-in-line; the erase is not
    // a style sequence and is dropped
    assert_eq!(
        events_of(&["\x1b[01;31m\x1b[Kmatch\x1b[m\x1b[K"]),
        vec![
            Ev::Style(StyleChange::Weight(Weight::Bold)),
            fg(basic(BasicColor::Red)),
            text("match"),
            Ev::Style(StyleChange::Reset),
        ]
    );
}

#[test]
fn test_truecolor_then_default() {
    assert_eq!(
        events_of(&["\x1b[38;2;255;128;0mwarn\x1b[39m ok"]),
        vec![
            fg(Color::TrueColor(255, 128, 0)),
            text("warn"),
            Ev::Style(StyleChange::Foreground(None)),
            text(" ok"),
        ]
    );
}

#[test]
fn test_final_style_across_chunks() {
    let mut parser = Parser::new();

    for chunk in ["\x1b[1m", "x\x1b[3", "1my", "\x1b[4m"] {
        parser.parse(chunk);
    }

    let style = parser.style();
    assert_eq!(style.weight, Weight::Bold);
    assert_eq!(style.foreground, Some(basic(BasicColor::Red)));
    assert_eq!(style.underline, Underline::Single);
    assert!(!parser.has_leftover());
}

#[test]
fn test_interrupted_session_keeps_pending_state() {
    let mut parser = Parser::new();

    // a chunk ends right after the introducer
    assert_eq!(parser.parse("prompt$ \x1b["), vec![Event::Text("prompt$ ")]);
    assert!(parser.has_leftover());
    assert!(parser.style().is_default());

    // the rest of the sequence arrives and applies
    assert_eq!(
        parser.parse("32mok"),
        vec![
            Event::Style(StyleChange::Foreground(Some(basic(BasicColor::Green)))),
            Event::Text("ok"),
        ]
    );
    assert!(!parser.has_leftover());
}
