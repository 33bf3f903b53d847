//! The four-state tag scanner.
//!
//! One left-to-right pass over the input. Plain text is copied in runs up to
//! the next `&`; from there the scanner walks through at most three tag
//! states before returning to [`ScanState::Plain`]:
//!
//! ```text
//! Plain ──&──▶ SawEscape ──#──▶ SawHash ──#──▶ SawDoubleHash
//!                  │               │                │
//!             color letter     6 hex digits     3 hex digits
//!                  ▼               ▼                ▼
//!                 §c        §x§r§r§g§g§b§b   §x§r§r§g§g§b§b
//! ```
//!
//! Any other character in a tag state rejects the attempt: the state's
//! [pending literal](ScanState::pending_literal) is written out and the
//! same character is scanned again as plain text. It is not skipped,
//! because it may start a new tag itself (`&#&c` yields `&#§c`).
//!
//! Reaching EOF in a tag state flushes the pending literal the same way.

use std::borrow::Cow;

use crate::alphabet::{is_color_character, ESCAPE_BYTE, HEX_INTRO, HEX_TAG, MARKER};
use crate::cursor::Cursor;

/// Digits in a full `&#rrggbb` tag.
const SINGLE_TAG_LEN: usize = 6;

/// Digits in a shorthand `&##rgb` tag.
const DOUBLE_TAG_LEN: usize = 3;

/// Scanner state. Exactly one is active at any point of a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Copying text through.
    #[default]
    Plain,
    /// Consumed `&`.
    SawEscape,
    /// Consumed `&#`.
    SawHash,
    /// Consumed `&##`.
    SawDoubleHash,
}

impl ScanState {
    /// Text consumed by this state but not yet written: the literal that is
    /// emitted when the tag attempt is rejected or the input ends.
    pub fn pending_literal(self) -> &'static str {
        match self {
            ScanState::Plain => "",
            ScanState::SawEscape => "&",
            ScanState::SawHash => "&#",
            ScanState::SawDoubleHash => "&##",
        }
    }
}

/// Transcode color markup in `text`.
///
/// Borrows `text` unchanged when it contains no `&` (including the empty
/// string); otherwise returns a freshly built string. Never fails.
///
/// # Examples
///
/// ```
/// use tint_core::colorize;
///
/// assert_eq!(colorize("&cred"), "\u{a7}cred");
/// assert_eq!(colorize("&##abc"), colorize("&#aabbcc"));
/// assert_eq!(colorize("50&"), "50&");
/// ```
pub fn colorize(text: &str) -> Cow<'_, str> {
    if memchr::memchr(ESCAPE_BYTE, text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(Transcoder::new(text).run())
}

/// [`colorize`] for optional input: `None` passes through as `None`.
pub fn colorize_opt(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(colorize)
}

/// Per-call scanner. All mutable state lives here, so concurrent calls
/// never share anything.
struct Transcoder<'a> {
    cursor: Cursor<'a>,
    state: ScanState,
    out: String,
}

impl<'a> Transcoder<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            cursor: Cursor::new(text),
            state: ScanState::Plain,
            // Most input grows only by a few marker bytes.
            out: String::with_capacity(text.len()),
        }
    }

    fn run(mut self) -> String {
        loop {
            match self.state {
                ScanState::Plain => {
                    let run = self.cursor.eat_until_escape();
                    self.out.push_str(run);
                    if self.cursor.is_eof() {
                        break;
                    }
                    // Positioned on `&`.
                    self.cursor.advance();
                    self.state = ScanState::SawEscape;
                }
                ScanState::SawEscape => match self.cursor.current() {
                    None => break,
                    Some(HEX_INTRO) => {
                        self.cursor.advance();
                        self.state = ScanState::SawHash;
                    }
                    Some(c) if is_color_character(c) => {
                        self.out.push(MARKER);
                        self.out.push(c);
                        self.cursor.advance();
                        self.state = ScanState::Plain;
                    }
                    Some(_) => self.reject(),
                },
                ScanState::SawHash => match self.cursor.current() {
                    None => break,
                    Some(HEX_INTRO) => {
                        self.cursor.advance();
                        self.state = ScanState::SawDoubleHash;
                    }
                    Some(_) => match self.cursor.hex_run(SINGLE_TAG_LEN) {
                        Some(digits) => {
                            self.emit_single_tag(digits);
                            self.cursor.advance_n(SINGLE_TAG_LEN);
                            self.state = ScanState::Plain;
                        }
                        None => self.reject(),
                    },
                },
                ScanState::SawDoubleHash => {
                    if self.cursor.is_eof() {
                        break;
                    }
                    match self.cursor.hex_run(DOUBLE_TAG_LEN) {
                        Some(digits) => {
                            self.emit_double_tag(digits);
                            self.cursor.advance_n(DOUBLE_TAG_LEN);
                            self.state = ScanState::Plain;
                        }
                        None => self.reject(),
                    }
                }
            }
        }

        // EOF inside a tag: nothing was completed, so the prefix is text.
        self.out.push_str(self.state.pending_literal());
        self.out
    }

    /// Abandon the current tag attempt. The cursor stays on the offending
    /// character so `Plain` scans it next.
    fn reject(&mut self) {
        tracing::trace!(
            pos = self.cursor.pos(),
            state = ?self.state,
            "rejected color tag, emitting literal"
        );
        self.out.push_str(self.state.pending_literal());
        self.state = ScanState::Plain;
    }

    /// `§x` then `§d` for each of the six digits.
    fn emit_single_tag(&mut self, digits: &str) {
        self.out.push(MARKER);
        self.out.push(HEX_TAG);
        for d in digits.chars() {
            self.out.push(MARKER);
            self.out.push(d);
        }
    }

    /// `§x` then `§d§d` for each of the three digits: `abc` reads as `aabbcc`.
    fn emit_double_tag(&mut self, digits: &str) {
        self.out.push(MARKER);
        self.out.push(HEX_TAG);
        for d in digits.chars() {
            self.out.push(MARKER);
            self.out.push(d);
            self.out.push(MARKER);
            self.out.push(d);
        }
    }
}

#[cfg(test)]
mod tests;
