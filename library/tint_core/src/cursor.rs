//! Character cursor over borrowed markup text.
//!
//! The cursor tracks a byte offset that always sits on a UTF-8 character
//! boundary. Every grammar character (`&`, `#`, hex digits, color letters)
//! is ASCII, so lookahead compares bytes directly: an ASCII byte can never
//! be part of a multi-byte sequence. Anything non-ASCII is only ever copied
//! through whole, via [`Cursor::advance`] or [`Cursor::eat_until_escape`].

use crate::alphabet::ESCAPE_BYTE;

/// Cursor over a `&str`, advancing by character.
///
/// The cursor is [`Copy`], so a scanner can snapshot it before a lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Byte offset into `src`. Always on a char boundary, `<= src.len()`.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Unconsumed tail of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// The character at the cursor, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        let b = *self.src.as_bytes().get(self.pos)?;
        if b.is_ascii() {
            Some(char::from(b))
        } else {
            self.remaining().chars().next()
        }
    }

    /// Advance past one full character. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance `n` bytes.
    ///
    /// # Contract
    ///
    /// The next `n` bytes must be ASCII, which holds right after a
    /// successful [`hex_run`](Self::hex_run) of the same length.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(
            self.remaining().as_bytes().iter().take(n).all(u8::is_ascii),
            "advance_n must only skip ASCII"
        );
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// The next `n` characters, if all of them are hex digits.
    ///
    /// Returns `None` when fewer than `n` characters remain or any of them
    /// is not `0-9`, `a-f`, `A-F`. Does not move the cursor.
    #[inline]
    pub fn hex_run(&self, n: usize) -> Option<&'a str> {
        let run = self.remaining().as_bytes().get(..n)?;
        if run.iter().all(u8::is_ascii_hexdigit) {
            // All ASCII, so `pos + n` is a char boundary.
            Some(&self.src[self.pos..self.pos + n])
        } else {
            None
        }
    }

    /// Consume everything up to (not including) the next escape character,
    /// or to EOF if there is none, and return the consumed run.
    ///
    /// Uses memchr, so long runs of plain text cost one SIMD scan instead of
    /// a per-character state dispatch.
    #[inline]
    pub fn eat_until_escape(&mut self) -> &'a str {
        let start = self.pos;
        let rest = &self.src.as_bytes()[start..];
        self.pos = match memchr::memchr(ESCAPE_BYTE, rest) {
            Some(offset) => start + offset,
            None => self.src.len(),
        };
        &self.src[start..self.pos]
    }
}
