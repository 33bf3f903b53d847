//! Colorizer seam for hosts.
//!
//! Menu and chat rendering code holds a `&dyn Colorizer` (or a
//! [`ColorizerKind`] read from its settings) and calls it on every render,
//! without caring which markup dialect is enabled.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::alphabet::{is_color_character, MARKER};
use crate::cursor::Cursor;
use crate::transcoder;

/// Rewrites user-authored color markup into marker-prefixed output.
///
/// Implementations are stateless: `colorize` may be called concurrently
/// from any number of threads.
pub trait Colorizer: Send + Sync {
    /// Transcode `text`. Borrowed output means nothing needed rewriting.
    fn colorize<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Transcode optional text; `None` passes through.
    fn colorize_opt<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        text.map(|t| self.colorize(t))
    }
}

/// Legacy letters plus `&#rrggbb` and `&##rgb` hex tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvancedColorizer;

impl Colorizer for AdvancedColorizer {
    #[inline]
    fn colorize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        transcoder::colorize(text)
    }
}

/// Legacy letters only.
///
/// `&` followed by a color letter becomes the marker plus that letter, case
/// preserved. Hex forms are not recognized and stay as written; `&#ff0000`
/// comes out unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegacyColorizer;

impl Colorizer for LegacyColorizer {
    fn colorize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut cursor = Cursor::new(text);
        let head = cursor.eat_until_escape();
        if cursor.is_eof() {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len());
        out.push_str(head);
        while !cursor.is_eof() {
            // On `&`.
            cursor.advance();
            match cursor.current() {
                Some(c) if is_color_character(c) => {
                    out.push(MARKER);
                    out.push(c);
                    cursor.advance();
                }
                // Next char (if any) is rescanned as text; it may be another `&`.
                _ => out.push('&'),
            }
            out.push_str(cursor.eat_until_escape());
        }
        Cow::Owned(out)
    }
}

/// Colorizer chosen by name, e.g. from a host's settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorizerKind {
    /// [`LegacyColorizer`].
    Legacy,
    /// [`AdvancedColorizer`].
    #[default]
    Advanced,
}

impl ColorizerKind {
    /// Name accepted by [`FromStr`] and produced by [`Display`](fmt::Display).
    pub fn name(self) -> &'static str {
        match self {
            ColorizerKind::Legacy => "legacy",
            ColorizerKind::Advanced => "advanced",
        }
    }
}

impl Colorizer for ColorizerKind {
    #[inline]
    fn colorize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            ColorizerKind::Legacy => LegacyColorizer.colorize(text),
            ColorizerKind::Advanced => AdvancedColorizer.colorize(text),
        }
    }
}

impl fmt::Display for ColorizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A colorizer name that matches no [`ColorizerKind`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown colorizer `{name}` (expected `legacy` or `advanced`)")]
pub struct UnknownColorizer {
    /// The rejected name, as given.
    pub name: String,
}

impl FromStr for ColorizerKind {
    type Err = UnknownColorizer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("legacy") {
            Ok(ColorizerKind::Legacy)
        } else if s.eq_ignore_ascii_case("advanced") {
            Ok(ColorizerKind::Advanced)
        } else {
            Err(UnknownColorizer {
                name: s.to_owned(),
            })
        }
    }
}
