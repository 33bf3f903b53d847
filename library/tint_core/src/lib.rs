//! Single-pass transcoder for `&`-style color markup.
//!
//! Converts user-authored text such as `&cHello &#ff8800world &##0af!` into
//! the marker-prefixed representation a downstream renderer consumes:
//!
//! | Input      | Output                                   |
//! |------------|------------------------------------------|
//! | `&c`       | `§c`                                     |
//! | `&#1a2b3c` | `§x§1§a§2§b§3§c`                         |
//! | `&##abc`   | `§x§a§a§b§b§c§c`                         |
//!
//! Malformed or truncated tags are never an error: the escape prefix that
//! was provisionally swallowed is written back as plain text and scanning
//! resumes at the character that broke the match.
//!
//! # Layers
//!
//! - [`alphabet`]: the fixed grammar constants and the legacy [`ColorCode`] set
//! - [`Cursor`]: character cursor with the lookahead the scanner needs
//! - [`transcoder`]: the four-state machine behind [`colorize`]
//! - [`Colorizer`]: the seam hosts call through, with [`ColorizerKind`] to
//!   pick an implementation by name
//!
//! The crate performs no I/O and holds no global state; every call is a pure
//! function of its input and may run concurrently from any thread.

pub mod alphabet;
mod colorizer;
mod cursor;
pub mod transcoder;

pub use alphabet::{is_color_character, is_hex_digit, ColorCode, ESCAPE, MARKER};
pub use colorizer::{
    AdvancedColorizer, Colorizer, ColorizerKind, LegacyColorizer, UnknownColorizer,
};
pub use cursor::Cursor;
pub use transcoder::{colorize, colorize_opt, ScanState};
