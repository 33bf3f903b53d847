//! Fixed grammar of the color markup.
//!
//! The public escape character, the hex introducer and the internal marker
//! are constants: the grammar is not configurable. The legacy alphabet is
//! the classic single-letter set of 16 colors, 5 formats, reset, and the
//! `x` opener used by expanded RGB tags.

/// Public escape character that introduces a tag in user-authored text.
pub const ESCAPE: char = '&';

/// Byte form of [`ESCAPE`], for memchr scanning.
pub(crate) const ESCAPE_BYTE: u8 = b'&';

/// Follows [`ESCAPE`] to open a hex tag (`&#rrggbb`); doubled for the
/// shorthand form (`&##rgb`).
pub const HEX_INTRO: char = '#';

/// Reserved character prefixed to every token in transcoded output.
///
/// Never equal to [`ESCAPE`], a hex digit, or a color letter, so a renderer
/// can split output on it without ambiguity.
pub const MARKER: char = '\u{a7}';

/// Letter written after [`MARKER`] to open an expanded RGB tag.
pub const HEX_TAG: char = 'x';

/// Returns `true` if `c` is a member of the legacy color alphabet.
///
/// Case-insensitive. Equivalent to `ColorCode::from_char(c).is_some()`.
#[inline]
pub fn is_color_character(c: char) -> bool {
    matches!(
        c,
        '0'..='9' | 'a'..='f' | 'A'..='F' | 'k'..='o' | 'K'..='O' | 'r' | 'R' | 'x' | 'X'
    )
}

/// Returns `true` for `0-9`, `a-f`, `A-F`.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// A legacy single-letter color or format code.
///
/// The discriminant order follows the letter order of the alphabet: the 16
/// colors map to `0`-`9`/`a`-`f`, formats to `k`-`o`, then reset and hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    /// `k`: randomly cycling glyphs.
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    /// `r`: clears every color and format.
    Reset,
    /// `x`: opens an RGB tag, six digit tokens follow.
    Hex,
}

impl ColorCode {
    /// Every code, in alphabet order.
    pub const ALL: [ColorCode; 23] = [
        ColorCode::Black,
        ColorCode::DarkBlue,
        ColorCode::DarkGreen,
        ColorCode::DarkAqua,
        ColorCode::DarkRed,
        ColorCode::DarkPurple,
        ColorCode::Gold,
        ColorCode::Gray,
        ColorCode::DarkGray,
        ColorCode::Blue,
        ColorCode::Green,
        ColorCode::Aqua,
        ColorCode::Red,
        ColorCode::LightPurple,
        ColorCode::Yellow,
        ColorCode::White,
        ColorCode::Obfuscated,
        ColorCode::Bold,
        ColorCode::Strikethrough,
        ColorCode::Underline,
        ColorCode::Italic,
        ColorCode::Reset,
        ColorCode::Hex,
    ];

    /// Look up the code for a letter. Case-insensitive.
    pub fn from_char(c: char) -> Option<ColorCode> {
        let code = match c.to_ascii_lowercase() {
            '0' => ColorCode::Black,
            '1' => ColorCode::DarkBlue,
            '2' => ColorCode::DarkGreen,
            '3' => ColorCode::DarkAqua,
            '4' => ColorCode::DarkRed,
            '5' => ColorCode::DarkPurple,
            '6' => ColorCode::Gold,
            '7' => ColorCode::Gray,
            '8' => ColorCode::DarkGray,
            '9' => ColorCode::Blue,
            'a' => ColorCode::Green,
            'b' => ColorCode::Aqua,
            'c' => ColorCode::Red,
            'd' => ColorCode::LightPurple,
            'e' => ColorCode::Yellow,
            'f' => ColorCode::White,
            'k' => ColorCode::Obfuscated,
            'l' => ColorCode::Bold,
            'm' => ColorCode::Strikethrough,
            'n' => ColorCode::Underline,
            'o' => ColorCode::Italic,
            'r' => ColorCode::Reset,
            'x' => ColorCode::Hex,
            _ => return None,
        };
        Some(code)
    }

    /// Canonical (lowercase) letter for this code.
    pub fn as_char(self) -> char {
        match self {
            ColorCode::Black => '0',
            ColorCode::DarkBlue => '1',
            ColorCode::DarkGreen => '2',
            ColorCode::DarkAqua => '3',
            ColorCode::DarkRed => '4',
            ColorCode::DarkPurple => '5',
            ColorCode::Gold => '6',
            ColorCode::Gray => '7',
            ColorCode::DarkGray => '8',
            ColorCode::Blue => '9',
            ColorCode::Green => 'a',
            ColorCode::Aqua => 'b',
            ColorCode::Red => 'c',
            ColorCode::LightPurple => 'd',
            ColorCode::Yellow => 'e',
            ColorCode::White => 'f',
            ColorCode::Obfuscated => 'k',
            ColorCode::Bold => 'l',
            ColorCode::Strikethrough => 'm',
            ColorCode::Underline => 'n',
            ColorCode::Italic => 'o',
            ColorCode::Reset => 'r',
            ColorCode::Hex => HEX_TAG,
        }
    }

    /// `true` for the 16 palette colors.
    pub fn is_color(self) -> bool {
        (self as u8) <= (ColorCode::White as u8)
    }

    /// `true` for obfuscated, bold, strikethrough, underline and italic.
    pub fn is_format(self) -> bool {
        matches!(
            self,
            ColorCode::Obfuscated
                | ColorCode::Bold
                | ColorCode::Strikethrough
                | ColorCode::Underline
                | ColorCode::Italic
        )
    }
}
