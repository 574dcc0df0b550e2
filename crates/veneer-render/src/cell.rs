#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! A [`Cell`] is the fundamental unit of the terminal grid: one Unicode
//! scalar plus packed foreground/background colors and attribute flags.
//! Wide glyphs occupy their leading cell; the following cell is left as
//! a space continuation by the draw helpers.

use bitflags::bitflags;

/// RGBA color packed into a `u32` as `0xRRGGBBAA`.
///
/// Alpha `0` is the sentinel for "terminal default color"; the presenter
/// emits SGR 39/49 for it instead of a truecolor sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// The terminal's own default color.
    pub const DEFAULT: Self = Self(0);

    /// Create an opaque color from RGB components.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xFF)
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Whether this is the terminal-default sentinel.
    #[inline]
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.a() == 0
    }
}

bitflags! {
    /// Text attribute flags for a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD          = 0b0000_0001;
        const DIM           = 0b0000_0010;
        const ITALIC        = 0b0000_0100;
        const UNDERLINE     = 0b0000_1000;
        const REVERSE       = 0b0001_0000;
        const STRIKETHROUGH = 0b0010_0000;
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The displayed character.
    pub ch: char,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Cell {
    /// An empty cell: a space with default colors and no attributes.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: PackedRgba::DEFAULT,
        bg: PackedRgba::DEFAULT,
        attrs: StyleFlags::empty(),
    };

    /// Create a cell holding a character with default styling.
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            fg: PackedRgba::DEFAULT,
            bg: PackedRgba::DEFAULT,
            attrs: StyleFlags::empty(),
        }
    }

    /// Whether the cell is visually empty (a blank with no styling).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ch == ' '
            && self.fg.is_default()
            && self.bg.is_default()
            && self.attrs.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rgb_channels_round_trip() {
        let c = PackedRgba::rgb(12, 34, 56);
        assert_eq!(c.r(), 12);
        assert_eq!(c.g(), 34);
        assert_eq!(c.b(), 56);
        assert_eq!(c.a(), 255);
        assert!(!c.is_default());
    }

    #[test]
    fn default_color_sentinel() {
        assert!(PackedRgba::DEFAULT.is_default());
        assert!(PackedRgba::default().is_default());
    }

    #[test]
    fn empty_cell() {
        assert!(Cell::EMPTY.is_empty());
        assert!(Cell::default().is_empty());
        assert!(!Cell::from_char('x').is_empty());

        let styled_blank = Cell {
            bg: PackedRgba::rgb(1, 2, 3),
            ..Cell::EMPTY
        };
        assert!(!styled_blank.is_empty());
    }

    proptest! {
        #[test]
        fn rgb_is_never_default(r: u8, g: u8, b: u8) {
            prop_assert!(!PackedRgba::rgb(r, g, b).is_default());
        }

        #[test]
        fn channels_extract_what_rgb_packed(r: u8, g: u8, b: u8) {
            let c = PackedRgba::rgb(r, g, b);
            prop_assert_eq!((c.r(), c.g(), c.b()), (r, g, b));
        }
    }
}
