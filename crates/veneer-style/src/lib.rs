#![forbid(unsafe_code)]

//! Styling primitives for Veneer widgets.
//!
//! A [`Style`] is an overlay: every field is optional, and applying an
//! empty style to a cell changes nothing. Widgets take styles from a
//! [`theme::Theme`] or from caller-supplied presets and never hardcode
//! colors outside the theme tables.

pub mod theme;

use veneer_render::cell::{PackedRgba, StyleFlags};

pub use theme::{Theme, ThemeMode};

/// An optional-field style overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<PackedRgba>,
    /// Background color, if set.
    pub bg: Option<PackedRgba>,
    /// Attribute flags, if set.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Builder: set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Builder: set the background color.
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Builder: set attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Builder: add bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attr(StyleFlags::BOLD)
    }

    /// Builder: add dim.
    #[must_use]
    pub fn dim(self) -> Self {
        self.add_attr(StyleFlags::DIM)
    }

    /// Builder: add underline.
    #[must_use]
    pub fn underline(self) -> Self {
        self.add_attr(StyleFlags::UNDERLINE)
    }

    /// Builder: add reverse video.
    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_attr(StyleFlags::REVERSE)
    }

    fn add_attr(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_else(StyleFlags::empty) | flag);
        self
    }

    /// Whether applying this style would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Overlay `other` on top of this style; set fields of `other` win.
    #[must_use]
    pub fn patch(mut self, other: Style) -> Self {
        if other.fg.is_some() {
            self.fg = other.fg;
        }
        if other.bg.is_some() {
            self.bg = other.bg;
        }
        if other.attrs.is_some() {
            self.attrs = other.attrs;
        }
        self
    }
}
