#![forbid(unsafe_code)]

//! Theme palettes and theme-mode detection.
//!
//! The mode is resolved once from read-only environment attributes and
//! mapped to a local enum; nothing in the library observes or mutates
//! terminal state afterwards. `VENEER_THEME` wins; otherwise the
//! `COLORFGBG` convention (`<fg>;<bg>`, light background codes 7-15) is
//! used as a heuristic; the fallback is dark.

use veneer_render::cell::PackedRgba;

use crate::Style;

/// Light or dark rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    /// Dark background terminal (default assumption).
    #[default]
    Dark,
    /// Light background terminal.
    Light,
}

impl ThemeMode {
    /// Resolve the mode from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env_values(
            std::env::var("VENEER_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    }

    /// Pure resolution rule, split out so tests don't touch the
    /// process environment.
    #[must_use]
    pub fn from_env_values(explicit: Option<&str>, colorfgbg: Option<&str>) -> Self {
        match explicit.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("light") => return ThemeMode::Light,
            Some(v) if v.eq_ignore_ascii_case("dark") => return ThemeMode::Dark,
            _ => {}
        }
        if let Some(value) = colorfgbg
            && let Some(bg) = value.rsplit(';').next()
            && let Ok(code) = bg.trim().parse::<u8>()
            && (7..=15).contains(&code)
        {
            return ThemeMode::Light;
        }
        ThemeMode::Dark
    }
}

/// Named color roles for application chrome.
///
/// Widgets carry their own variant presets; the theme exists for hosts
/// (and the showcase) to style surrounding chrome consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Which mode this palette belongs to.
    pub mode: ThemeMode,
    /// Primary text.
    pub text: PackedRgba,
    /// De-emphasized text (hints, captions).
    pub muted: PackedRgba,
    /// Panel/overlay background.
    pub surface: PackedRgba,
    /// Interactive accent.
    pub accent: PackedRgba,
    /// Border lines.
    pub border: PackedRgba,
}

impl Theme {
    /// The dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            text: PackedRgba::rgb(220, 220, 230),
            muted: PackedRgba::rgb(140, 140, 160),
            surface: PackedRgba::rgb(30, 30, 40),
            accent: PackedRgba::rgb(100, 180, 255),
            border: PackedRgba::rgb(100, 100, 120),
        }
    }

    /// The light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            text: PackedRgba::rgb(30, 30, 40),
            muted: PackedRgba::rgb(110, 110, 125),
            surface: PackedRgba::rgb(245, 245, 248),
            accent: PackedRgba::rgb(0, 95, 190),
            border: PackedRgba::rgb(170, 170, 185),
        }
    }

    /// Palette for a mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Style for primary text on the theme surface.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::new().fg(self.text)
    }

    /// Style for de-emphasized text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    /// Style for accent/interactive elements.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::new().fg(self.accent)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
