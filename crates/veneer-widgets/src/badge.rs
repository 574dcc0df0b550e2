#![forbid(unsafe_code)]

//! Badge component.
//!
//! A compact, single-line label with a variant preset ("status",
//! "priority", counters). Deterministic padding and truncation;
//! zero-area render is a no-op.

use unicode_width::UnicodeWidthStr;
use veneer_core::geometry::Rect;
use veneer_render::cell::PackedRgba;
use veneer_render::frame::Frame;
use veneer_style::Style;

use crate::{Widget, draw_text_span, fill_area};

/// Visual preset for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeVariant {
    /// Quiet gray, the default.
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeVariant {
    /// The preset style for this variant.
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            BadgeVariant::Neutral => Style::new()
                .fg(PackedRgba::rgb(200, 200, 210))
                .bg(PackedRgba::rgb(55, 55, 65)),
            BadgeVariant::Success => Style::new()
                .fg(PackedRgba::rgb(20, 45, 25))
                .bg(PackedRgba::rgb(120, 210, 140)),
            BadgeVariant::Warning => Style::new()
                .fg(PackedRgba::rgb(60, 45, 10))
                .bg(PackedRgba::rgb(235, 195, 90)),
            BadgeVariant::Error => Style::new()
                .fg(PackedRgba::rgb(255, 235, 235))
                .bg(PackedRgba::rgb(195, 60, 60)),
            BadgeVariant::Info => Style::new()
                .fg(PackedRgba::rgb(15, 40, 60))
                .bg(PackedRgba::rgb(130, 190, 245)),
        }
    }
}

/// A compact label with padding and a variant preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Badge<'a> {
    label: &'a str,
    variant: BadgeVariant,
    pad: u16,
}

impl<'a> Badge<'a> {
    /// Create a neutral badge with 1 cell of padding per side.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: BadgeVariant::Neutral,
            pad: 1,
        }
    }

    /// Builder: set the variant preset.
    #[must_use]
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Builder: set the left/right padding in cells.
    #[must_use]
    pub fn padding(mut self, pad: u16) -> Self {
        self.pad = pad;
        self
    }

    /// Display width in cells (label plus padding).
    #[must_use]
    pub fn width(&self) -> u16 {
        (UnicodeWidthStr::width(self.label) as u16).saturating_add(self.pad * 2)
    }
}

impl Widget for Badge<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let style = self.variant.style();
        let span = Rect::new(area.x, area.y, self.width().min(area.width), 1);
        fill_area(frame, span, style);
        draw_text_span(
            frame,
            area.x.saturating_add(self.pad),
            area.y,
            self.label,
            style,
            span.right(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_includes_padding() {
        assert_eq!(Badge::new("OK").width(), 4);
        assert_eq!(Badge::new("OK").padding(2).width(), 6);
        assert_eq!(Badge::new("").width(), 2);
    }

    #[test]
    fn renders_padded_label_with_variant_colors() {
        let badge = Badge::new("OK").variant(BadgeVariant::Success);
        let mut frame = Frame::new(10, 1);
        badge.render(Rect::new(0, 0, 10, 1), &mut frame);

        assert_eq!(frame.buffer.row_text(0), " OK       ");
        let bg = BadgeVariant::Success.style().bg.unwrap();
        for x in 0..4 {
            assert_eq!(frame.buffer.get(x, 0).unwrap().bg, bg);
        }
        assert!(frame.buffer.get(4, 0).unwrap().is_empty());
    }

    #[test]
    fn truncates_in_small_area() {
        let badge = Badge::new("LONG LABEL");
        let mut frame = Frame::new(4, 1);
        badge.render(Rect::new(0, 0, 4, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), " LON");
    }

    #[test]
    fn zero_area_is_noop() {
        let badge = Badge::new("X");
        let mut frame = Frame::new(4, 1);
        badge.render(Rect::new(0, 0, 0, 0), &mut frame);
        assert!(frame.buffer.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn default_variant_is_neutral() {
        assert_eq!(Badge::new("x").variant, BadgeVariant::Neutral);
    }
}
