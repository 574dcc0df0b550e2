#![forbid(unsafe_code)]

//! Button component.
//!
//! Purely presentational: the button renders a label with a variant
//! preset and focus/disabled treatments. Activation semantics belong to
//! the host (or to composites like the combobox, which renders its
//! trigger as an outline button).

use unicode_width::UnicodeWidthStr;
use veneer_core::geometry::Rect;
use veneer_render::cell::PackedRgba;
use veneer_render::frame::Frame;
use veneer_style::Style;

use crate::{Widget, draw_text_span, fill_area};

/// Visual preset for a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    /// Filled accent background.
    #[default]
    Solid,
    /// Bordered, transparent background.
    Outline,
    /// No chrome until focused.
    Ghost,
    /// Filled error background for destructive actions.
    Destructive,
}

impl ButtonVariant {
    fn style(self) -> Style {
        match self {
            ButtonVariant::Solid => Style::new()
                .fg(PackedRgba::rgb(15, 25, 40))
                .bg(PackedRgba::rgb(130, 190, 245)),
            ButtonVariant::Outline => Style::new().fg(PackedRgba::rgb(200, 200, 210)),
            ButtonVariant::Ghost => Style::new().fg(PackedRgba::rgb(170, 170, 185)),
            ButtonVariant::Destructive => Style::new()
                .fg(PackedRgba::rgb(255, 235, 235))
                .bg(PackedRgba::rgb(195, 60, 60)),
        }
    }
}

/// A single-line button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    focused: bool,
    disabled: bool,
}

impl<'a> Button<'a> {
    /// Create a solid button.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Solid,
            focused: false,
            disabled: false,
        }
    }

    /// Builder: set the variant preset.
    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Builder: render with focus treatment (reverse video).
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Builder: render with disabled treatment (dimmed).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Display width in cells: `[ label ]`.
    #[must_use]
    pub fn width(&self) -> u16 {
        (UnicodeWidthStr::width(self.label) as u16).saturating_add(4)
    }

    fn effective_style(&self) -> Style {
        let mut style = self.variant.style();
        if self.disabled {
            style = style.dim();
        } else if self.focused {
            style = style.reverse();
        }
        style
    }
}

impl Widget for Button<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let style = self.effective_style();
        let span = Rect::new(area.x, area.y, self.width().min(area.width), 1);
        fill_area(frame, span, style);

        let (open, close) = match self.variant {
            ButtonVariant::Outline => ("[ ", " ]"),
            _ => ("  ", "  "),
        };
        let mut x = draw_text_span(frame, span.x, span.y, open, style, span.right());
        x = draw_text_span(frame, x, span.y, self.label, style, span.right());
        draw_text_span(frame, x, span.y, close, style, span.right());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_render::cell::StyleFlags;

    #[test]
    fn width_adds_bracket_room() {
        assert_eq!(Button::new("Go").width(), 6);
    }

    #[test]
    fn outline_renders_brackets() {
        let mut frame = Frame::new(10, 1);
        Button::new("Go")
            .variant(ButtonVariant::Outline)
            .render(Rect::new(0, 0, 10, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "[ Go ]    ");
    }

    #[test]
    fn solid_renders_without_brackets() {
        let mut frame = Frame::new(10, 1);
        Button::new("Go").render(Rect::new(0, 0, 10, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "  Go      ");
    }

    #[test]
    fn focused_uses_reverse_video() {
        let mut frame = Frame::new(10, 1);
        Button::new("Go")
            .focused(true)
            .render(Rect::new(0, 0, 10, 1), &mut frame);
        assert!(
            frame
                .buffer
                .get(0, 0)
                .unwrap()
                .attrs
                .contains(StyleFlags::REVERSE)
        );
    }

    #[test]
    fn disabled_dims_and_suppresses_focus() {
        let mut frame = Frame::new(10, 1);
        Button::new("Go")
            .focused(true)
            .disabled(true)
            .render(Rect::new(0, 0, 10, 1), &mut frame);
        let attrs = frame.buffer.get(0, 0).unwrap().attrs;
        assert!(attrs.contains(StyleFlags::DIM));
        assert!(!attrs.contains(StyleFlags::REVERSE));
    }

    #[test]
    fn truncates_in_small_area() {
        let mut frame = Frame::new(4, 1);
        Button::new("Confirm").render(Rect::new(0, 0, 4, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "  Co");
    }
}
