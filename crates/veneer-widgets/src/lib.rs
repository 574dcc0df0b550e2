#![forbid(unsafe_code)]

//! The Veneer component library.
//!
//! Pre-styled, keyboard-driven UI components with fixed prop contracts:
//! presentational pieces ([`button::Button`], [`badge::Badge`],
//! [`alert::Alert`], [`toast::ToastStack`]) and the interactive
//! [`combobox::Combobox`], which composes the [`popover::Popover`]
//! disclosure surface with the [`command::CommandList`] searchable list.

pub mod alert;
pub mod badge;
pub mod button;
pub mod combobox;
pub mod command;
pub mod popover;
pub mod toast;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use veneer_core::geometry::Rect;
use veneer_render::cell::Cell;
use veneer_render::frame::Frame;
use veneer_style::Style;

/// A `Widget` renders itself into a frame within a given area.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` renders based on mutable state that outlives the
/// widget value (which is rebuilt each render pass).
pub trait StatefulWidget {
    type State;

    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Apply a style overlay to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs = attrs;
    }
}

/// Apply a style to all cells in an area, preserving their content.
pub(crate) fn set_style_area(frame: &mut Frame, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = frame.buffer.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span, clipping at `max_x` (exclusive).
///
/// Wide graphemes that would cross `max_x` are dropped whole. Returns
/// the x position after the last drawn cell.
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            apply_style(&mut cell, style);
            frame.buffer.set(x, y, cell);
        }
        // Continuation cells of a wide glyph keep their previous content
        // cleared to styled blanks.
        for dx in 1..w as u16 {
            let mut blank = Cell::EMPTY;
            apply_style(&mut blank, style);
            frame.buffer.set(x + dx, y, blank);
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Fill an area with styled blanks.
pub(crate) fn fill_area(frame: &mut Frame, area: Rect, style: Style) {
    let mut cell = Cell::EMPTY;
    apply_style(&mut cell, style);
    frame.buffer.fill(area, cell);
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_render::cell::PackedRgba;

    #[test]
    fn apply_style_sets_fields() {
        let mut cell = Cell::from_char('Z');
        apply_style(&mut cell, Style::new().fg(PackedRgba::rgb(255, 0, 0)));
        assert_eq!(cell.fg, PackedRgba::rgb(255, 0, 0));
        assert_eq!(cell.ch, 'Z');
    }

    #[test]
    fn apply_empty_style_is_noop() {
        let mut cell = Cell::from_char('Z');
        let before = cell;
        apply_style(&mut cell, Style::default());
        assert_eq!(cell, before);
    }

    #[test]
    fn draw_text_span_basic() {
        let mut frame = Frame::new(10, 1);
        let end = draw_text_span(&mut frame, 0, 0, "ABC", Style::default(), 10);
        assert_eq!(end, 3);
        assert_eq!(frame.buffer.row_text(0), "ABC       ");
    }

    #[test]
    fn draw_text_span_clips_at_max_x() {
        let mut frame = Frame::new(10, 1);
        let end = draw_text_span(&mut frame, 0, 0, "ABCDEF", Style::default(), 3);
        assert_eq!(end, 3);
        assert_eq!(frame.buffer.get(3, 0).unwrap().ch, ' ');
    }

    #[test]
    fn draw_text_span_offset_start() {
        let mut frame = Frame::new(10, 1);
        let end = draw_text_span(&mut frame, 5, 0, "XY", Style::default(), 10);
        assert_eq!(end, 7);
        assert_eq!(frame.buffer.get(5, 0).unwrap().ch, 'X');
        assert!(frame.buffer.get(4, 0).unwrap().is_empty());
    }

    #[test]
    fn draw_text_span_wide_glyph_spans_two_cells() {
        let mut frame = Frame::new(10, 1);
        let end = draw_text_span(&mut frame, 0, 0, "你a", Style::default(), 10);
        assert_eq!(end, 3);
        assert_eq!(frame.buffer.get(0, 0).unwrap().ch, '你');
        assert_eq!(frame.buffer.get(2, 0).unwrap().ch, 'a');
    }

    #[test]
    fn draw_text_span_wide_glyph_never_splits() {
        let mut frame = Frame::new(10, 1);
        // Only one column remains; the wide glyph must be dropped whole.
        let end = draw_text_span(&mut frame, 0, 0, "你", Style::default(), 1);
        assert_eq!(end, 0);
        assert!(frame.buffer.get(0, 0).unwrap().is_empty());
    }

    #[test]
    fn set_style_area_preserves_content() {
        let mut frame = Frame::new(3, 1);
        draw_text_span(&mut frame, 0, 0, "ab", Style::default(), 3);
        set_style_area(
            &mut frame,
            Rect::new(0, 0, 3, 1),
            Style::new().bg(PackedRgba::rgb(7, 7, 7)),
        );
        assert_eq!(frame.buffer.get(0, 0).unwrap().ch, 'a');
        assert_eq!(frame.buffer.get(0, 0).unwrap().bg, PackedRgba::rgb(7, 7, 7));
    }

    #[test]
    fn fill_area_writes_styled_blanks() {
        let mut frame = Frame::new(3, 2);
        fill_area(
            &mut frame,
            Rect::new(1, 0, 2, 2),
            Style::new().bg(PackedRgba::rgb(5, 5, 5)),
        );
        assert_eq!(frame.buffer.get(1, 1).unwrap().bg, PackedRgba::rgb(5, 5, 5));
        assert!(frame.buffer.get(0, 0).unwrap().is_empty());
    }
}
