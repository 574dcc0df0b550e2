#![forbid(unsafe_code)]

//! Shared drawing helpers: text spans and the screen-tab header.

use veneer_core::geometry::Rect;
use veneer_render::frame::Frame;
use veneer_style::{Style, Theme};

use crate::app::ScreenId;

/// Draw `text` starting at `(x, y)`, clipped to the frame width.
/// Returns the x after the last drawn cell.
pub fn draw_text(frame: &mut Frame, x: u16, y: u16, text: &str, style: Style) -> u16 {
    let mut cx = x;
    for ch in text.chars() {
        if cx >= frame.width() {
            break;
        }
        if let Some(cell) = frame.buffer.get_mut(cx, y) {
            cell.ch = ch;
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
        cx += 1;
    }
    cx
}

/// One-row header listing every screen, the active one accented.
pub fn draw_header(frame: &mut Frame, area: Rect, active: ScreenId, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let mut x = area.x + 1;
    for (i, id) in ScreenId::ALL.iter().enumerate() {
        let style = if *id == active {
            theme.accent_style().bold()
        } else {
            theme.muted_style()
        };
        let label = format!("{} {}", i + 1, id.title());
        x = draw_text(frame, x, area.y, &label, style);
        x = draw_text(frame, x, area.y, "  ", theme.muted_style());
        if x >= area.right() {
            break;
        }
    }
}

/// One-row footer with global keybindings.
pub fn draw_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    draw_text(
        frame,
        area.x + 1,
        area.y,
        "Tab cycle screens · q quit",
        theme.muted_style(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_text_clips_at_frame_edge() {
        let mut frame = Frame::new(3, 1);
        let end = draw_text(&mut frame, 0, 0, "hello", Style::new());
        assert_eq!(end, 3);
        assert_eq!(frame.buffer.row_text(0), "hel");
    }

    #[test]
    fn header_marks_active_screen() {
        let theme = Theme::dark();
        let mut frame = Frame::new(60, 1);
        draw_header(
            &mut frame,
            Rect::new(0, 0, 60, 1),
            ScreenId::Badges,
            &theme,
        );
        assert!(frame.buffer.row_text(0).contains("2 Badges"));
    }
}
