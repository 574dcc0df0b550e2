#![forbid(unsafe_code)]

//! Alert component.
//!
//! A block with a left gutter rule, an optional bold title line, and a
//! wrapped message. Severity picks the gutter/title colors.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use veneer_core::geometry::Rect;
use veneer_render::cell::PackedRgba;
use veneer_render::frame::Frame;
use veneer_style::Style;

use crate::{Widget, draw_text_span};

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertSeverity {
    fn accent(self) -> PackedRgba {
        match self {
            AlertSeverity::Info => PackedRgba::rgb(130, 190, 245),
            AlertSeverity::Success => PackedRgba::rgb(120, 210, 140),
            AlertSeverity::Warning => PackedRgba::rgb(235, 195, 90),
            AlertSeverity::Error => PackedRgba::rgb(235, 110, 110),
        }
    }
}

/// An alert block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert<'a> {
    message: &'a str,
    title: Option<&'a str>,
    severity: AlertSeverity,
}

impl<'a> Alert<'a> {
    /// Create an info alert with a message.
    #[must_use]
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            title: None,
            severity: AlertSeverity::Info,
        }
    }

    /// Builder: set the title line.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Builder: set the severity.
    #[must_use]
    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Rows needed to show the full alert at a given width.
    #[must_use]
    pub fn height_for_width(&self, width: u16) -> u16 {
        let text_width = width.saturating_sub(2);
        if text_width == 0 {
            return 0;
        }
        let title_rows = u16::from(self.title.is_some());
        let message_rows = wrap_words(self.message, text_width).len() as u16;
        title_rows + message_rows.max(1)
    }
}

impl Widget for Alert<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() || area.width < 3 {
            return;
        }
        let accent = Style::new().fg(self.severity.accent());
        let text = Style::new().fg(PackedRgba::rgb(200, 200, 210));
        let text_x = area.x + 2;
        let mut y = area.y;

        if let Some(title) = self.title
            && y < area.bottom()
        {
            draw_text_span(frame, text_x, y, title, accent.bold(), area.right());
            y += 1;
        }
        for line in wrap_words(self.message, area.right().saturating_sub(text_x)) {
            if y >= area.bottom() {
                break;
            }
            draw_text_span(frame, text_x, y, &line, text, area.right());
            y += 1;
        }
        // Gutter rule spans exactly the rows the content used.
        for gy in area.y..y.max(area.y + 1).min(area.bottom()) {
            draw_text_span(frame, area.x, gy, "▌", accent, area.right());
        }
    }
}

/// Greedy word wrap by display width. Words longer than the width are
/// hard-broken.
fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let sep = usize::from(!current.is_empty());
        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // Hard-break an overlong word grapheme by grapheme.
            for grapheme in word.graphemes(true) {
                let gw = UnicodeWidthStr::width(grapheme);
                if current_width + gw > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += gw;
            }
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_words_respects_width() {
        assert_eq!(wrap_words("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_words("", 5), vec![""]);
    }

    #[test]
    fn wrap_words_hard_breaks_long_words() {
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn renders_title_and_message() {
        let alert = Alert::new("Disk almost full.")
            .title("Warning")
            .severity(AlertSeverity::Warning);
        let mut frame = Frame::new(30, 3);
        alert.render(Rect::new(0, 0, 30, 3), &mut frame);
        assert!(frame.buffer.row_text(0).contains("Warning"));
        assert!(frame.buffer.row_text(1).contains("Disk almost full."));
        assert_eq!(frame.buffer.get(0, 0).unwrap().ch, '▌');
        assert_eq!(frame.buffer.get(0, 1).unwrap().ch, '▌');
    }

    #[test]
    fn height_for_width_counts_wrapping() {
        let alert = Alert::new("one two three").title("T");
        // 2 columns of gutter, 7 of text -> 2 message rows + title
        assert_eq!(alert.height_for_width(9), 3);
    }

    #[test]
    fn clips_to_area() {
        let alert = Alert::new("a b c d e f g h i j");
        let mut frame = Frame::new(6, 2);
        alert.render(Rect::new(0, 0, 6, 2), &mut frame);
        // Only two rows rendered, no panic.
        assert_eq!(frame.buffer.get(0, 1).unwrap().ch, '▌');
    }

    #[test]
    fn too_narrow_is_noop() {
        let alert = Alert::new("hi");
        let mut frame = Frame::new(2, 1);
        alert.render(Rect::new(0, 0, 2, 1), &mut frame);
        assert!(frame.buffer.cells().iter().all(|c| c.is_empty()));
    }
}
