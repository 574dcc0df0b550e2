#![forbid(unsafe_code)]

//! Badge variants side by side.

use veneer_core::geometry::Rect;
use veneer_render::frame::Frame;
use veneer_style::Theme;
use veneer_widgets::Widget;
use veneer_widgets::badge::{Badge, BadgeVariant};

use crate::chrome::draw_text;

const SAMPLES: [(&str, BadgeVariant); 5] = [
    ("default", BadgeVariant::Neutral),
    ("stable", BadgeVariant::Success),
    ("beta", BadgeVariant::Warning),
    ("deprecated", BadgeVariant::Error),
    ("new", BadgeVariant::Info),
];

/// Static badge gallery.
#[derive(Debug, Default)]
pub struct BadgesScreen;

impl BadgesScreen {
    pub fn render(&self, area: Rect, frame: &mut Frame, theme: &Theme) {
        if area.height < 2 {
            return;
        }
        draw_text(
            frame,
            area.x + 1,
            area.y,
            "Every badge variant",
            theme.muted_style(),
        );
        let mut x = area.x + 1;
        let y = area.y + 2;
        for (label, variant) in SAMPLES {
            let badge = Badge::new(label).variant(variant);
            let width = badge.width().min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            badge.render(Rect::new(x, y, width, 1), frame);
            x += width + 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_sample_labels() {
        let mut frame = Frame::new(60, 3);
        BadgesScreen.render(Rect::new(0, 0, 60, 3), &mut frame, &Theme::dark());
        let row = frame.buffer.row_text(2);
        assert!(row.contains("stable"));
        assert!(row.contains("deprecated"));
    }
}
