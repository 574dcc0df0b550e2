#![forbid(unsafe_code)]

//! Alert severities stacked vertically.

use veneer_core::geometry::Rect;
use veneer_render::frame::Frame;
use veneer_style::Theme;
use veneer_widgets::Widget;
use veneer_widgets::alert::{Alert, AlertSeverity};

use crate::chrome::draw_text;

const SAMPLES: [(&str, &str, AlertSeverity); 4] = [
    ("Heads up", "You can add components to your app using the CLI.", AlertSeverity::Info),
    ("Saved", "Your changes have been written to disk.", AlertSeverity::Success),
    (
        "Low disk space",
        "Less than one gigabyte remains on this volume. Consider removing unused files.",
        AlertSeverity::Warning,
    ),
    ("Sync failed", "The remote rejected the last push.", AlertSeverity::Error),
];

/// Static alert gallery.
#[derive(Debug, Default)]
pub struct AlertsScreen;

impl AlertsScreen {
    pub fn render(&self, area: Rect, frame: &mut Frame, theme: &Theme) {
        if area.height < 2 {
            return;
        }
        draw_text(
            frame,
            area.x + 1,
            area.y,
            "Every alert severity",
            theme.muted_style(),
        );
        let mut y = area.y + 2;
        for (title, message, severity) in SAMPLES {
            let alert = Alert::new(message).title(title).severity(severity);
            let height = alert
                .height_for_width(area.width)
                .min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            alert.render(Rect::new(area.x + 1, y, area.width.saturating_sub(2), height), frame);
            y += height + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_titles_in_order() {
        let mut frame = Frame::new(60, 16);
        AlertsScreen.render(Rect::new(0, 0, 60, 16), &mut frame, &Theme::dark());
        let text: String = (0..16).map(|y| frame.buffer.row_text(y)).collect();
        assert!(text.contains("Heads up"));
        assert!(text.contains("Sync failed"));
    }
}
