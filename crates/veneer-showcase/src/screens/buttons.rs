#![forbid(unsafe_code)]

//! Button variants with keyboard focus.

use veneer_core::event::{KeyCode, KeyEvent};
use veneer_core::geometry::Rect;
use veneer_render::frame::Frame;
use veneer_style::Theme;
use veneer_widgets::Widget;
use veneer_widgets::button::{Button, ButtonVariant};

use crate::chrome::draw_text;

const VARIANTS: [(&str, ButtonVariant); 4] = [
    ("Solid", ButtonVariant::Solid),
    ("Outline", ButtonVariant::Outline),
    ("Ghost", ButtonVariant::Ghost),
    ("Destructive", ButtonVariant::Destructive),
];

/// Button gallery with a movable focus and a disabled toggle.
#[derive(Debug, Default)]
pub struct ButtonsScreen {
    focused: usize,
    disabled: bool,
}

impl ButtonsScreen {
    /// Handle a key. Left/Right move focus, `d` toggles disabled.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.focused = self.focused.saturating_sub(1);
            }
            KeyCode::Right => {
                self.focused = (self.focused + 1).min(VARIANTS.len() - 1);
            }
            KeyCode::Char('d') => self.disabled = !self.disabled,
            _ => {}
        }
    }

    pub fn render(&self, area: Rect, frame: &mut Frame, theme: &Theme) {
        if area.height < 2 {
            return;
        }
        draw_text(
            frame,
            area.x + 1,
            area.y,
            "Left/Right focus · d toggle disabled",
            theme.muted_style(),
        );
        let mut x = area.x + 1;
        let y = area.y + 2;
        for (i, (label, variant)) in VARIANTS.iter().enumerate() {
            let button = Button::new(label)
                .variant(*variant)
                .focused(i == self.focused)
                .disabled(self.disabled);
            let width = button.width().min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            button.render(Rect::new(x, y, width, 1), frame);
            x += width + 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_moves_and_clamps() {
        let mut screen = ButtonsScreen::default();
        screen.handle_key(KeyEvent::new(KeyCode::Left));
        assert_eq!(screen.focused, 0);
        for _ in 0..10 {
            screen.handle_key(KeyEvent::new(KeyCode::Right));
        }
        assert_eq!(screen.focused, VARIANTS.len() - 1);
    }

    #[test]
    fn renders_all_variants() {
        let screen = ButtonsScreen::default();
        let mut frame = Frame::new(70, 4);
        screen.render(Rect::new(0, 0, 70, 4), &mut frame, &Theme::dark());
        let row = frame.buffer.row_text(2);
        assert!(row.contains("Solid"));
        assert!(row.contains("Destructive"));
    }
}
