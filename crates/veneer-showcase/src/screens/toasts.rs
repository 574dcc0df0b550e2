#![forbid(unsafe_code)]

//! Toast playground. The stack itself lives on the app model so
//! toasts raised anywhere stay visible across screens; this screen
//! only maps keys to stack operations.

use std::time::{Duration, Instant};

use veneer_core::event::{KeyCode, KeyEvent};
use veneer_core::geometry::Rect;
use veneer_render::frame::Frame;
use veneer_style::Theme;
use veneer_widgets::toast::{Toast, ToastSeverity, ToastStack};

use crate::chrome::draw_text;

/// Key reference and toast spawning.
#[derive(Debug, Default)]
pub struct ToastsScreen;

impl ToastsScreen {
    /// Handle a key against the shared stack. Returns whether the key
    /// was consumed.
    pub fn handle_key(&mut self, stack: &mut ToastStack, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Char('i') => {
                stack.push(Toast::new("For your information.").title("Note"), now);
            }
            KeyCode::Char('s') => {
                stack.push(
                    Toast::new("Component added.")
                        .title("Success")
                        .severity(ToastSeverity::Success),
                    now,
                );
            }
            KeyCode::Char('e') => {
                stack.push(
                    Toast::new("Something went wrong.")
                        .title("Error")
                        .severity(ToastSeverity::Error),
                    now,
                );
            }
            KeyCode::Char('w') => {
                stack.push(
                    Toast::new("Check your configuration.")
                        .title("Warning")
                        .severity(ToastSeverity::Warning)
                        .duration(Duration::from_secs(10)),
                    now,
                );
            }
            KeyCode::Char('p') => {
                stack.push(Toast::new("Pinned until dismissed.").persistent(), now);
            }
            KeyCode::Char('x') => stack.dismiss_newest(),
            _ => return false,
        }
        true
    }

    pub fn render(&self, area: Rect, frame: &mut Frame, theme: &Theme, stack: &ToastStack) {
        if area.height < 2 {
            return;
        }
        let lines = [
            "i info · s success · w warning · e error",
            "p persistent · x dismiss newest",
        ];
        for (i, line) in lines.iter().enumerate() {
            draw_text(frame, area.x + 1, area.y + i as u16, line, theme.muted_style());
        }
        let status = format!("{} queued", stack.len());
        draw_text(frame, area.x + 1, area.y + 3, &status, theme.text_style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_spawn_and_dismiss() {
        let mut screen = ToastsScreen;
        let mut stack = ToastStack::new();
        let now = Instant::now();
        assert!(screen.handle_key(&mut stack, KeyEvent::new(KeyCode::Char('s')), now));
        assert!(screen.handle_key(&mut stack, KeyEvent::new(KeyCode::Char('p')), now));
        assert_eq!(stack.len(), 2);
        assert!(screen.handle_key(&mut stack, KeyEvent::new(KeyCode::Char('x')), now));
        assert_eq!(stack.len(), 1);
        assert!(!screen.handle_key(&mut stack, KeyEvent::new(KeyCode::Char('z')), now));
    }
}
