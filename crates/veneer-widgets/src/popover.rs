#![forbid(unsafe_code)]

//! Popover disclosure surface.
//!
//! A popover is a show/hide overlay region anchored below a one-row
//! trigger. The state machine is two states, `Closed ⇄ Open`:
//! user toggle in both directions, and any dismissal signal forces
//! `Open → Closed`. `Closed` is the initial and resting state. When the
//! owning widget is disabled, `Closed → Open` is refused and nothing
//! else changes.
//!
//! The popover does not render its content; composites (the combobox)
//! ask for the trigger/content areas and draw their own slots. This
//! keeps the disclosure mechanics in one place without turning the
//! widget into a general overlay engine.

use veneer_core::geometry::Rect;
use veneer_render::cell::PackedRgba;
use veneer_render::frame::Frame;
use veneer_style::Style;

use crate::{StatefulWidget, fill_area};

/// Open/closed state of a disclosure surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopoverState {
    open: bool,
}

impl PopoverState {
    /// Create in the `Closed` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the surface is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Request `Closed → Open`. Refused while `disabled`; returns
    /// whether the surface is open afterwards.
    pub fn request_open(&mut self, disabled: bool) -> bool {
        if !disabled {
            self.open = true;
        }
        self.open
    }

    /// Force `Open → Closed`. Idempotent; closing an already-closed
    /// surface changes nothing.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// User toggle. Opening is subject to the disabled guard; closing
    /// always succeeds. Returns whether the surface is open afterwards.
    pub fn toggle(&mut self, disabled: bool) -> bool {
        if self.open {
            self.close();
            false
        } else {
            self.request_open(disabled)
        }
    }

    /// A dismissal signal from outside (Escape, outside interaction).
    /// Same as [`close`](Self::close); named for call sites that relay
    /// collaborator signals.
    pub fn dismiss(&mut self) {
        self.close();
    }
}

/// Layout/backdrop for a trigger with an anchored content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Popover {
    content_height: u16,
}

impl Popover {
    /// A popover whose content region is `content_height` rows tall.
    #[must_use]
    pub fn new(content_height: u16) -> Self {
        Self { content_height }
    }

    /// The one-row trigger slot at the top of `area`.
    #[must_use]
    pub fn trigger_area(&self, area: Rect) -> Rect {
        area.rows(0, 1)
    }

    /// The content slot below the trigger while open, clipped to
    /// `area`. `None` while closed or when no rows remain.
    #[must_use]
    pub fn content_area(&self, area: Rect, state: &PopoverState) -> Option<Rect> {
        if !state.is_open() {
            return None;
        }
        let content = area.rows(1, self.content_height);
        (!content.is_empty()).then_some(content)
    }
}

impl StatefulWidget for Popover {
    type State = PopoverState;

    /// Paint the content backdrop while open. Slot content is drawn by
    /// the composite after this.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if let Some(content) = self.content_area(area, state) {
            fill_area(frame, content, Style::new().bg(PackedRgba::rgb(30, 30, 40)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_closed() {
        assert!(!PopoverState::new().is_open());
    }

    #[test]
    fn toggle_cycles() {
        let mut state = PopoverState::new();
        assert!(state.toggle(false));
        assert!(state.is_open());
        assert!(!state.toggle(false));
        assert!(!state.is_open());
    }

    #[test]
    fn disabled_refuses_open_but_not_close() {
        let mut state = PopoverState::new();
        assert!(!state.toggle(true));
        assert!(!state.is_open());

        state.request_open(false);
        // Disabling mid-flight still allows closing.
        assert!(!state.toggle(true));
        assert!(!state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = PopoverState::new();
        state.request_open(false);
        state.close();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn dismiss_forces_closed() {
        let mut state = PopoverState::new();
        state.request_open(false);
        state.dismiss();
        assert!(!state.is_open());
    }

    #[test]
    fn content_area_only_while_open() {
        let popover = Popover::new(4);
        let area = Rect::new(0, 0, 10, 6);
        let mut state = PopoverState::new();
        assert_eq!(popover.content_area(area, &state), None);

        state.request_open(false);
        assert_eq!(
            popover.content_area(area, &state),
            Some(Rect::new(0, 1, 10, 4))
        );
        assert_eq!(popover.trigger_area(area), Rect::new(0, 0, 10, 1));
    }

    #[test]
    fn content_area_clips_to_available_rows() {
        let popover = Popover::new(10);
        let mut state = PopoverState::new();
        state.request_open(false);
        assert_eq!(
            popover.content_area(Rect::new(0, 0, 10, 3), &state),
            Some(Rect::new(0, 1, 10, 2))
        );
        assert_eq!(popover.content_area(Rect::new(0, 0, 10, 1), &state), None);
    }
}
