#![forbid(unsafe_code)]

//! Combobox lab: a searchable framework picker with a change log and a
//! controlled-mode toggle.

use veneer_core::event::Event;
use veneer_core::geometry::Rect;
use veneer_render::frame::Frame;
use veneer_style::Theme;
use veneer_widgets::StatefulWidget;
use veneer_widgets::combobox::{Combobox, ComboboxEvent, ComboboxOption, ComboboxState};

use crate::chrome::draw_text;

const LOG_ROWS: usize = 3;

/// Combobox demo owning its option set, state, and a change log.
#[derive(Debug)]
pub struct ComboboxScreen {
    options: Vec<ComboboxOption>,
    state: ComboboxState,
    /// When set, the picker runs controlled: this mirror is passed as
    /// the `value` prop and updated from change events.
    controlled: bool,
    mirror: Option<String>,
    changes: Vec<String>,
}

impl Default for ComboboxScreen {
    fn default() -> Self {
        Self {
            options: vec![
                ComboboxOption::new("next.js", "Next.js"),
                ComboboxOption::new("sveltekit", "SvelteKit"),
                ComboboxOption::new("nuxt.js", "Nuxt.js"),
                ComboboxOption::new("remix", "Remix"),
                ComboboxOption::new("astro", "Astro"),
            ],
            state: ComboboxState::new(),
            controlled: false,
            mirror: None,
            changes: Vec::new(),
        }
    }
}

impl ComboboxScreen {
    /// Whether the picker's disclosure is open (it then gets first
    /// claim on key events).
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Forward an event to the picker, recording selection changes.
    /// `c` while closed flips controlled mode.
    pub fn handle_event(&mut self, event: &Event) -> Option<ComboboxEvent> {
        if !self.is_open()
            && let Some(key) = event.as_key_press()
            && key.is_char('c')
        {
            self.controlled = !self.controlled;
            self.mirror = self.state.selected().map(str::to_string);
            return None;
        }

        let controlled = self.controlled;
        let mirror = self.mirror.clone();
        let result = {
            let Self { options, state, .. } = self;
            let mut combobox = Combobox::new(options);
            if controlled {
                combobox = combobox.value(mirror.as_deref());
            }
            combobox.handle_event(state, event)
        };
        if let Some(ComboboxEvent::Changed(value)) = &result {
            if self.controlled {
                self.mirror = (!value.is_empty()).then(|| value.clone());
            }
            self.changes.push(if value.is_empty() {
                "(cleared)".to_string()
            } else {
                value.clone()
            });
        }
        result
    }

    /// Render from shared state; scroll clamping is recomputed per
    /// frame so a scratch copy of the state is enough here.
    pub fn render(&self, area: Rect, frame: &mut Frame, theme: &Theme) {
        if area.height < 2 {
            return;
        }
        draw_text(
            frame,
            area.x + 1,
            area.y,
            "Enter/Space open · type to filter · Esc close · c controlled mode",
            theme.muted_style(),
        );
        let mode = if self.controlled {
            "mode: controlled"
        } else {
            "mode: uncontrolled"
        };
        draw_text(frame, area.x + 1, area.y + 1, mode, theme.accent_style());

        let picker_area = Rect::new(
            area.x + 1,
            area.y + 3,
            area.width.saturating_sub(2).min(30),
            area.height.saturating_sub(3),
        );
        let mut state = self.state.clone();
        let combobox = Combobox::new(&self.options);
        let combobox = if self.controlled {
            combobox.value(self.mirror.as_deref())
        } else {
            combobox
        };
        combobox.render(picker_area, frame, &mut state);

        // Last few change events, newest at the bottom.
        let start = self.changes.len().saturating_sub(LOG_ROWS);
        for (i, value) in self.changes[start..].iter().enumerate() {
            let y = area
                .bottom()
                .saturating_sub((self.changes.len() - start - i) as u16);
            if y <= picker_area.y {
                break;
            }
            let line = format!("change: {value}");
            draw_text(frame, area.x + 1, y, &line, theme.text_style());
        }
    }
}
