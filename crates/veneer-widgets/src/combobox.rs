#![forbid(unsafe_code)]

//! Combobox component.
//!
//! Composes the [`Popover`](crate::popover::Popover) disclosure surface
//! with the [`CommandList`](crate::command::CommandList) searchable list
//! and owns the piece neither collaborator has: mapping the display text
//! the list activates back to the option's canonical value.
//!
//! Because the list identifies items by displayed (and case-normalized)
//! text, activation resolves by case-insensitive label lookup, first
//! match in supplied order. Re-activating the currently selected option
//! clears the selection; a label that matches nothing leaves the
//! selection untouched but still closes the disclosure. The owner is
//! notified through `on_change` with the new canonical value, the empty
//! string meaning "cleared", and the notification always precedes the
//! close.
//!
//! Selection can be uncontrolled (kept in [`ComboboxState`]) or
//! controlled (caller passes `value` each render, which takes
//! precedence). Both modes share the same notify-then-apply path.

use std::fmt;

use veneer_core::event::{Event, KeyCode};
use veneer_core::geometry::Rect;
use veneer_render::cell::PackedRgba;
use veneer_render::frame::Frame;
use veneer_style::Style;

use crate::command::{CommandList, CommandOutcome, CommandState, CommandStyle};
use crate::popover::{Popover, PopoverState};
use crate::{StatefulWidget, draw_text_span, fill_area};

/// Default trigger text while nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select option...";
/// Default empty-filter text.
pub const DEFAULT_EMPTY_TEXT: &str = "No option found.";

/// Rows of options shown at once before the list scrolls.
const MAX_VISIBLE_OPTIONS: usize = 8;

/// One selectable option: a canonical value and its display label.
///
/// `value` must be unique within the option set (caller invariant);
/// `label` does not have to be, and collisions resolve to the first
/// option in supplied order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComboboxOption {
    /// Stable, caller-meaningful identifier.
    pub value: String,
    /// Human-readable display text, used for search and reverse lookup.
    pub label: String,
}

impl ComboboxOption {
    /// Create an option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Event returned from [`Combobox::handle_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxEvent {
    /// The disclosure opened.
    Opened,
    /// The disclosure closed without a selection change.
    Closed,
    /// The selection changed to this canonical value (`""` = cleared).
    /// The `on_change` callback has already been invoked.
    Changed(String),
}

/// Owner-supplied change notification.
pub type ChangeCallback<'a> = Box<dyn FnMut(&str) + 'a>;

/// Mutable combobox state: disclosure, list, and uncontrolled selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComboboxState {
    popover: PopoverState,
    list: CommandState,
    selected: Option<String>,
}

impl ComboboxState {
    /// Fresh state: closed, empty query, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the disclosure is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    /// The uncontrolled selection. In controlled mode the caller's
    /// `value` prop wins over this.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

/// The combobox widget, rebuilt from props each render.
pub struct Combobox<'a> {
    options: &'a [ComboboxOption],
    value: Option<&'a str>,
    on_change: Option<ChangeCallback<'a>>,
    placeholder: &'a str,
    empty_text: &'a str,
    disabled: bool,
    icon: Option<char>,
    style: CommandStyle,
}

impl fmt::Debug for Combobox<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("options", &self.options.len())
            .field("value", &self.value)
            .field("has_on_change", &self.on_change.is_some())
            .field("placeholder", &self.placeholder)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl<'a> Combobox<'a> {
    /// Create a combobox over an option set.
    #[must_use]
    pub fn new(options: &'a [ComboboxOption]) -> Self {
        Self {
            options,
            value: None,
            on_change: None,
            placeholder: DEFAULT_PLACEHOLDER,
            empty_text: DEFAULT_EMPTY_TEXT,
            disabled: false,
            icon: None,
            style: CommandStyle::default(),
        }
    }

    /// Builder: controlled selection. When `Some`, it takes precedence
    /// over the state's own selection.
    #[must_use]
    pub fn value(mut self, value: Option<&'a str>) -> Self {
        self.value = value;
        self
    }

    /// Builder: change notification. Receives the new canonical value;
    /// the empty string means the selection was cleared.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Builder: trigger text while nothing is selected.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Builder: text shown when the filter yields nothing.
    #[must_use]
    pub fn empty_text(mut self, empty_text: &'a str) -> Self {
        self.empty_text = empty_text;
        self
    }

    /// Builder: suppress opening.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Builder: decorative icon on the trigger. No behavioral effect.
    #[must_use]
    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Builder: list styling.
    #[must_use]
    pub fn style(mut self, style: CommandStyle) -> Self {
        self.style = style;
        self
    }

    /// The selection in effect: the controlled `value` when supplied,
    /// else the state's own.
    #[must_use]
    pub fn effective_value<'s>(&'s self, state: &'s ComboboxState) -> Option<&'s str> {
        self.value.or(state.selected.as_deref())
    }

    /// Text for the trigger: the selected option's label, or the
    /// placeholder when nothing is selected or the selected value no
    /// longer exists in the option set. Never a raw value and never
    /// empty.
    #[must_use]
    pub fn display_text<'s>(&'s self, state: &'s ComboboxState) -> &'s str {
        match self.effective_value(state) {
            Some(value) => self
                .options
                .iter()
                .find(|o| o.value == value)
                .map_or(self.placeholder, |o| o.label.as_str()),
            None => self.placeholder,
        }
    }

    /// Handle an input event.
    ///
    /// Closed: Enter, Space, or Down opens the disclosure (refused when
    /// disabled). Open: keys go to the searchable list; activation runs
    /// the selection resolver, Escape dismisses.
    pub fn handle_event(&mut self, state: &mut ComboboxState, event: &Event) -> Option<ComboboxEvent> {
        let key = event.as_key_press()?;

        if !state.popover.is_open() {
            let wants_open = matches!(
                key.code,
                KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ')
            );
            if wants_open && state.popover.request_open(self.disabled) {
                state.list.reset();
                return Some(ComboboxEvent::Opened);
            }
            return None;
        }

        let labels: Vec<&str> = self.options.iter().map(|o| o.label.as_str()).collect();
        match state.list.handle_key(&labels, key)? {
            CommandOutcome::Dismissed => {
                state.popover.dismiss();
                Some(ComboboxEvent::Closed)
            }
            CommandOutcome::Activated(label) => self.resolve_and_apply(state, &label),
        }
    }

    /// The selection resolver: translate an activated display text into
    /// a canonical value, toggle the selection, notify, close.
    ///
    /// Side-effect order is part of the contract: the change callback
    /// fires before the disclosure closes, and exactly once per
    /// completed activation. The no-match branch changes no selection
    /// and fires no callback, but still closes.
    pub fn resolve_and_apply(
        &mut self,
        state: &mut ComboboxState,
        activated_label: &str,
    ) -> Option<ComboboxEvent> {
        let matched = self
            .options
            .iter()
            .find(|o| o.label.to_lowercase() == activated_label.to_lowercase());

        let Some(option) = matched else {
            // The list only activates labels it rendered, so a miss
            // means the caller broke the value/label invariants.
            // Degrade silently: keep the selection, still close.
            #[cfg(feature = "tracing")]
            tracing::debug!(label = activated_label, "activated label matched no option");
            state.popover.close();
            return Some(ComboboxEvent::Closed);
        };

        let new_selection = if self.effective_value(state) == Some(option.value.as_str()) {
            None
        } else {
            Some(option.value.clone())
        };

        if let Some(callback) = self.on_change.as_mut() {
            callback(new_selection.as_deref().unwrap_or(""));
        }
        state.selected = new_selection.clone();
        state.popover.close();

        Some(ComboboxEvent::Changed(new_selection.unwrap_or_default()))
    }

    fn list_height(&self) -> u16 {
        (self.options.len().min(MAX_VISIBLE_OPTIONS) as u16).saturating_add(1)
    }
}

impl StatefulWidget for Combobox<'_> {
    type State = ComboboxState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        let popover = Popover::new(self.list_height().min(area.height.saturating_sub(1)));
        let trigger = popover.trigger_area(area);

        let mut trigger_style = Style::new().fg(PackedRgba::rgb(200, 200, 210));
        if self.disabled {
            trigger_style = trigger_style.dim();
        } else if state.is_open() {
            trigger_style = trigger_style.bold();
        }
        fill_area(frame, trigger, trigger_style);

        let mut x = trigger.x;
        if let Some(icon) = self.icon {
            let icon_text = format!("{icon} ");
            x = draw_text_span(frame, x, trigger.y, &icon_text, trigger_style, trigger.right());
        }
        let chevron_x = trigger.right().saturating_sub(2);
        draw_text_span(
            frame,
            x,
            trigger.y,
            self.display_text(state),
            trigger_style,
            chevron_x,
        );
        let chevron = if state.is_open() { "▴" } else { "▾" };
        draw_text_span(frame, chevron_x + 1, trigger.y, chevron, trigger_style, trigger.right());

        popover.render(area, frame, &mut state.popover);
        if let Some(content) = popover.content_area(area, &state.popover) {
            let labels: Vec<&str> = self.options.iter().map(|o| o.label.as_str()).collect();
            CommandList::new(&labels)
                .placeholder(self.placeholder)
                .empty_text(self.empty_text)
                .style(self.style)
                .render(content, frame, &mut state.list);
        }
    }
}
