#![forbid(unsafe_code)]

//! Searchable list ("command") primitive.
//!
//! Filters a fixed set of textual items against free-text input and
//! emits an activation event when one is chosen. Items are identified
//! by their displayed text, and the activation text is lowercased
//! before it is emitted; consumers that need a stable identifier must
//! resolve the text back themselves (the combobox does exactly that).
//!
//! Filtering is a case-insensitive substring match preserving the
//! supplied order. No fuzzy scoring: the component contract is
//! "type-to-narrow", not "search engine".

use veneer_core::event::{KeyCode, KeyEvent};
use veneer_core::geometry::Rect;
use veneer_render::cell::PackedRgba;
use veneer_render::frame::Frame;
use veneer_style::Style;

use crate::{StatefulWidget, draw_text_span, fill_area};

/// Outcome of a key handled by the searchable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The user activated the item with this display text (lowercased).
    Activated(String),
    /// The user dismissed the list (Escape).
    Dismissed,
}

/// Visual styling for the list.
#[derive(Debug, Clone, Copy)]
pub struct CommandStyle {
    pub input: Style,
    pub item: Style,
    pub item_highlighted: Style,
    pub empty: Style,
}

impl Default for CommandStyle {
    fn default() -> Self {
        Self {
            input: Style::new().fg(PackedRgba::rgb(220, 220, 230)),
            item: Style::new().fg(PackedRgba::rgb(190, 190, 200)),
            item_highlighted: Style::new()
                .fg(PackedRgba::rgb(255, 255, 255))
                .bg(PackedRgba::rgb(50, 50, 75)),
            empty: Style::new().fg(PackedRgba::rgb(140, 140, 160)),
        }
    }
}

/// Mutable state: query text, highlight, scroll.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandState {
    query: String,
    highlighted: usize,
    scroll: usize,
}

impl CommandState {
    /// Fresh state: empty query, highlight on the first item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear query and highlight (used when a disclosure reopens).
    pub fn reset(&mut self) {
        self.query.clear();
        self.highlighted = 0;
        self.scroll = 0;
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Index of the highlighted row within the filtered results.
    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Indices into `items` that match the query, in supplied order.
    #[must_use]
    pub fn filtered_indices(&self, items: &[&str]) -> Vec<usize> {
        let needle = self.query.to_lowercase();
        items
            .iter()
            .enumerate()
            .filter(|(_, label)| needle.is_empty() || label.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Handle a key press against the supplied items.
    ///
    /// Returns an outcome when the user activated an item or dismissed
    /// the list; `None` when the key only edited or navigated.
    pub fn handle_key(&mut self, items: &[&str], key: &KeyEvent) -> Option<CommandOutcome> {
        match key.code {
            KeyCode::Escape => return Some(CommandOutcome::Dismissed),

            KeyCode::Enter => {
                let filtered = self.filtered_indices(items);
                if let Some(&idx) = filtered.get(self.highlighted) {
                    // The list primitive identifies items by display
                    // text and normalizes case on the way out.
                    return Some(CommandOutcome::Activated(items[idx].to_lowercase()));
                }
            }

            KeyCode::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }

            KeyCode::Down => {
                let count = self.filtered_indices(items).len();
                if count > 0 && self.highlighted < count - 1 {
                    self.highlighted += 1;
                }
            }

            KeyCode::Home => self.highlighted = 0,

            KeyCode::End => {
                let count = self.filtered_indices(items).len();
                self.highlighted = count.saturating_sub(1);
            }

            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    self.highlighted = 0;
                    self.scroll = 0;
                }
            }

            KeyCode::Char(c) if !key.ctrl() => {
                self.query.push(c);
                self.highlighted = 0;
                self.scroll = 0;
            }

            _ => {}
        }
        None
    }

    fn clamp_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.highlighted < self.scroll {
            self.scroll = self.highlighted;
        } else if self.highlighted >= self.scroll + visible_rows {
            self.scroll = self.highlighted + 1 - visible_rows;
        }
    }
}

/// The searchable list widget, rebuilt each render from its props.
#[derive(Debug, Clone)]
pub struct CommandList<'a> {
    items: &'a [&'a str],
    placeholder: &'a str,
    empty_text: &'a str,
    style: CommandStyle,
}

impl<'a> CommandList<'a> {
    /// Create a list over item display texts.
    #[must_use]
    pub fn new(items: &'a [&'a str]) -> Self {
        Self {
            items,
            placeholder: "Search...",
            empty_text: "No results.",
            style: CommandStyle::default(),
        }
    }

    /// Builder: input placeholder shown while the query is empty.
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

    /// Builder: visual styling.
    #[must_use]
    pub fn style(mut self, style: CommandStyle) -> Self {
        self.style = style;
        self
    }
}

impl StatefulWidget for CommandList<'_> {
    type State = CommandState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        // Input row.
        let input_area = area.rows(0, 1);
        fill_area(frame, input_area, self.style.input);
        let mut x = draw_text_span(frame, area.x, area.y, "> ", self.style.input, area.right());
        if state.query.is_empty() {
            draw_text_span(
                frame,
                x,
                area.y,
                self.placeholder,
                self.style.empty,
                area.right(),
            );
        } else {
            x = draw_text_span(frame, x, area.y, &state.query, self.style.input, area.right());
            frame.set_cursor(Some((x.min(area.right().saturating_sub(1)), area.y)));
        }

        // Item rows.
        let rows = area.height.saturating_sub(1) as usize;
        let filtered = state.filtered_indices(self.items);
        state.highlighted = state.highlighted.min(filtered.len().saturating_sub(1));
        state.clamp_scroll(rows);

        if filtered.is_empty() {
            if rows > 0 {
                draw_text_span(
                    frame,
                    area.x + 2,
                    area.y + 1,
                    self.empty_text,
                    self.style.empty,
                    area.right(),
                );
            }
            return;
        }

        for (row, &item_idx) in filtered.iter().skip(state.scroll).take(rows).enumerate() {
            let y = area.y + 1 + row as u16;
            let is_highlighted = state.scroll + row == state.highlighted;
            let style = if is_highlighted {
                self.style.item_highlighted
            } else {
                self.style.item
            };
            fill_area(frame, Rect::new(area.x, y, area.width, 1), style);
            let marker = if is_highlighted { "› " } else { "  " };
            let mx = draw_text_span(frame, area.x, y, marker, style, area.right());
            draw_text_span(frame, mx, y, self.items[item_idx], style, area.right());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    fn type_str(state: &mut CommandState, items: &[&str], s: &str) {
        for c in s.chars() {
            state.handle_key(items, &key(KeyCode::Char(c)));
        }
    }

    const ITEMS: &[&str] = &["Next.js", "Astro", "SvelteKit", "Nuxt"];

    #[test]
    fn empty_query_matches_all_in_order() {
        let state = CommandState::new();
        assert_eq!(state.filtered_indices(ITEMS), vec![0, 1, 2, 3]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut state = CommandState::new();
        type_str(&mut state, ITEMS, "ne");
        assert_eq!(state.filtered_indices(ITEMS), vec![0]);

        state.reset();
        type_str(&mut state, ITEMS, "T");
        // "Next.js", "Astro", "SvelteKit", "Nuxt" all contain a t/T.
        assert_eq!(state.filtered_indices(ITEMS), vec![0, 1, 2, 3]);
    }

    #[test]
    fn typing_resets_highlight() {
        let mut state = CommandState::new();
        state.handle_key(ITEMS, &key(KeyCode::Down));
        assert_eq!(state.highlighted(), 1);
        type_str(&mut state, ITEMS, "a");
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn navigation_clamps_to_filtered_len() {
        let mut state = CommandState::new();
        for _ in 0..10 {
            state.handle_key(ITEMS, &key(KeyCode::Down));
        }
        assert_eq!(state.highlighted(), ITEMS.len() - 1);
        state.handle_key(ITEMS, &key(KeyCode::Home));
        assert_eq!(state.highlighted(), 0);
        state.handle_key(ITEMS, &key(KeyCode::Up));
        assert_eq!(state.highlighted(), 0);
        state.handle_key(ITEMS, &key(KeyCode::End));
        assert_eq!(state.highlighted(), ITEMS.len() - 1);
    }

    #[test]
    fn enter_activates_lowercased_display_text() {
        let mut state = CommandState::new();
        state.handle_key(ITEMS, &key(KeyCode::Down));
        let outcome = state.handle_key(ITEMS, &key(KeyCode::Enter));
        assert_eq!(outcome, Some(CommandOutcome::Activated("astro".into())));
    }

    #[test]
    fn enter_with_no_results_is_consumed() {
        let mut state = CommandState::new();
        type_str(&mut state, ITEMS, "zzz");
        assert!(state.filtered_indices(ITEMS).is_empty());
        assert_eq!(state.handle_key(ITEMS, &key(KeyCode::Enter)), None);
    }

    #[test]
    fn escape_dismisses() {
        let mut state = CommandState::new();
        assert_eq!(
            state.handle_key(ITEMS, &key(KeyCode::Escape)),
            Some(CommandOutcome::Dismissed)
        );
    }

    #[test]
    fn backspace_edits_and_resets_highlight() {
        let mut state = CommandState::new();
        type_str(&mut state, ITEMS, "nu");
        assert_eq!(state.filtered_indices(ITEMS), vec![3]);
        state.handle_key(ITEMS, &key(KeyCode::Backspace));
        assert_eq!(state.query(), "n");
        // Backspace on an empty query changes nothing.
        state.handle_key(ITEMS, &key(KeyCode::Backspace));
        state.handle_key(ITEMS, &key(KeyCode::Backspace));
        assert_eq!(state.query(), "");
    }

    #[test]
    fn renders_placeholder_items_and_empty_state() {
        let mut state = CommandState::new();
        let list = CommandList::new(ITEMS)
            .placeholder("Select option...")
            .empty_text("No option found.");
        let mut frame = Frame::new(24, 6);
        list.render(Rect::new(0, 0, 24, 6), &mut frame, &mut state);
        assert!(frame.buffer.row_text(0).contains("Select option..."));
        assert!(frame.buffer.row_text(1).contains("Next.js"));
        assert!(frame.buffer.row_text(1).starts_with('›'));

        type_str(&mut state, ITEMS, "zzz");
        let mut frame = Frame::new(24, 6);
        list.render(Rect::new(0, 0, 24, 6), &mut frame, &mut state);
        assert!(frame.buffer.row_text(1).contains("No option found."));
    }

    #[test]
    fn scroll_follows_highlight_in_short_areas() {
        let mut state = CommandState::new();
        let list = CommandList::new(ITEMS);
        // One input row + two item rows.
        let area = Rect::new(0, 0, 24, 3);
        for _ in 0..3 {
            state.handle_key(ITEMS, &key(KeyCode::Down));
        }
        let mut frame = Frame::new(24, 3);
        list.render(area, &mut frame, &mut state);
        // Highlighted item (last) must be visible on the bottom row.
        assert!(frame.buffer.row_text(2).contains("Nuxt"));
        assert!(frame.buffer.row_text(2).starts_with('›'));
    }
}
