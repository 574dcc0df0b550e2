#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! All Veneer widgets consume these types rather than raw backend events,
//! so widget logic can be driven synthetically in tests. Everything
//! derives `Clone` and `PartialEq` for pattern matching and assertions.
//!
//! `KeyEventKind` defaults to `Press` when the terminal can't distinguish
//! press/repeat/release.

use bitflags::bitflags;
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// A tick from the runtime's fixed interval.
    ///
    /// Drives time-based behavior (toast expiry, spinners) without any
    /// widget reading the wall clock itself.
    Tick,
}

impl Event {
    /// Convert a crossterm event into a Veneer [`Event`].
    ///
    /// Returns `None` for event kinds Veneer does not model (mouse,
    /// focus, paste); the components are keyboard-driven.
    #[must_use]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) => map_key_event(key).map(Event::Key),
            cte::Event::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }

    /// The contained key event, if this is a key press.
    #[must_use]
    pub fn as_key_press(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// Press, repeat, or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with no modifiers and `Press` kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Builder: set modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Builder: set the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Whether Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Whether Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    /// Enter/Return.
    Enter,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Tab.
    Tab,
    /// Shift+Tab (back-tab).
    BackTab,
    /// Delete.
    Delete,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Function key (F1-F24).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is being held (repeat event).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

fn map_key_event(event: cte::KeyEvent) -> Option<KeyEvent> {
    let code = map_key_code(event.code)?;
    Some(KeyEvent {
        code,
        modifiers: map_modifiers(event.modifiers),
        kind: map_key_kind(event.kind),
    })
}

fn map_key_code(code: cte::KeyCode) -> Option<KeyCode> {
    Some(match code {
        cte::KeyCode::Char(c) => KeyCode::Char(c),
        cte::KeyCode::Enter => KeyCode::Enter,
        cte::KeyCode::Esc => KeyCode::Escape,
        cte::KeyCode::Backspace => KeyCode::Backspace,
        cte::KeyCode::Tab => KeyCode::Tab,
        cte::KeyCode::BackTab => KeyCode::BackTab,
        cte::KeyCode::Delete => KeyCode::Delete,
        cte::KeyCode::Home => KeyCode::Home,
        cte::KeyCode::End => KeyCode::End,
        cte::KeyCode::PageUp => KeyCode::PageUp,
        cte::KeyCode::PageDown => KeyCode::PageDown,
        cte::KeyCode::Up => KeyCode::Up,
        cte::KeyCode::Down => KeyCode::Down,
        cte::KeyCode::Left => KeyCode::Left,
        cte::KeyCode::Right => KeyCode::Right,
        cte::KeyCode::F(n) => KeyCode::F(n),
        _ => return None,
    })
}

fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    out
}

fn map_key_kind(kind: cte::KeyEventKind) -> KeyEventKind {
    match kind {
        cte::KeyEventKind::Press => KeyEventKind::Press,
        cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
        cte::KeyEventKind::Release => KeyEventKind::Release,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_builders() {
        let ev = KeyEvent::new(KeyCode::Char('x'))
            .with_modifiers(Modifiers::CTRL)
            .with_kind(KeyEventKind::Repeat);
        assert!(ev.ctrl());
        assert!(!ev.shift());
        assert!(ev.is_char('x'));
        assert_eq!(ev.kind, KeyEventKind::Repeat);
    }

    #[test]
    fn as_key_press_filters_releases() {
        let press = Event::Key(KeyEvent::new(KeyCode::Enter));
        let release = Event::Key(KeyEvent::new(KeyCode::Enter).with_kind(KeyEventKind::Release));
        assert!(press.as_key_press().is_some());
        assert!(release.as_key_press().is_none());
        assert!(Event::Tick.as_key_press().is_none());
    }

    #[test]
    fn crossterm_key_maps() {
        let ct = cte::Event::Key(cte::KeyEvent::new(
            cte::KeyCode::Char('a'),
            cte::KeyModifiers::CONTROL,
        ));
        let ev = Event::from_crossterm(ct).unwrap();
        let key = ev.as_key_press().unwrap();
        assert!(key.is_char('a'));
        assert!(key.ctrl());
    }

    #[test]
    fn crossterm_resize_maps() {
        let ev = Event::from_crossterm(cte::Event::Resize(80, 24)).unwrap();
        assert_eq!(
            ev,
            Event::Resize {
                width: 80,
                height: 24
            }
        );
    }

    #[test]
    fn crossterm_unmodeled_events_drop() {
        assert_eq!(Event::from_crossterm(cte::Event::FocusGained), None);
    }
}
