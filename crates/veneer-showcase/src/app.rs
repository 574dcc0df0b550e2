#![forbid(unsafe_code)]

//! The showcase application model.

use std::time::{Duration, Instant};

use tracing::debug;
use veneer_core::event::{Event, KeyCode, KeyEvent};
use veneer_core::geometry::Rect;
use veneer_render::frame::Frame;
use veneer_runtime::{Cmd, Model};
use veneer_style::Theme;
use veneer_widgets::Widget;
use veneer_widgets::combobox::ComboboxEvent;
use veneer_widgets::toast::{Toast, ToastSeverity, ToastStack};

use crate::chrome;
use crate::screens::{AlertsScreen, BadgesScreen, ButtonsScreen, ComboboxScreen, ToastsScreen};

/// How often the app ticks for toast expiry.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// The catalog screens, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Buttons,
    Badges,
    Alerts,
    Toasts,
    Combobox,
}

impl ScreenId {
    /// All screens in display order.
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Buttons,
        ScreenId::Badges,
        ScreenId::Alerts,
        ScreenId::Toasts,
        ScreenId::Combobox,
    ];

    /// Header label.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Buttons => "Buttons",
            ScreenId::Badges => "Badges",
            ScreenId::Alerts => "Alerts",
            ScreenId::Toasts => "Toasts",
            ScreenId::Combobox => "Combobox",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application messages.
pub enum Msg {
    Key(KeyEvent),
    Tick,
    Other,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        if matches!(event, Event::Tick) {
            return Msg::Tick;
        }
        match event.as_key_press() {
            Some(key) => Msg::Key(*key),
            None => Msg::Other,
        }
    }
}

/// Top-level model: active screen, theme, shared toast stack, and the
/// per-screen states.
pub struct AppModel {
    pub current_screen: ScreenId,
    pub theme: Theme,
    pub toasts: ToastStack,
    /// Auto-quit after this long (0 = disabled), for scripted runs.
    pub exit_after_ms: u64,
    started: Instant,
    buttons: ButtonsScreen,
    badges: BadgesScreen,
    alerts: AlertsScreen,
    toasts_screen: ToastsScreen,
    combobox: ComboboxScreen,
}

impl AppModel {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            current_screen: ScreenId::Buttons,
            theme,
            toasts: ToastStack::new(),
            exit_after_ms: 0,
            started: Instant::now(),
            buttons: ButtonsScreen::default(),
            badges: BadgesScreen,
            alerts: AlertsScreen,
            toasts_screen: ToastsScreen,
            combobox: ComboboxScreen::default(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        // An open picker gets first claim, so typed digits filter
        // instead of switching screens.
        if self.current_screen == ScreenId::Combobox && self.combobox.is_open() {
            self.route_to_combobox(key);
            return Cmd::none();
        }

        match key.code {
            KeyCode::Char('q') => return Cmd::quit(),
            KeyCode::Char('c') if key.ctrl() => return Cmd::quit(),
            KeyCode::Tab => {
                self.current_screen = self.current_screen.next();
                return Cmd::none();
            }
            KeyCode::BackTab => {
                self.current_screen = self.current_screen.prev();
                return Cmd::none();
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as usize) - ('1' as usize);
                if let Some(id) = ScreenId::ALL.get(idx) {
                    self.current_screen = *id;
                }
                return Cmd::none();
            }
            _ => {}
        }

        match self.current_screen {
            ScreenId::Buttons => self.buttons.handle_key(key),
            ScreenId::Badges | ScreenId::Alerts => {}
            ScreenId::Toasts => {
                self.toasts_screen
                    .handle_key(&mut self.toasts, key, Instant::now());
            }
            ScreenId::Combobox => self.route_to_combobox(key),
        }
        Cmd::none()
    }

    fn route_to_combobox(&mut self, key: KeyEvent) {
        let event = Event::Key(key);
        if let Some(ComboboxEvent::Changed(value)) = self.combobox.handle_event(&event) {
            debug!(%value, "selection changed");
            let toast = if value.is_empty() {
                Toast::new("Selection cleared.")
            } else {
                Toast::new(format!("Selected {value}.")).severity(ToastSeverity::Success)
            };
            self.toasts.push(toast, Instant::now());
        }
    }
}

impl Model for AppModel {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        Cmd::tick(TICK_INTERVAL)
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::Tick => {
                let now = Instant::now();
                self.toasts.tick(now);
                if self.exit_after_ms > 0
                    && now.duration_since(self.started) >= Duration::from_millis(self.exit_after_ms)
                {
                    return Cmd::quit();
                }
                Cmd::tick(TICK_INTERVAL)
            }
            Msg::Other => Cmd::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = Rect::new(0, 0, frame.width(), frame.height());
        if area.is_empty() {
            return;
        }
        chrome::draw_header(frame, area.rows(0, 1), self.current_screen, &self.theme);
        let body = Rect::new(
            area.x,
            area.y + 2,
            area.width,
            area.height.saturating_sub(3),
        );
        match self.current_screen {
            ScreenId::Buttons => self.buttons.render(body, frame, &self.theme),
            ScreenId::Badges => self.badges.render(body, frame, &self.theme),
            ScreenId::Alerts => self.alerts.render(body, frame, &self.theme),
            ScreenId::Toasts => self.toasts_screen.render(body, frame, &self.theme, &self.toasts),
            ScreenId::Combobox => self.combobox.render(body, frame, &self.theme),
        }
        chrome::draw_footer(frame, area.rows(area.height.saturating_sub(1), 1), &self.theme);

        // Toast overlay claims the top-right corner, drawn last.
        let overlay_width = area.width.min(44);
        let overlay = Rect::new(
            area.right().saturating_sub(overlay_width),
            area.y + 1,
            overlay_width,
            area.height.saturating_sub(1),
        );
        self.toasts.render(overlay, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_runtime::ProgramSimulator;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    #[test]
    fn tab_cycles_through_all_screens() {
        let mut id = ScreenId::Buttons;
        for _ in 0..ScreenId::ALL.len() {
            id = id.next();
        }
        assert_eq!(id, ScreenId::Buttons);
        assert_eq!(ScreenId::Buttons.prev(), ScreenId::Combobox);
    }

    #[test]
    fn number_keys_jump_to_screens() {
        let mut sim = ProgramSimulator::new(AppModel::new(Theme::dark()));
        sim.init();
        sim.inject_event(press(KeyCode::Char('4')));
        assert_eq!(sim.model().current_screen, ScreenId::Toasts);
    }

    #[test]
    fn quit_key_stops_the_program() {
        let mut sim = ProgramSimulator::new(AppModel::new(Theme::dark()));
        sim.init();
        sim.inject_event(press(KeyCode::Char('q')));
        assert!(!sim.is_running());
    }

    #[test]
    fn open_picker_swallows_digit_keys() {
        let mut sim = ProgramSimulator::new(AppModel::new(Theme::dark()));
        sim.init();
        sim.inject_event(press(KeyCode::Char('5')));
        assert_eq!(sim.model().current_screen, ScreenId::Combobox);
        sim.inject_event(press(KeyCode::Enter));
        sim.inject_event(press(KeyCode::Char('1')));
        // Still on the combobox screen; the digit went to the filter.
        assert_eq!(sim.model().current_screen, ScreenId::Combobox);
    }

    #[test]
    fn selection_raises_a_toast() {
        let mut sim = ProgramSimulator::new(AppModel::new(Theme::dark()));
        sim.init();
        sim.inject_event(press(KeyCode::Char('5')));
        sim.inject_event(press(KeyCode::Enter));
        for c in "astro".chars() {
            sim.inject_event(press(KeyCode::Char(c)));
        }
        sim.inject_event(press(KeyCode::Enter));
        assert_eq!(sim.model().toasts.len(), 1);
    }

    #[test]
    fn view_renders_header_and_body() {
        let mut sim = ProgramSimulator::new(AppModel::new(Theme::dark()));
        sim.init();
        let buffer = sim.capture_frame(80, 24);
        let header = buffer.row_text(0);
        assert!(header.contains("1 Buttons"));
        assert!(header.contains("5 Combobox"));
    }
}
