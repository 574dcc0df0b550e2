//! Drive the showcase headlessly and check the captured frames.

use veneer_core::event::{Event, KeyCode, KeyEvent};
use veneer_harness::{buffer_checksum, buffer_to_text};
use veneer_runtime::ProgramSimulator;
use veneer_showcase::app::{AppModel, ScreenId};
use veneer_style::Theme;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

#[test]
fn every_screen_renders_its_title_content() {
    let mut sim = ProgramSimulator::new(AppModel::new(Theme::dark()));
    sim.init();

    let expectations = [
        ('1', "Solid"),
        ('2', "stable"),
        ('3', "Heads up"),
        ('4', "i info"),
        ('5', "Select option..."),
    ];
    for (key, needle) in expectations {
        sim.inject_event(press(KeyCode::Char(key)));
        let buffer = sim.capture_frame(80, 24);
        let text = buffer_to_text(buffer);
        assert!(text.contains(needle), "screen {key} missing {needle:?}");
    }
}

#[test]
fn idle_frames_are_stable() {
    let mut sim = ProgramSimulator::new(AppModel::new(Theme::dark()));
    sim.init();
    let first = buffer_checksum(sim.capture_frame(80, 24));
    let second = buffer_checksum(sim.capture_frame(80, 24));
    assert_eq!(first, second);
}

#[test]
fn combobox_selection_toast_shows_in_frame() {
    let mut sim = ProgramSimulator::new(AppModel::new(Theme::dark()));
    sim.init();
    sim.inject_event(press(KeyCode::Char('5')));
    sim.inject_event(press(KeyCode::Enter));
    for c in "remix".chars() {
        sim.inject_event(press(KeyCode::Char(c)));
    }
    sim.inject_event(press(KeyCode::Enter));
    assert_eq!(sim.model().current_screen, ScreenId::Combobox);

    let text = buffer_to_text(sim.capture_frame(80, 24));
    assert!(text.contains("Selected remix."));
    assert!(text.contains("change: remix"));
}
