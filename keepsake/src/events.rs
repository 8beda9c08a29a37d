//! Keyboard event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Overlay};
use crate::screens;
use crate::ui::widgets::settings_panel;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event, updating application state.
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Ctrl-C always quits, overlay or not.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return EventResult::Quit;
    }

    match app.overlay() {
        Some(Overlay::Help) => {
            app.close_overlay();
            EventResult::Continue
        }
        Some(Overlay::Settings { selected }) => handle_settings_key(app, key, selected),
        None => handle_normal_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return EventResult::Quit,
        KeyCode::Char('?') | KeyCode::F(1) => app.toggle_help(),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('m') => app.toggle_music(),
        KeyCode::Char('h') | KeyCode::Home => app.navigate(keepsake_core::ScreenId::Home),
        KeyCode::Char('a') => app.navigate(keepsake_core::ScreenId::Achievements),
        KeyCode::Tab => app.cycle_screen(true),
        KeyCode::BackTab => app.cycle_screen(false),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).unwrap() as usize - 1;
            let destinations = screens::content(app.session.current_screen()).destinations;
            match destinations.get(index) {
                Some(&dest) => app.navigate(dest),
                None => app.set_status(format!("No destination {} here", c)),
            }
        }
        _ => {}
    }
    EventResult::Continue
}

fn handle_settings_key(app: &mut App, key: KeyEvent, selected: usize) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('s') => app.close_overlay(),
        KeyCode::Char('j') | KeyCode::Down => {
            app.set_overlay(Overlay::Settings {
                selected: (selected + 1) % settings_panel::FIELD_COUNT,
            });
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.set_overlay(Overlay::Settings {
                selected: (selected + settings_panel::FIELD_COUNT - 1)
                    % settings_panel::FIELD_COUNT,
            });
        }
        KeyCode::Char('h')
        | KeyCode::Char('l')
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Enter
        | KeyCode::Char(' ') => {
            let mut settings = app.session.settings().clone();
            settings_panel::cycle(&mut settings, selected);
            let value = settings_panel::value_label(&settings, selected);
            app.apply_settings(settings);
            app.set_status(format!(
                "{}: {}",
                settings_panel::field_label(selected),
                value
            ));
        }
        _ => {}
    }
    EventResult::Continue
}
