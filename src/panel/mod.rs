//! Interactive panel: length slider, charset toggles, clipboard copy.

mod draw;
mod state;

pub use state::{Action, Panel, Status};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read};

use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, print_error, reset_terminal};

/// Run the interactive panel until the user quits.
pub fn run() {
    reset_terminal();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        print_error(&format!("Failed to load settings: {}", e));
        Settings::default()
    });

    let mut panel = Panel::new(settings);
    panel.regenerate();

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            print_error(&format!("Failed to enter raw mode: {}", e));
            return;
        }
    };

    clear();
    draw::frame(&panel);

    loop {
        match read() {
            Ok(Event::Key(key)) => {
                let Some(action) = map_key(key) else { continue };
                if action == Action::Quit {
                    break;
                }
                panel.apply(action);
            }
            Ok(Event::Resize(..)) => {}
            Ok(_) => continue,
            Err(_) => break,
        }

        clear();
        draw::frame(&panel);
    }

    drop(_guard);
    clear();
    reset_terminal();
}

fn map_key(key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Left => Some(Action::Narrow(1)),
        KeyCode::Right => Some(Action::Widen(1)),
        KeyCode::Down => Some(Action::Narrow(10)),
        KeyCode::Up => Some(Action::Widen(10)),
        KeyCode::Char('d') => Some(Action::ToggleDigits),
        KeyCode::Char('s') => Some(Action::ToggleSymbols),
        KeyCode::Enter | KeyCode::Char('r') => Some(Action::Regenerate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('w') => Some(Action::Save),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(map_key(press(KeyCode::Left)), Some(Action::Narrow(1)));
        assert_eq!(map_key(press(KeyCode::Right)), Some(Action::Widen(1)));
        assert_eq!(map_key(press(KeyCode::Up)), Some(Action::Widen(10)));
        assert_eq!(map_key(press(KeyCode::Char('d'))), Some(Action::ToggleDigits));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(Action::ToggleSymbols));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::Regenerate));
        assert_eq!(map_key(press(KeyCode::Char('c'))), Some(Action::Copy));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }
}
