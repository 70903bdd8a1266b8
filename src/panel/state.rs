//! Panel state and event handling.
//!
//! The panel owns the configuration, the last generated password, and the
//! clipboard connection. Every configuration change regenerates the password
//! synchronously before the next frame is drawn.

use zeroize::Zeroize;

use crate::clipboard::Clipboard;
use crate::pass;
use crate::settings::{self, Settings};

/// One user intent, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Widen(usize),
    Narrow(usize),
    ToggleDigits,
    ToggleSymbols,
    Regenerate,
    Copy,
    Save,
    Quit,
}

/// Feedback shown after the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Copied,
    Saved,
    Failed(String),
}

pub struct Panel {
    pub settings: Settings,
    pub password: String,
    pub status: Status,
    clipboard: Option<Clipboard>,
}

impl Panel {
    /// The slider range applies from the start: lengths loaded from disk are
    /// clamped before first use.
    pub fn new(mut settings: Settings) -> Self {
        settings.pass_length = settings::clamp_length(settings.pass_length);
        Self {
            settings,
            password: String::new(),
            status: Status::Idle,
            clipboard: None,
        }
    }

    /// Re-run generation with the current settings, replacing (and zeroizing)
    /// the displayed password.
    pub fn regenerate(&mut self) {
        match pass::generate(&self.settings) {
            Ok(pass) => {
                self.password.zeroize();
                self.password = pass;
            }
            Err(e) => self.status = Status::Failed(e.to_string()),
        }
    }

    /// Apply one action. Actions that change the configuration regenerate
    /// immediately; a no-op change (slider already at its bound) does not.
    pub fn apply(&mut self, action: Action) {
        self.status = Status::Idle;

        match action {
            Action::Widen(step) => {
                self.set_length(self.settings.pass_length.saturating_add(step));
            }
            Action::Narrow(step) => {
                self.set_length(self.settings.pass_length.saturating_sub(step));
            }
            Action::ToggleDigits => {
                self.settings.include_digits = !self.settings.include_digits;
                self.regenerate();
            }
            Action::ToggleSymbols => {
                self.settings.include_symbols = !self.settings.include_symbols;
                self.regenerate();
            }
            Action::Regenerate => self.regenerate(),
            Action::Copy => self.copy(),
            Action::Save => {
                self.status = match self.settings.save_to_file() {
                    Ok(()) => Status::Saved,
                    Err(e) => Status::Failed(format!("Failed to save settings: {}", e)),
                };
            }
            Action::Quit => {}
        }
    }

    fn set_length(&mut self, requested: usize) {
        let len = settings::clamp_length(requested);
        if len != self.settings.pass_length {
            self.settings.pass_length = len;
            self.regenerate();
        }
    }

    /// Forward the current password to the clipboard. The connection is
    /// opened on first use and kept for the panel's lifetime.
    fn copy(&mut self) {
        if self.clipboard.is_none() {
            match Clipboard::new() {
                Ok(clip) => self.clipboard = Some(clip),
                Err(e) => {
                    self.status = Status::Failed(e.to_string());
                    return;
                }
            }
        }

        if let Some(clip) = self.clipboard.as_mut() {
            self.status = match clip.copy(&self.password) {
                Ok(()) => Status::Copied,
                Err(e) => Status::Failed(e.to_string()),
            };
        }
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MAX_LENGTH, MIN_LENGTH};

    fn panel(length: usize) -> Panel {
        let mut panel = Panel::new(Settings {
            pass_length: length,
            ..Default::default()
        });
        panel.regenerate();
        panel
    }

    #[test]
    fn loaded_length_is_clamped_to_slider_range() {
        assert_eq!(panel(1).settings.pass_length, MIN_LENGTH);
        assert_eq!(panel(5000).settings.pass_length, MAX_LENGTH);
    }

    #[test]
    fn widen_regenerates_at_the_new_length() {
        let mut panel = panel(8);
        panel.apply(Action::Widen(1));
        assert_eq!(panel.settings.pass_length, 9);
        assert_eq!(panel.password.len(), 9);
    }

    #[test]
    fn slider_stops_at_bounds_without_regenerating() {
        let mut panel = panel(MAX_LENGTH);
        let before = panel.password.clone();
        panel.apply(Action::Widen(1));
        assert_eq!(panel.settings.pass_length, MAX_LENGTH);
        assert_eq!(panel.password, before);

        let mut panel = panel_at_min();
        let before = panel.password.clone();
        panel.apply(Action::Narrow(10));
        assert_eq!(panel.settings.pass_length, MIN_LENGTH);
        assert_eq!(panel.password, before);
    }

    fn panel_at_min() -> Panel {
        panel(MIN_LENGTH)
    }

    #[test]
    fn toggles_flip_and_regenerate() {
        let mut panel = panel(64);
        panel.apply(Action::ToggleDigits);
        assert!(panel.settings.include_digits);
        assert_eq!(panel.password.len(), 64);
        assert!(
            panel
                .password
                .bytes()
                .all(|b| b.is_ascii_alphanumeric())
        );

        panel.apply(Action::ToggleDigits);
        assert!(!panel.settings.include_digits);
        assert!(!panel.password.bytes().any(|b| b.is_ascii_digit()));
    }

    #[test]
    fn regenerate_replaces_the_password() {
        let mut panel = panel(24);
        let before = panel.password.clone();
        panel.apply(Action::Regenerate);
        assert_eq!(panel.password.len(), 24);
        assert_ne!(panel.password, before);
    }

    #[test]
    fn copy_reports_an_outcome() {
        let mut panel = panel(16);
        panel.apply(Action::Copy);
        // Headless environments report ClipboardUnavailable; either way the
        // action must leave a visible status.
        assert_ne!(panel.status, Status::Idle);
    }
}
