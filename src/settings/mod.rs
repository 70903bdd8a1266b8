//! Password generation settings.

mod file;

use crate::error::Error;

/// Smallest length the panel slider exposes.
pub const MIN_LENGTH: usize = 8;
/// Largest length the panel slider exposes.
pub const MAX_LENGTH: usize = 100;

/// Clamp a requested length to the slider range.
///
/// Only the interactive panel calls this; the generation core accepts any
/// length of at least 1.
pub fn clamp_length(len: usize) -> usize {
    len.clamp(MIN_LENGTH, MAX_LENGTH)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), Error> {
        file::save(self)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 8,
            include_digits: false,
            include_symbols: false,
            number_of_passwords: 1,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_initial_panel() {
        let s = Settings::default();
        assert_eq!(s.pass_length, 8);
        assert!(!s.include_digits);
        assert!(!s.include_symbols);
        assert_eq!(s.number_of_passwords, 1);
    }

    #[test]
    fn clamp_length_enforces_slider_bounds() {
        assert_eq!(clamp_length(0), MIN_LENGTH);
        assert_eq!(clamp_length(7), MIN_LENGTH);
        assert_eq!(clamp_length(8), 8);
        assert_eq!(clamp_length(55), 55);
        assert_eq!(clamp_length(100), 100);
        assert_eq!(clamp_length(101), MAX_LENGTH);
        assert_eq!(clamp_length(usize::MAX), MAX_LENGTH);
    }
}
