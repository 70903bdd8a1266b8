//! Character pool building for password generation.

use crate::settings::Settings;

// Letter order is fixed; sampling is uniform over indices, so order never
// affects the output distribution.
const LETTERS: &[u8] = b"AQWERTYUIOPSDFGHJKLZXCVBNMasdfghjklpoiuytrewqzxcvbnm";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"];!@#$%^&*()_";

/// Build the character pool for the given settings.
///
/// Letters are always present; digits and symbols are appended when their
/// toggles are on. The pool is never empty.
pub fn build(settings: &Settings) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(size(settings));

    chars.extend_from_slice(LETTERS);

    if settings.include_digits {
        chars.extend_from_slice(DIGITS);
    }

    if settings.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

/// Pool size for the given settings, without building it (for the entropy
/// readout).
pub fn size(settings: &Settings) -> usize {
    let mut size = LETTERS.len();

    if settings.include_digits {
        size += DIGITS.len();
    }

    if settings.include_symbols {
        size += SYMBOLS.len();
    }

    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(include_digits: bool, include_symbols: bool) -> Settings {
        Settings {
            include_digits,
            include_symbols,
            ..Default::default()
        }
    }

    #[test]
    fn letters_only_pool_has_52_chars() {
        let pool = build(&settings(false, false));
        assert_eq!(pool.len(), 52);
        assert!(pool.iter().all(|b| b.is_ascii_alphabetic()));
    }

    #[test]
    fn digits_add_exactly_10() {
        let base = build(&settings(false, false));
        let pool = build(&settings(true, false));
        assert_eq!(pool.len(), base.len() + 10);
        assert_eq!(&pool[52..], b"0123456789".as_slice());
    }

    #[test]
    fn symbols_add_exactly_13() {
        let base = build(&settings(false, false));
        let pool = build(&settings(false, true));
        assert_eq!(pool.len(), base.len() + 13);
        assert_eq!(&pool[52..], b"];!@#$%^&*()_".as_slice());
    }

    #[test]
    fn full_pool_has_75_chars_in_order() {
        let pool = build(&settings(true, true));
        assert_eq!(pool.len(), 75);
        assert_eq!(
            &pool[..52],
            b"AQWERTYUIOPSDFGHJKLZXCVBNMasdfghjklpoiuytrewqzxcvbnm".as_slice()
        );
        assert_eq!(&pool[52..62], b"0123456789".as_slice());
        assert_eq!(&pool[62..], b"];!@#$%^&*()_".as_slice());
    }

    #[test]
    fn size_matches_built_pool() {
        for digits in [false, true] {
            for symbols in [false, true] {
                let s = settings(digits, symbols);
                assert_eq!(size(&s), build(&s).len());
            }
        }
    }
}
