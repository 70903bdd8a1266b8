//! Settings file persistence.
//!
//! One comma-separated record at `~/.config/passbox/settings`. Unreadable or
//! malformed files are rewritten with the current settings rather than
//! surfaced as errors.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = Path::new(&path).parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(format_line(settings).as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists() {
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    match parse_line(line.trim()) {
        Some(parsed) => *settings = parsed,
        None => save(settings)?,
    }

    Ok(())
}

fn format_line(settings: &Settings) -> String {
    format!(
        "{},{},{},{}\n",
        settings.pass_length,
        settings.include_digits,
        settings.include_symbols,
        settings.number_of_passwords,
    )
}

/// Parse one settings record. Individual fields that fail to parse fall back
/// to their defaults; a wrong field count rejects the whole line.
fn parse_line(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 4 {
        return None;
    }

    let defaults = Settings::default();
    Some(Settings {
        pass_length: parts[0].parse().unwrap_or(defaults.pass_length),
        include_digits: parts[1].parse().unwrap_or(defaults.include_digits),
        include_symbols: parts[2].parse().unwrap_or(defaults.include_symbols),
        number_of_passwords: parts[3].parse().unwrap_or(defaults.number_of_passwords),
        to_clipboard: false,
    })
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passbox/settings", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips() {
        let settings = Settings {
            pass_length: 42,
            include_digits: true,
            include_symbols: false,
            number_of_passwords: 3,
            to_clipboard: false,
        };
        let parsed = parse_line(format_line(&settings).trim()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert!(parse_line("").is_none());
        assert!(parse_line("42,true").is_none());
        assert!(parse_line("42,true,false,1,extra").is_none());
    }

    #[test]
    fn bad_fields_fall_back_to_defaults() {
        let parsed = parse_line("nope,true,maybe,2").unwrap();
        assert_eq!(parsed.pass_length, Settings::default().pass_length);
        assert!(parsed.include_digits);
        assert!(!parsed.include_symbols);
        assert_eq!(parsed.number_of_passwords, 2);
    }
}
