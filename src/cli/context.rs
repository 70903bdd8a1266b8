//! CLI context - bundles settings, flags, and clipboard state.

use zeroize::Zeroize;

use super::{CliFlags, print_help, prompts};
use crate::clipboard::Clipboard;
use crate::pass;
use crate::settings::Settings;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self { settings, flags })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passbox {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags over the starting settings. Lengths are taken as
    /// given: the slider bounds are a panel concern, the core enforces
    /// length >= 1.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if self.flags.digits {
            self.settings.include_digits = true;
        }
        if self.flags.symbols {
            self.settings.include_symbols = true;
        }
        if self.flags.clipboard {
            self.settings.to_clipboard = true;
        }
    }

    /// Generate passwords and hand them to stdout or the clipboard.
    fn generate_output(&mut self) {
        let count = self.settings.number_of_passwords;
        if count == 0 {
            return;
        }

        let mut passwords = match pass::generate_batch(&self.settings, count) {
            Ok(batch) => batch,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(1);
            }
        };

        if self.settings.to_clipboard {
            let mut joined = passwords.join("\n");
            let copied = Clipboard::new().and_then(|mut clip| clip.copy(&joined));
            joined.zeroize();
            for pass in &mut passwords {
                pass.zeroize();
            }
            match copied {
                Ok(()) => prompts::clipboard_copied(count),
                Err(e) => {
                    prompts::error(&e.to_string());
                    std::process::exit(1);
                }
            }
        } else {
            for pass in &mut passwords {
                println!("{}", pass);
                pass.zeroize();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passbox")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn flags_override_defaults() {
        let mut ctx = Context::new(&args(&["-l", "30", "--digits", "--symbols"])).unwrap();
        ctx.apply_flags();
        assert_eq!(ctx.settings.pass_length, 30);
        assert!(ctx.settings.include_digits);
        assert!(ctx.settings.include_symbols);
        assert!(!ctx.settings.to_clipboard);
    }

    #[test]
    fn defaults_hold_without_flags() {
        let mut ctx = Context::new(&args(&[])).unwrap();
        ctx.apply_flags();
        assert_eq!(ctx.settings, Settings::default());
    }

    #[test]
    fn parse_failures_surface_as_messages() {
        assert!(Context::new(&args(&["--wat"])).is_err());
    }
}
