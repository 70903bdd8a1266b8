mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

/// Run CLI mode with the given arguments.
pub fn run(args: &[String]) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            prompts::error(&msg);
            prompts::error("Try 'passbox --help'");
            std::process::exit(2);
        }
    };

    let _ = ctx.run();
}

pub fn print_help() {
    box_top("Passbox");
    box_line_center("Random password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a panel with a");
    box_line("     length slider, digit/symbol toggles, and clipboard copy.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the panel.");
    box_line("");
    box_line("USAGE:");
    box_line("  passbox [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 8)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --digits", "Include digits 0-9");
    box_opt("      --symbols", "Include symbols ];!@#$%^&*()_");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Use saved settings from config file");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passbox                  Interactive panel");
    box_line("  passbox -l 16            One password, 16 characters");
    box_line("  passbox -l 20 --digits --symbols -n 3");
    box_line("  passbox -l 32 -b         32 characters, straight to clipboard");
    box_line("");
    box_bottom();
    println!();
}
