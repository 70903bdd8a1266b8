use std::env;

mod cli;
mod clipboard;
mod error;
mod exits;
mod panel;
mod pass;
mod settings;
mod terminal;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => panel::run(),
        _ => cli::run(&args),
    }
}
