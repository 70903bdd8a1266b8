//! Panel rendering.
//!
//! The frame is composed into one buffer with explicit `\r\n` endings (the
//! panel runs in raw mode) and written in a single print.

use crate::pass::charset;
use crate::settings::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{BOX_WIDTH, DIM, RED, RESET, calculate_entropy, entropy_strength, flush};

use super::state::{Panel, Status};

const INNER_WIDTH: usize = BOX_WIDTH - 4;
const TRACK_WIDTH: usize = INNER_WIDTH - 12;

/// Draw the whole panel for the current state.
pub fn frame(panel: &Panel) {
    let mut buf = String::new();

    push_top(&mut buf, "Passbox");
    for chunk in chunks(&panel.password) {
        push_line(&mut buf, &chunk);
    }
    push_bottom(&mut buf);
    buf.push_str("\r\n");

    let pool = charset::size(&panel.settings);
    let bits = calculate_entropy(panel.settings.pass_length, pool);

    push_top(&mut buf, "Options");
    push_line(
        &mut buf,
        &format!("Length: {}", panel.settings.pass_length),
    );
    push_line(&mut buf, &slider(panel.settings.pass_length));
    push_line(
        &mut buf,
        &format!(
            "[{}] Digits (d)    [{}] Symbols (s)",
            mark(panel.settings.include_digits),
            mark(panel.settings.include_symbols),
        ),
    );
    push_line(
        &mut buf,
        &format!(
            "Entropy: {:.1} bits ({}) • Pool: {} chars",
            bits,
            entropy_strength(bits),
            pool
        ),
    );
    push_bottom(&mut buf);
    buf.push_str("\r\n");

    buf.push_str(&format!(
        "{DIM} ←/→ length ±1   ↑/↓ length ±10   d digits   s symbols{RESET}\r\n"
    ));
    buf.push_str(&format!(
        "{DIM} enter new   c copy   w save   q quit{RESET}\r\n"
    ));

    match &panel.status {
        Status::Idle => {}
        Status::Copied => buf.push_str("\r\n Copied to clipboard\r\n"),
        Status::Saved => buf.push_str("\r\n Settings saved\r\n"),
        Status::Failed(msg) => buf.push_str(&format!("\r\n {RED}{msg}{RESET}\r\n")),
    }

    print!("{}", buf);
    flush();
}

fn mark(on: bool) -> char {
    if on { 'x' } else { ' ' }
}

/// Slider over the [MIN_LENGTH, MAX_LENGTH] range: `8 [▄▄▄────] 100`.
fn slider(length: usize) -> String {
    let filled = slider_fill(length, TRACK_WIDTH);
    format!(
        "{:>3} [{}{}] {}",
        MIN_LENGTH,
        "▄".repeat(filled),
        "─".repeat(TRACK_WIDTH - filled),
        MAX_LENGTH
    )
}

fn slider_fill(length: usize, track: usize) -> usize {
    let length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    (length - MIN_LENGTH) * track / (MAX_LENGTH - MIN_LENGTH)
}

/// Split the password into box-sized display chunks. An empty password still
/// yields one blank line so the box keeps its shape.
fn chunks(password: &str) -> Vec<String> {
    if password.is_empty() {
        return vec![String::new()];
    }
    password
        .as_bytes()
        .chunks(INNER_WIDTH)
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect()
}

fn push_top(buf: &mut String, title: &str) {
    let title_part = format!("─ {} ", title);
    let remaining = BOX_WIDTH - 2 - title_part.chars().count();
    buf.push_str(&format!("┌{}{}┐\r\n", title_part, "─".repeat(remaining)));
}

fn push_line(buf: &mut String, content: &str) {
    let display_len = content.chars().count();
    let padding = INNER_WIDTH.saturating_sub(display_len);
    buf.push_str(&format!("│ {}{} │\r\n", content, " ".repeat(padding)));
}

fn push_bottom(buf: &mut String) {
    buf.push_str(&format!("└{}┘\r\n", "─".repeat(BOX_WIDTH - 2)));
}
