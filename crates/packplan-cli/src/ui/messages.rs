//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::{is_quiet, use_color};

fn render(symbol: &str, message: &str, paint: impl Fn(&str) -> String) -> String {
    if use_color() {
        paint(message)
    } else {
        format!("{symbol} {message}")
    }
}

fn success_line(message: &str) -> String {
    render("✓", message, |m| format!("{} {}", "✓".green().bold(), m))
}

fn info_line(message: &str) -> String {
    render("ℹ", message, |m| format!("{} {}", "ℹ".blue().bold(), m))
}

fn warning_line(message: &str) -> String {
    render("⚠", message, |m| format!("{} {}", "⚠".yellow().bold(), m.yellow()))
}

fn error_line(message: &str) -> String {
    render("✗", message, |m| format!("{} {}", "✗".red().bold(), m.red()))
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    if !is_quiet() {
        eprintln!("{}", success_line(message));
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if !is_quiet() {
        eprintln!("{}", info_line(message));
    }
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if !is_quiet() {
        eprintln!("{}", warning_line(message));
    }
}

/// Print an error message to stderr, even in quiet mode.
pub fn error(message: &str) {
    eprintln!("{}", error_line(message));
}
