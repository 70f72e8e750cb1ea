//! Styled status lines. Everything here goes to stderr; stdout carries only
//! the product.

use std::io::{self, Write};

use console::style;

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Header,
    Success,
    Error,
}

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render one status line, without the newline.
#[must_use]
pub fn status_line(status: Status, text: &str, color: bool) -> String {
    match (status, color) {
        (Status::Header, false) => format!("=== {text} ==="),
        (Status::Header, true) => style(format!("=== {text} ===")).bold().cyan().to_string(),
        (Status::Success, false) => format!("[OK] {text}"),
        (Status::Success, true) => format!("{} {text}", style("[OK]").green().bold()),
        (Status::Error, false) => format!("[ERROR] {text}"),
        (Status::Error, true) => format!("{} {text}", style("[ERROR]").red().bold()),
    }
}

/// Write a status line to `out`.
pub fn write_status(out: &mut dyn Write, status: Status, text: &str, color: bool) -> io::Result<()> {
    writeln!(out, "{}", status_line(status, text, color))
}

fn emit(status: Status, text: &str) {
    let _ = write_status(&mut io::stderr(), status, text, !is_color_disabled());
}

/// Print a styled header.
pub fn print_header(text: &str) {
    emit(Status::Header, text);
}

/// Print a success message.
pub fn print_success(text: &str) {
    emit(Status::Success, text);
}

/// Print an error message.
pub fn print_error(text: &str) {
    emit(Status::Error, text);
}
