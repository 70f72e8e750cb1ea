//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Binary name completions are registered for.
pub const BIN_NAME: &str = "nttmul";

/// Write the completion script for `shell` to `out`.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, BIN_NAME, out);
}

/// Completion script for `shell` as a string.
#[must_use]
pub fn completion_script(cmd: &mut Command, shell: Shell) -> String {
    let mut buf = Vec::new();
    generate_completion(cmd, shell, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
