//! Operand acquisition from arguments or standard input.

use std::io::{self, Read};

/// Errors while collecting the two operands.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Fewer than two operands were supplied.
    #[error("expected two numerals, found {found}")]
    MissingOperands {
        /// Number of operands found.
        found: usize,
    },

    /// Reading standard input failed.
    #[error("failed to read operands: {0}")]
    Io(#[from] io::Error),
}

/// Take the first two whitespace-delimited tokens from `reader`.
///
/// Tokens after the second are ignored.
pub fn read_operands(mut reader: impl Read) -> Result<(String, String), InputError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    let mut tokens = buf.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(a), Some(b)) => Ok((a.to_string(), b.to_string())),
        (Some(_), None) => Err(InputError::MissingOperands { found: 1 }),
        _ => Err(InputError::MissingOperands { found: 0 }),
    }
}

/// Use `args` when both operands were given, otherwise read `stdin`.
pub fn collect_operands(
    args: &[String],
    stdin: impl Read,
) -> Result<(String, String), InputError> {
    match args {
        [] => read_operands(stdin),
        [a, b] => Ok((a.clone(), b.clone())),
        other => Err(InputError::MissingOperands { found: other.len() }),
    }
}
