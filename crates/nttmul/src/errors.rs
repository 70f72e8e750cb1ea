//! Error handling and exit codes.

use nttmul_core::constants::exit_codes;
use nttmul_core::multiplier::MulError;

use crate::input::InputError;

/// Map a multiplication error to its exit code.
pub fn handle_error(err: &MulError) -> i32 {
    match err {
        MulError::InvalidDigit { .. } | MulError::EmptyNumeral => exit_codes::ERROR_INVALID_INPUT,
        MulError::UnsupportedTransformSize { .. }
        | MulError::CoefficientBound { .. }
        | MulError::ResultOverflow { .. } => exit_codes::ERROR_CAPACITY,
        MulError::Config(_) | MulError::MemoryLimit { .. } => exit_codes::ERROR_CONFIG,
        MulError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any error surfaced by [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<MulError>() {
        return handle_error(e);
    }
    match err.downcast_ref::<InputError>() {
        Some(InputError::MissingOperands { .. }) => exit_codes::ERROR_INVALID_INPUT,
        Some(InputError::Io(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
