//! Process exit codes for failed runs.

use pihex_core::constants::exit_codes;
use pihex_core::error::PiError;

/// Map a failure to the process exit code.
///
/// Extraction errors carry their own codes; anything else (I/O and the
/// like) falls back to the generic failure code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PiError>() {
        Some(PiError::InvalidArgument(_)) => exit_codes::ERROR_USAGE,
        Some(PiError::UnknownStrategy(_)) => exit_codes::ERROR_CONFIG,
        Some(PiError::Worker(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
