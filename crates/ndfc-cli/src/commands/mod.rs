//! Command implementations for the `ndfc-doc` CLI.
//!
//! Each command takes its parsed arguments, runs against a
//! [`TemplateSource`](ndfc_core::traits::TemplateSource), and writes its
//! document to stdout.

pub mod common;
pub mod completions;
pub mod document;
pub mod raw;
pub mod save;

use ndfc_core::cli::ExitCode;

/// Maps a failed command to the process exit code.
///
/// Library errors keep their own code even when wrapped in context;
/// anything else is a general error.
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<ndfc_core::Error>()
        .map_or(ExitCode::ERROR, ExitCode::from_error)
}
