//! NDFC documentation CLI library.
//!
//! Exposes the command implementations and settings of the `ndfc-doc`
//! binary so they can be tested without spawning a process.

#![allow(clippy::missing_errors_doc)]

use clap::ValueEnum;

pub mod commands;
pub mod settings;

/// Shape of the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// The bare argument mapping, one entry per template parameter.
    #[default]
    Options,
    /// A full module `DOCUMENTATION` skeleton with `state` and `config`.
    Module,
}

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}
