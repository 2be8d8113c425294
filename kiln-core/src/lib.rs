//! Core utilities and types for the kiln project synthesizer.
//!
//! This crate provides the file abstractions shared by the descriptor parser,
//! the synthesis pipeline and the CLI.

mod file;
mod output;
mod version;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
pub use output::{OutputWriter, WriteError, WriteSummary};
pub use version::Version;
