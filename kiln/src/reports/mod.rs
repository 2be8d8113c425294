//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod clean;
mod info;
mod init;
mod output;
mod synth;

pub use check::CheckReport;
pub use clean::CleanReport;
pub use info::{DependencyInfo, InfoReport, StepInfo, TargetInfo};
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
pub use synth::{PreviewFile, SynthReport, SynthResult, WrittenResult};

#[cfg(test)]
pub(crate) use output::testing;
