// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Synthesis pipeline for kiln.
//!
//! Turns a [`ProjectDescriptor`](kiln_manifest::ProjectDescriptor) into the
//! files of a construct library project.
//!
//! # Module Organization
//!
//! - [`deps`] - Dependency classifier (runtime, peer, dev, bundled)
//! - [`targets`] - Publish target registry (npm, Go, PyPI, NuGet)
//! - [`files`] - One generator per output file
//! - [`synth`] - Synthesizer and the rendered output set
//! - [`pipeline`] - Phase orchestration, lints and diagnostics
//! - [`builder`] - Line builder with space indentation

pub mod builder;
pub mod deps;
mod error;
pub mod files;
pub mod pipeline;
pub mod synth;
pub mod targets;

pub use error::{Error, Result};
