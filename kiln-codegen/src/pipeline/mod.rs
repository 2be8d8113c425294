//! Synthesis pipeline.
//!
//! A [`Pipeline`] runs the phases `validate → classify → resolve → synthesize`
//! over a [`SynthContext`], calling [`Plugin`] hooks before and after each
//! phase and collecting [`Diagnostic`]s on the way. Any phase error halts the
//! run; writing the output is left to the caller.
//!
//! # Example
//!
//! ```ignore
//! use kiln_codegen::pipeline::{Pipeline, TracingPlugin};
//!
//! let ctx = Pipeline::new().plugin(TracingPlugin).run(descriptor)?;
//! for warning in ctx.warnings() {
//!     eprintln!("{}", warning);
//! }
//! ctx.output()?.write(project_dir)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::SynthContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::{Plugin, TracingPlugin};
pub use runner::Pipeline;
