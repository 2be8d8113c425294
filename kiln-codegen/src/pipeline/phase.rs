//! The unit of work a [`Pipeline`](super::Pipeline) runs.

use super::SynthContext;
use crate::Result;

/// One step of synthesis.
///
/// A phase reads and extends the [`SynthContext`]. Recoverable findings go
/// into `ctx.diagnostics`; returning `Err` stops the pipeline.
pub trait Phase: Send + Sync {
    /// Short identifier, passed to plugin hooks.
    fn name(&self) -> &'static str;

    /// One line shown by `kiln info`.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut SynthContext) -> Result<()>;
}
