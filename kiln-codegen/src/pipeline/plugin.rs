//! Pipeline plugin trait.

use super::SynthContext;
use crate::Result;

/// A plugin that hooks into the pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the context.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut SynthContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut SynthContext) -> Result<()> {
        Ok(())
    }
}

/// Emits a `tracing` event around every phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPlugin;

impl Plugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, ctx: &mut SynthContext) -> Result<()> {
        tracing::debug!(phase, project = %ctx.descriptor.name(), "phase started");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut SynthContext) -> Result<()> {
        tracing::debug!(
            phase,
            warnings = ctx.warning_count(),
            dependencies = ctx.dependencies.as_ref().map_or(0, |d| d.len()),
            targets = ctx.targets.as_ref().map_or(0, Vec::len),
            files = ctx.output.as_ref().map_or(0, |o| o.len()),
            "phase finished"
        );
        Ok(())
    }
}
