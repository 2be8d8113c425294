//! Pipeline orchestrator.

use kiln_manifest::ProjectDescriptor;

use super::{
    Phase, Plugin, SynthContext,
    phases::{ClassifyPhase, Lint, ResolvePhase, SynthesizePhase, ValidatePhase},
};
use crate::Result;

/// The synthesis pipeline orchestrator.
///
/// Runs the built-in phases (validate, classify, resolve, synthesize)
/// followed by any user phases, calling plugin hooks around each one.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(TracingPlugin)
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(descriptor)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to run extra lints.
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase on `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns the first fatal phase error. Nothing is written to disk.
    pub fn run(&self, descriptor: ProjectDescriptor) -> Result<SynthContext> {
        let mut ctx = SynthContext::new(descriptor);

        for phase in self.phases() {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Every phase in run order: the built-ins, then added phases.
    pub fn phases(&self) -> impl Iterator<Item = &dyn Phase> {
        let builtin: [&dyn Phase; 4] = [&self.validate, &ClassifyPhase, &ResolvePhase, &SynthesizePhase];
        builtin
            .into_iter()
            .chain(self.phases.iter().map(|phase| phase.as_ref()))
    }

    /// Lints run by the validate phase.
    pub fn lints(&self) -> impl Iterator<Item = &dyn Lint> {
        self.validate.lints()
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut SynthContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
