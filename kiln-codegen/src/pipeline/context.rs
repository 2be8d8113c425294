//! Context passed through the pipeline phases.

use kiln_manifest::ProjectDescriptor;

use super::diagnostic::{Diagnostic, Severity};
use crate::{Error, Result, deps::DependencySet, synth::SynthOutput, targets::PublishTarget};

/// State of one synthesis run.
///
/// Each phase fills in its slot; later phases read the slots of earlier
/// ones.
#[derive(Debug)]
pub struct SynthContext {
    /// The descriptor being synthesized.
    pub descriptor: ProjectDescriptor,
    /// Classified dependencies (populated by ClassifyPhase).
    pub dependencies: Option<DependencySet>,
    /// Enabled publish targets (populated by ResolvePhase).
    pub targets: Option<Vec<PublishTarget>>,
    /// Rendered files (populated by SynthesizePhase).
    pub output: Option<SynthOutput>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SynthContext {
    pub fn new(descriptor: ProjectDescriptor) -> Self {
        Self {
            descriptor,
            dependencies: None,
            targets: None,
            output: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Info)
    }

    /// Classified dependencies, once ClassifyPhase has run.
    pub fn dependencies(&self) -> Result<&DependencySet> {
        self.dependencies
            .as_ref()
            .ok_or_else(|| missing("dependencies", "classify"))
    }

    /// Enabled publish targets, once ResolvePhase has run.
    pub fn targets(&self) -> Result<&[PublishTarget]> {
        self.targets
            .as_deref()
            .ok_or_else(|| missing("publish targets", "resolve"))
    }

    /// Rendered files, once SynthesizePhase has run.
    pub fn output(&self) -> Result<&SynthOutput> {
        self.output
            .as_ref()
            .ok_or_else(|| missing("output", "synthesize"))
    }

    /// Take the rendered files out of the context.
    pub fn take_output(&mut self) -> Result<SynthOutput> {
        self.output
            .take()
            .ok_or_else(|| missing("output", "synthesize"))
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

fn missing(what: &str, phase: &str) -> Error {
    Error::synthesis(
        "<pipeline>",
        format!("{} not available: the {} phase has not run", what, phase),
    )
}
