//! Descriptor lints.

use kiln_manifest::ProjectDescriptor;

use crate::pipeline::Diagnostic;

/// A single descriptor check run by the validate phase.
///
/// Lints never fail; they record diagnostics and the phase decides whether
/// any error severity stops the run.
pub trait Lint: Send + Sync {
    /// Kebab-case identifier, e.g. `duplicate-keyword`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, descriptor: &ProjectDescriptor, diagnostics: &mut Vec<Diagnostic>);
}
