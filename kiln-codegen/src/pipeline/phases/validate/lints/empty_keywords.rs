//! Lint for a descriptor without keywords.

use kiln_manifest::ProjectDescriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns when no keywords are declared.
pub struct EmptyKeywordsLint;

impl Lint for EmptyKeywordsLint {
    fn name(&self) -> &'static str {
        "empty-keywords"
    }

    fn description(&self) -> &'static str {
        "Warn when the package declares no keywords"
    }

    fn check(&self, descriptor: &ProjectDescriptor, diagnostics: &mut Vec<Diagnostic>) {
        if descriptor.project.keywords.is_empty() {
            diagnostics.push(
                Diagnostic::warning("validate", "no keywords declared").at("project.keywords"),
            );
        }
    }
}
