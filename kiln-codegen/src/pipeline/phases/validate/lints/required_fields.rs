//! Lint for required and well-formed descriptor fields.

use kiln_manifest::ProjectDescriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Errors on empty required fields and malformed names.
///
/// Parsing already rejects these; the lint covers descriptors assembled or
/// edited in code.
pub struct RequiredFieldsLint;

impl Lint for RequiredFieldsLint {
    fn name(&self) -> &'static str {
        "required-fields"
    }

    fn description(&self) -> &'static str {
        "Require name, author and description, and reject malformed fields"
    }

    fn check(&self, descriptor: &ProjectDescriptor, diagnostics: &mut Vec<Diagnostic>) {
        for issue in descriptor
            .field_issues()
            .into_iter()
            .filter(|i| i.key != "author_address")
        {
            diagnostics.push(Diagnostic::error("validate", issue.message.clone()).at(issue.field()));
        }
    }
}
