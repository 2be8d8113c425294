//! Lint for the author's email address.

use kiln_manifest::ProjectDescriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Errors when `author_address` is set but is not an email address.
pub struct AuthorEmailLint;

impl Lint for AuthorEmailLint {
    fn name(&self) -> &'static str {
        "author-email"
    }

    fn description(&self) -> &'static str {
        "Check that the author address looks like an email address"
    }

    fn check(&self, descriptor: &ProjectDescriptor, diagnostics: &mut Vec<Diagnostic>) {
        if let Some(issue) = descriptor
            .field_issues()
            .into_iter()
            .find(|i| i.key == "author_address")
        {
            diagnostics.push(Diagnostic::error("validate", issue.message.clone()).at(issue.field()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::testing;

    #[test]
    fn test_malformed_address() {
        let mut descriptor = testing::descriptor();
        descriptor.project.author_address = Some("matthew.bonig".to_string());

        let mut diagnostics = Vec::new();
        AuthorEmailLint.check(&descriptor, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].field.as_deref(),
            Some("project.author_address")
        );
    }

    #[test]
    fn test_absent_address_is_fine() {
        let mut descriptor = testing::descriptor();
        descriptor.project.author_address = None;

        let mut diagnostics = Vec::new();
        AuthorEmailLint.check(&descriptor, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
