//! Lint for repeated keywords.

use std::collections::HashSet;

use kiln_manifest::ProjectDescriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns on keywords that repeat, ignoring case.
pub struct DuplicateKeywordLint;

impl Lint for DuplicateKeywordLint {
    fn name(&self) -> &'static str {
        "duplicate-keyword"
    }

    fn description(&self) -> &'static str {
        "Detect keywords declared more than once"
    }

    fn check(&self, descriptor: &ProjectDescriptor, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        for keyword in &descriptor.project.keywords {
            if !seen.insert(keyword.to_lowercase()) {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("duplicate keyword '{}'", keyword))
                        .at("project.keywords"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::testing;

    #[test]
    fn test_case_insensitive_duplicates() {
        let mut descriptor = testing::descriptor();
        descriptor.project.keywords.push("CDK".to_string());

        let mut diagnostics = Vec::new();
        DuplicateKeywordLint.check(&descriptor, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "duplicate keyword 'CDK'");
    }

    #[test]
    fn test_no_duplicates() {
        let mut diagnostics = Vec::new();
        DuplicateKeywordLint.check(&testing::descriptor(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
