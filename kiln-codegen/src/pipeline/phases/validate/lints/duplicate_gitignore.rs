//! Lint for repeated gitignore rules.

use std::collections::HashSet;

use kiln_manifest::ProjectDescriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Notes repeated gitignore rules. They are kept as written.
pub struct DuplicateGitignoreLint;

impl Lint for DuplicateGitignoreLint {
    fn name(&self) -> &'static str {
        "duplicate-gitignore"
    }

    fn description(&self) -> &'static str {
        "Report gitignore rules listed more than once"
    }

    fn check(&self, descriptor: &ProjectDescriptor, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        for rule in &descriptor.project.gitignore {
            if !seen.insert(rule.as_str()) {
                diagnostics.push(
                    Diagnostic::info("validate", format!("gitignore rule '{}' is repeated", rule))
                        .at("project.gitignore"),
                );
            }
        }
    }
}
