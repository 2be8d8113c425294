//! Lint for peer dependencies without a version range.

use kiln_manifest::ProjectDescriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns on peers with neither a declared range nor a version constraint.
/// Such peers are written as `*`.
pub struct UnversionedPeerLint;

impl Lint for UnversionedPeerLint {
    fn name(&self) -> &'static str {
        "unversioned-peer"
    }

    fn description(&self) -> &'static str {
        "Warn on peer dependencies without a version"
    }

    fn check(&self, descriptor: &ProjectDescriptor, diagnostics: &mut Vec<Diagnostic>) {
        for dep in &descriptor.dependencies.peer {
            if dep.version().is_none() && !descriptor.versions.contains_key(dep.name()) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("peer dependency '{}' has no version range", dep.name()),
                    )
                    .at("dependencies.peer"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kiln_manifest::DependencyRef;

    use super::*;
    use crate::files::testing;

    #[test]
    fn test_constraint_counts_as_version() {
        let mut diagnostics = Vec::new();
        UnversionedPeerLint.check(&testing::descriptor(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unversioned_peer() {
        let mut descriptor = testing::descriptor();
        descriptor.dependencies.peer.push(DependencyRef::new("projen"));
        descriptor
            .dependencies
            .peer
            .push(DependencyRef::new("cdk-nag").with_version("^2.0.0"));

        let mut diagnostics = Vec::new();
        UnversionedPeerLint.check(&descriptor, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "peer dependency 'projen' has no version range"
        );
    }
}
