//! Validate phase - runs lints on the descriptor.

mod lint;
pub mod lints;

pub use lint::Lint;
pub use lints::{
    AuthorEmailLint, DuplicateGitignoreLint, DuplicateKeywordLint, EmptyKeywordsLint,
    RequiredFieldsLint, UnversionedPeerLint,
};

use crate::{
    Error, Result,
    pipeline::{Phase, SynthContext},
};

/// Phase that validates the descriptor using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(RequiredFieldsLint),
                Box::new(AuthorEmailLint),
                Box::new(EmptyKeywordsLint),
                Box::new(DuplicateKeywordLint),
                Box::new(DuplicateGitignoreLint),
                Box::new(UnversionedPeerLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Lints in the order they run.
    pub fn lints(&self) -> impl Iterator<Item = &dyn Lint> {
        self.lints.iter().map(|lint| lint.as_ref())
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check descriptor integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut SynthContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.descriptor, &mut ctx.diagnostics);
        }

        // Warnings are allowed; the first error is reported.
        match ctx.errors().next() {
            Some(first) => Err(Error::validation(
                first.field.as_deref().unwrap_or("descriptor"),
                first.message.clone(),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use kiln_manifest::ProjectDescriptor;

    use super::*;
    use crate::{files::testing, pipeline::Diagnostic};

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _descriptor: &ProjectDescriptor, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", "forced error").at("project.name"));
            }
        }

        let mut ctx = SynthContext::new(testing::descriptor());
        let result = ValidatePhase::empty().with_lint(AlwaysErrorLint).run(&mut ctx);

        assert!(matches!(
            result,
            Err(Error::Validation { ref field, ref message })
                if field == "project.name" && message == "forced error"
        ));
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let mut descriptor = testing::descriptor();
        descriptor.project.keywords.clear();
        let mut ctx = SynthContext::new(descriptor);

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_missing_author_fails() {
        let mut descriptor = testing::descriptor();
        descriptor.project.author = String::new();
        let mut ctx = SynthContext::new(descriptor);

        let err = ValidatePhase::new().run(&mut ctx).unwrap_err();

        assert!(matches!(err, Error::Validation { ref field, .. } if field == "project.author"));
    }

    #[test]
    fn test_default_lints() {
        let names: Vec<_> = ValidatePhase::new()
            .lints()
            .map(|l| l.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "required-fields",
                "author-email",
                "empty-keywords",
                "duplicate-keyword",
                "duplicate-gitignore",
                "unversioned-peer",
            ]
        );
    }
}
