//! Field validation and source-location lookup for descriptors.

use miette::SourceSpan;

use super::ProjectDescriptor;
use crate::{Error, RepositoryUrl, error::SourceContext};

/// A problem with a single descriptor field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Table the field lives in (e.g. `project`)
    pub section: &'static str,
    /// Key inside the table
    pub key: String,
    pub message: String,
}

impl FieldIssue {
    fn new(section: &'static str, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            section,
            key: key.into(),
            message: message.into(),
        }
    }

    /// Dotted path of the field, e.g. `project.author`.
    pub fn field(&self) -> String {
        format!("{}.{}", self.section, self.key)
    }
}

impl ProjectDescriptor {
    /// Check required and well-formed fields.
    ///
    /// Returns every issue found, in field order. Type-level problems (URLs,
    /// versions, dependency references) are already rejected while parsing.
    pub fn field_issues(&self) -> Vec<FieldIssue> {
        let project = &self.project;
        let mut issues = Vec::new();

        let name = project.name.trim();
        if name.is_empty() {
            issues.push(FieldIssue::new("project", "name", "must not be empty"));
        } else if name.chars().any(char::is_whitespace) {
            issues.push(FieldIssue::new(
                "project",
                "name",
                "must not contain whitespace",
            ));
        } else if name.starts_with('@') && !name.contains('/') {
            issues.push(FieldIssue::new(
                "project",
                "name",
                "scoped names must look like '@scope/name'",
            ));
        }

        if project.author.trim().is_empty() {
            issues.push(FieldIssue::new("project", "author", "must not be empty"));
        }

        if let Some(address) = &project.author_address
            && !is_email_address(address)
        {
            issues.push(FieldIssue::new(
                "project",
                "author_address",
                format!("'{}' is not an email address", address),
            ));
        }

        if project.description.trim().is_empty() {
            issues.push(FieldIssue::new(
                "project",
                "description",
                "must not be empty",
            ));
        }

        if project.repository_url.trim().is_empty() {
            issues.push(FieldIssue::new(
                "project",
                "repository_url",
                "must not be empty",
            ));
        } else if let Err(message) = project.repository_url.parse::<RepositoryUrl>() {
            issues.push(FieldIssue::new("project", "repository_url", message));
        }

        let branch = &project.default_release_branch;
        if branch.trim().is_empty() {
            issues.push(FieldIssue::new(
                "project",
                "default_release_branch",
                "must not be empty",
            ));
        } else if has_control_chars(branch) || branch.chars().any(char::is_whitespace) {
            issues.push(FieldIssue::new(
                "project",
                "default_release_branch",
                format!("{:?} is not a valid branch name", branch),
            ));
        }

        if project.license.trim().is_empty() {
            issues.push(FieldIssue::new("project", "license", "must not be empty"));
        }

        if project.keywords.iter().any(|k| k.trim().is_empty()) {
            issues.push(FieldIssue::new(
                "project",
                "keywords",
                "keywords must not be empty strings",
            ));
        }

        if project.gitignore.iter().any(|r| r.trim().is_empty()) {
            issues.push(FieldIssue::new(
                "project",
                "gitignore",
                "rules must not be empty strings",
            ));
        }

        if self.versions.keys().any(|k| k.trim().is_empty()) {
            issues.push(FieldIssue::new(
                "versions",
                "",
                "subsystem names must not be empty",
            ));
        }

        issues
    }
}

/// Newlines, tabs and other control characters cannot round-trip through
/// generated YAML and JSON unchanged.
pub fn has_control_chars(value: &str) -> bool {
    value.chars().any(char::is_control)
}

fn is_email_address(address: &str) -> bool {
    match address.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Parsing and validation context that carries source information.
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Find the span of `key = ...` inside the `[section]` table.
    pub fn find_key_span(&self, section: &str, key: &str) -> Option<SourceSpan> {
        if key.is_empty() {
            return None;
        }

        let mut current: Option<&str> = None;
        let mut offset = 0;

        for line in self.source.src().split_inclusive('\n') {
            let trimmed = line.trim_start();
            let indent = line.len() - trimmed.len();
            let content = trimmed.trim_end();

            if content.starts_with('[') {
                current = Some(content.trim_start_matches('[').trim_end_matches(']').trim());
            } else if current == Some(section)
                && let Some(rest) = content.strip_prefix(key)
                && rest.trim_start().starts_with('=')
            {
                return Some(SourceSpan::from((offset + indent, content.len())));
            }

            offset += line.len();
        }

        None
    }

    /// Find the span of the `[section]` header line.
    pub fn find_section_span(&self, section: &str) -> Option<SourceSpan> {
        let mut offset = 0;
        for line in self.source.src().split_inclusive('\n') {
            let trimmed = line.trim_start();
            let content = trimmed.trim_end();
            if content.starts_with('[')
                && content.trim_start_matches('[').trim_end_matches(']').trim() == section
            {
                return Some(SourceSpan::from((offset + line.len() - trimmed.len(), content.len())));
            }
            offset += line.len();
        }
        None
    }

    /// Turn a field issue into a validation error pointing at the field, or
    /// at its table when the key is absent.
    pub fn issue_error(&self, issue: &FieldIssue) -> Box<Error> {
        let span = self
            .find_key_span(issue.section, &issue.key)
            .or_else(|| self.find_section_span(issue.section));
        self.source
            .validation_error(issue.field(), issue.message.clone(), span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = r#"[project]
name = "lib"
author = ""

[dependencies]
author = "not this one"
"#;

    #[test]
    fn test_find_key_span() {
        let ctx = ParseContext::new(SRC, "kiln.toml");
        let span = ctx.find_key_span("project", "author").unwrap();

        assert_eq!(span.offset(), SRC.find("author").unwrap());
        assert_eq!(span.len(), r#"author = """#.len());
    }

    #[test]
    fn test_find_key_span_respects_section() {
        let ctx = ParseContext::new(SRC, "kiln.toml");
        let span = ctx.find_key_span("dependencies", "author").unwrap();

        assert_eq!(span.offset(), SRC.rfind("author").unwrap());
    }

    #[test]
    fn test_find_key_span_missing() {
        let ctx = ParseContext::new(SRC, "kiln.toml");
        assert!(ctx.find_key_span("project", "description").is_none());
        assert!(ctx.find_key_span("features", "name").is_none());
    }

    #[test]
    fn test_key_prefix_does_not_match() {
        let ctx = ParseContext::new("[project]\nauthor_address = \"x\"\n", "kiln.toml");
        assert!(ctx.find_key_span("project", "author").is_none());
    }

    #[test]
    fn test_find_section_span() {
        let ctx = ParseContext::new(SRC, "kiln.toml");
        let span = ctx.find_section_span("dependencies").unwrap();

        assert_eq!(span.offset(), SRC.find("[dependencies]").unwrap());
        assert_eq!(span.len(), "[dependencies]".len());
        assert!(ctx.find_section_span("publish").is_none());
    }

    #[test]
    fn test_branch_with_newline_rejected() {
        let mut descriptor = crate::ProjectDescriptor::builder("lib")
            .author("Acme")
            .description("desc")
            .repository_url("https://github.com/acme/lib.git")
            .build()
            .unwrap();
        descriptor.project.default_release_branch = "main\nrelease".to_string();

        let issues = descriptor.field_issues();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field(), "project.default_release_branch");
    }

    #[test]
    fn test_control_chars() {
        assert!(has_control_chars("a\tb"));
        assert!(has_control_chars("github.com/acme/lib\nv2"));
        assert!(!has_control_chars("github.com/acme/lib"));
    }

    #[test]
    fn test_email_address() {
        assert!(is_email_address("matthew.bonig@gmail.com"));
        assert!(!is_email_address("matthew.bonig"));
        assert!(!is_email_address("@gmail.com"));
        assert!(!is_email_address("a@b@c.com"));
        assert!(!is_email_address("a@localhost"));
    }
}
