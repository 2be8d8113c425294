//! The project descriptor and its `kiln.toml` representation.

mod builder;
mod file;
mod validate;

use std::{path::Path, str::FromStr};

pub use builder::DescriptorBuilder;
pub use file::KilnToml;
use indexmap::IndexMap;
use kiln_core::Version;
use serde::Deserialize;
pub use validate::{FieldIssue, ParseContext, has_control_chars};

use crate::{DependencyLists, Error, Features, Result, TargetConfig};

/// Root descriptor for kiln.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDescriptor {
    /// Project identity and metadata
    pub project: ProjectInfo,

    /// Pinned subsystem versions (e.g. `aws-cdk-lib = "2.53.0"`)
    #[serde(default)]
    pub versions: IndexMap<String, Version>,

    /// Declared dependencies
    #[serde(default)]
    pub dependencies: DependencyLists,

    /// Feature toggles
    #[serde(default)]
    pub features: Features,

    /// Publish targets keyed by ecosystem
    #[serde(default)]
    pub publish: IndexMap<String, TargetConfig>,
}

/// The `[project]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectInfo {
    /// Package name, optionally scoped (`@scope/name`)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub author: String,

    /// Author email address
    #[serde(default)]
    pub author_address: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Checked against [`RepositoryUrl`] during validation.
    #[serde(default)]
    pub repository_url: String,

    #[serde(default = "default_release_branch")]
    pub default_release_branch: String,

    /// SPDX license identifier
    #[serde(default = "default_license")]
    pub license: String,

    /// Version written to the package manifest before release tooling bumps it
    #[serde(default)]
    pub version: Version,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// Extra `.gitignore` rules appended to the defaults
    #[serde(default)]
    pub gitignore: Vec<String>,
}

pub(crate) fn default_release_branch() -> String {
    "main".to_string()
}

pub(crate) fn default_license() -> String {
    "Apache-2.0".to_string()
}

impl FromStr for ProjectDescriptor {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "kiln.toml")
    }
}

impl ProjectDescriptor {
    /// Start building a descriptor in code.
    pub fn builder(name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(name)
    }

    /// Parse a kiln.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a kiln.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = ParseContext::new(content, filename);
        let descriptor: Self =
            toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;
        descriptor.validate(&ctx)?;
        Ok(descriptor)
    }

    /// Package name
    pub fn name(&self) -> &str {
        &self.project.name
    }

    /// Fail on the first field issue, pointing at its location in the source.
    fn validate(&self, ctx: &ParseContext) -> Result<()> {
        match self.field_issues().into_iter().next() {
            Some(issue) => Err(ctx.issue_error(&issue)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConflictPolicy, NpmAccess};

    const STATE_MACHINE: &str = r#"
[project]
name = "@matthewbonig/state-machine"
author = "Matthew Bonig"
author_address = "matthew.bonig@gmail.com"
description = "A Step Function state machine construct focused on working well with the Workflow Studio"
repository_url = "https://github.com/mbonig/state-machine.git"
keywords = ["awscdk", "cdk", "AWS Step Functions"]
gitignore = [".idea/"]

[versions]
aws-cdk-lib = "2.53.0"
constructs = "10.1.203"

[dependencies]
runtime = ["lodash.merge", "case", "js-yaml"]
peer = ["constructs"]
dev = ["@types/js-yaml"]
bundled = ["lodash.merge", "case", "js-yaml"]

[features]
deps_upgrade = false
typescript_dev_config = true

[publish.npm]
access = "public"

[publish.go]
enabled = false
module_name = "github.com/mbonig/state-machine"

[publish.pypi]
dist_name = "mbonig.state-machine"
module = "mbonig.state_machine"
"#;

    #[test]
    fn test_parse_full_descriptor() {
        let descriptor = ProjectDescriptor::from_str(STATE_MACHINE).unwrap();

        assert_eq!(descriptor.name(), "@matthewbonig/state-machine");
        assert_eq!(descriptor.project.default_release_branch, "main");
        assert_eq!(descriptor.project.license, "Apache-2.0");
        assert_eq!(descriptor.project.version, Version::default());
        assert_eq!(
            descriptor.project.keywords,
            vec!["awscdk", "cdk", "AWS Step Functions"]
        );
        assert_eq!(
            descriptor.versions.keys().collect::<Vec<_>>(),
            vec!["aws-cdk-lib", "constructs"]
        );
        assert_eq!(descriptor.dependencies.bundled.len(), 3);
        assert_eq!(descriptor.dependencies.conflict_policy, ConflictPolicy::Error);
        assert!(!descriptor.features.deps_upgrade);
        assert_eq!(
            descriptor.publish.keys().collect::<Vec<_>>(),
            vec!["npm", "go", "pypi"]
        );
        assert_eq!(descriptor.publish["npm"].access, Some(NpmAccess::Public));
        assert!(!descriptor.publish["go"].enabled);
    }

    #[test]
    fn test_missing_required_field_names_field() {
        let err = ProjectDescriptor::from_str(
            r#"
            [project]
            name = "lib"
            description = "desc"
            repository_url = "https://github.com/acme/lib.git"
            "#,
        )
        .unwrap_err();

        assert_eq!(err.field(), Some("project.author"));
        match *err {
            Error::Validation { span, .. } => assert!(span.is_some(), "points at [project]"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_author_is_validation_error() {
        let err = ProjectDescriptor::from_str(
            r#"
            [project]
            name = "lib"
            author = "  "
            description = "desc"
            repository_url = "https://github.com/acme/lib.git"
            "#,
        )
        .unwrap_err();

        assert_eq!(err.field(), Some("project.author"));
        match *err {
            Error::Validation { span, .. } => assert!(span.is_some()),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        let err = ProjectDescriptor::from_str(
            r#"
            [project]
            name = "lib"
            author = "Acme"
            description = "desc"
            repository_url = "not a url"
            "#,
        )
        .unwrap_err();

        assert_eq!(err.field(), Some("project.repository_url"));
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_malformed_version_constraint_is_rejected() {
        let err = ProjectDescriptor::from_str(
            r#"
            [project]
            name = "lib"
            author = "Acme"
            description = "desc"
            repository_url = "https://github.com/acme/lib.git"

            [versions]
            constructs = "^10"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let result = ProjectDescriptor::from_str(
            r#"
            [project]
            name = "lib"
            author = "Acme"
            description = "desc"
            repository_url = "https://github.com/acme/lib.git"

            [deps]
            runtime = ["case"]
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let err = ProjectDescriptor::from_file("/nonexistent/kiln.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
