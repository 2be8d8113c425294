//! Building descriptors in code.

use indexmap::IndexMap;
use kiln_core::Version;

use super::{ProjectDescriptor, ProjectInfo, default_license, default_release_branch};
use crate::{
    ConflictPolicy, DependencyLists, DependencyRef, Features, Result, TargetConfig,
    error::SourceContext,
};

const BUILDER_SOURCE: &str = "<builder>";

/// Fluent construction of a [`ProjectDescriptor`].
///
/// String inputs are parsed and the result validated in [`build`](Self::build),
/// so a built descriptor satisfies the same rules as a parsed `kiln.toml`.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    name: String,
    author: String,
    author_address: Option<String>,
    description: String,
    repository_url: String,
    default_release_branch: String,
    license: String,
    version: Version,
    keywords: Vec<String>,
    gitignore: Vec<String>,
    versions: IndexMap<String, Version>,
    runtime: Vec<String>,
    peer: Vec<String>,
    dev: Vec<String>,
    bundled: Vec<String>,
    conflict_policy: ConflictPolicy,
    features: Features,
    publish: IndexMap<String, TargetConfig>,
}

impl DescriptorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: String::new(),
            author_address: None,
            description: String::new(),
            repository_url: String::new(),
            default_release_branch: default_release_branch(),
            license: default_license(),
            version: Version::default(),
            keywords: Vec::new(),
            gitignore: Vec::new(),
            versions: IndexMap::new(),
            runtime: Vec::new(),
            peer: Vec::new(),
            dev: Vec::new(),
            bundled: Vec::new(),
            conflict_policy: ConflictPolicy::default(),
            features: Features::default(),
            publish: IndexMap::new(),
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn author_address(mut self, address: impl Into<String>) -> Self {
        self.author_address = Some(address.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = url.into();
        self
    }

    pub fn default_release_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_release_branch = branch.into();
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn gitignore<S: Into<String>>(mut self, rules: impl IntoIterator<Item = S>) -> Self {
        self.gitignore.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Pin a subsystem to a minimum version.
    pub fn version_constraint(mut self, subsystem: impl Into<String>, version: Version) -> Self {
        self.versions.insert(subsystem.into(), version);
        self
    }

    pub fn runtime<S: Into<String>>(mut self, deps: impl IntoIterator<Item = S>) -> Self {
        self.runtime.extend(deps.into_iter().map(Into::into));
        self
    }

    pub fn peer<S: Into<String>>(mut self, deps: impl IntoIterator<Item = S>) -> Self {
        self.peer.extend(deps.into_iter().map(Into::into));
        self
    }

    pub fn dev<S: Into<String>>(mut self, deps: impl IntoIterator<Item = S>) -> Self {
        self.dev.extend(deps.into_iter().map(Into::into));
        self
    }

    pub fn bundled<S: Into<String>>(mut self, deps: impl IntoIterator<Item = S>) -> Self {
        self.bundled.extend(deps.into_iter().map(Into::into));
        self
    }

    pub fn conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    pub fn features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// Add or replace the target for an ecosystem key.
    pub fn publish(mut self, ecosystem: impl Into<String>, target: TargetConfig) -> Self {
        self.publish.insert(ecosystem.into(), target);
        self
    }

    /// Parse string inputs and validate the assembled descriptor.
    pub fn build(self) -> Result<ProjectDescriptor> {
        let source = SourceContext::new("", BUILDER_SOURCE);

        let dependencies = DependencyLists {
            runtime: parse_refs(&source, "dependencies.runtime", &self.runtime)?,
            peer: parse_refs(&source, "dependencies.peer", &self.peer)?,
            dev: parse_refs(&source, "dependencies.dev", &self.dev)?,
            bundled: parse_refs(&source, "dependencies.bundled", &self.bundled)?,
            conflict_policy: self.conflict_policy,
        };

        let descriptor = ProjectDescriptor {
            project: ProjectInfo {
                name: self.name,
                author: self.author,
                author_address: self.author_address,
                description: self.description,
                repository_url: self.repository_url,
                default_release_branch: self.default_release_branch,
                license: self.license,
                version: self.version,
                keywords: self.keywords,
                gitignore: self.gitignore,
            },
            versions: self.versions,
            dependencies,
            features: self.features,
            publish: self.publish,
        };

        match descriptor.field_issues().into_iter().next() {
            Some(issue) => Err(source.validation_error(issue.field(), issue.message, None)),
            None => Ok(descriptor),
        }
    }
}

fn parse_refs(source: &SourceContext, field: &str, raw: &[String]) -> Result<Vec<DependencyRef>> {
    raw.iter()
        .map(|s| {
            s.parse::<DependencyRef>()
                .map_err(|message| source.validation_error(field, message, None))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn base() -> DescriptorBuilder {
        ProjectDescriptor::builder("@matthewbonig/state-machine")
            .author("Matthew Bonig")
            .author_address("matthew.bonig@gmail.com")
            .description("A Step Function state machine construct")
            .repository_url("https://github.com/mbonig/state-machine.git")
    }

    #[test]
    fn test_build_minimal() {
        let descriptor = base().build().unwrap();

        assert_eq!(descriptor.name(), "@matthewbonig/state-machine");
        assert_eq!(descriptor.project.default_release_branch, "main");
        assert!(descriptor.dependencies.is_empty());
        assert!(descriptor.publish.is_empty());
    }

    #[test]
    fn test_build_with_dependencies_and_targets() {
        let descriptor = base()
            .version_constraint("constructs", Version::new(10, 1, 203))
            .runtime(["lodash.merge", "case@^1.6.3"])
            .bundled(["lodash.merge"])
            .dev(["@types/js-yaml"])
            .publish("pypi", TargetConfig::pypi("mbonig.state-machine", "mbonig.state_machine"))
            .publish("go", TargetConfig::go("github.com/mbonig/state-machine").disabled())
            .build()
            .unwrap();

        assert_eq!(descriptor.dependencies.runtime[1].version(), Some("^1.6.3"));
        assert_eq!(descriptor.dependencies.dev[0].name(), "@types/js-yaml");
        assert_eq!(descriptor.versions["constructs"], Version::new(10, 1, 203));
        assert!(!descriptor.publish["go"].enabled);
    }

    #[test]
    fn test_build_requires_author() {
        let err = ProjectDescriptor::builder("lib")
            .description("desc")
            .repository_url("https://github.com/acme/lib.git")
            .build()
            .unwrap_err();

        assert_eq!(err.field(), Some("project.author"));
    }

    #[test]
    fn test_build_requires_description() {
        let err = ProjectDescriptor::builder("lib")
            .author("Acme")
            .repository_url("https://github.com/acme/lib.git")
            .build()
            .unwrap_err();

        assert_eq!(err.field(), Some("project.description"));
    }

    #[test]
    fn test_build_rejects_malformed_url() {
        let err = base().repository_url("github.com/mbonig").build().unwrap_err();

        assert_eq!(err.field(), Some("project.repository_url"));
        assert!(matches!(*err, Error::Validation { span: None, .. }));
    }

    #[test]
    fn test_build_rejects_bad_dependency() {
        let err = base().peer(["constructs@"]).build().unwrap_err();
        assert_eq!(err.field(), Some("dependencies.peer"));
    }

    #[test]
    fn test_build_rejects_bad_author_address() {
        let err = base().author_address("matthew").build().unwrap_err();
        assert_eq!(err.field(), Some("project.author_address"));
    }
}
