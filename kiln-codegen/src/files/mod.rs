//! One generator per output file.
//!
//! Every generator borrows a [`SynthInput`] and implements
//! [`GeneratedFile`](kiln_core::GeneratedFile).

mod gitattributes;
mod ignore;
mod kiln_toml;
mod manifest;
mod package_json;
mod samples;
mod tsconfig;
mod workflows;

use kiln_core::{FileRules, Overwrite};
use kiln_manifest::ProjectDescriptor;

pub use gitattributes::GitAttributes;
pub use ignore::{GitIgnore, NpmIgnore};
pub use kiln_toml::{KILN_TOML, StarterDescriptor};
pub use manifest::{DEPS_PATH, DepsManifest, FILES_PATH, FilesManifest};
pub use package_json::PackageJson;
pub use samples::{SampleIndex, SampleTest};
pub use tsconfig::TsConfigDev;
pub use workflows::{BuildWorkflow, ReleaseWorkflow, UpgradeWorkflow};

use crate::{
    deps::DependencySet,
    targets::{Ecosystem, PublishTarget},
};

/// Marker carried by every generated file. JSON files store it under `"//"`.
pub const MARKER: &str = "~~ Generated by kiln. To modify, edit kiln.toml and run \"kiln synth\".";

/// [`MARKER`] as a `#` comment line.
pub const HASH_HEADER: &str =
    "# ~~ Generated by kiln. To modify, edit kiln.toml and run \"kiln synth\".";

/// Everything a generator may read.
#[derive(Debug, Clone, Copy)]
pub struct SynthInput<'a> {
    pub descriptor: &'a ProjectDescriptor,
    pub dependencies: &'a DependencySet,
    pub targets: &'a [PublishTarget],
}

impl<'a> SynthInput<'a> {
    pub fn new(
        descriptor: &'a ProjectDescriptor,
        dependencies: &'a DependencySet,
        targets: &'a [PublishTarget],
    ) -> Self {
        Self {
            descriptor,
            dependencies,
            targets,
        }
    }

    /// The enabled target for `ecosystem`, if any.
    pub fn target(&self, ecosystem: Ecosystem) -> Option<&'a PublishTarget> {
        self.targets.iter().find(|t| t.ecosystem() == ecosystem)
    }

    /// pacmak targets to package: `js` first, then one per non-npm target.
    pub fn pacmak_targets(&self) -> Vec<&'static str> {
        std::iter::once(Ecosystem::Npm.pacmak_target())
            .chain(
                self.targets
                    .iter()
                    .map(PublishTarget::ecosystem)
                    .filter(|e| *e != Ecosystem::Npm)
                    .map(|e| e.pacmak_target()),
            )
            .collect()
    }

    pub fn default_branch(&self) -> &'a str {
        &self.descriptor.project.default_release_branch
    }
}

/// Rules for files that accept `#` comments.
pub(crate) fn commented() -> FileRules {
    FileRules {
        overwrite: Overwrite::Always,
        header: Some(HASH_HEADER),
    }
}

/// Render a serializable value as pretty JSON with a trailing newline.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> eyre::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
pub(crate) mod testing {
    use kiln_core::Version;
    use kiln_manifest::{NpmAccess, ProjectDescriptor, TargetConfig};

    use crate::{
        deps::{DependencyClassifier, DependencySet},
        targets::{PublishTarget, TargetRegistry},
    };

    pub fn descriptor() -> ProjectDescriptor {
        ProjectDescriptor::builder("@matthewbonig/state-machine")
            .author("Matthew Bonig")
            .author_address("matthew.bonig@gmail.com")
            .description("A Step Function state machine construct")
            .repository_url("https://github.com/mbonig/state-machine.git")
            .keywords(["awscdk", "cdk", "AWS Step Functions"])
            .gitignore([".idea/"])
            .version_constraint("aws-cdk-lib", Version::new(2, 53, 0))
            .version_constraint("constructs", Version::new(10, 1, 203))
            .runtime(["lodash.merge", "case", "js-yaml"])
            .peer(["constructs"])
            .dev(["@types/js-yaml"])
            .bundled(["lodash.merge", "case", "js-yaml"])
            .publish("npm", TargetConfig::npm(NpmAccess::Public))
            .publish("go", TargetConfig::go("github.com/mbonig/state-machine").disabled())
            .publish(
                "pypi",
                TargetConfig::pypi("mbonig.state-machine", "mbonig.state_machine"),
            )
            .build()
            .unwrap()
    }

    pub fn resolve(descriptor: &ProjectDescriptor) -> (DependencySet, Vec<PublishTarget>) {
        let deps = DependencyClassifier::new()
            .with_constraints(&descriptor.versions)
            .classify(&descriptor.dependencies)
            .unwrap();
        let targets = TargetRegistry::new()
            .resolve(descriptor.name(), &descriptor.publish)
            .unwrap();
        (deps, targets)
    }
}
