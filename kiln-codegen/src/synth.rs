//! Synthesizer: renders the complete output set for a project.

use std::{
    io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use kiln_core::{File, GeneratedFile, OutputWriter, Overwrite, WriteSummary};
use kiln_manifest::ProjectDescriptor;

use crate::{
    Error, Result,
    deps::DependencySet,
    files::{
        BuildWorkflow, DepsManifest, FILES_PATH, FilesManifest, GitAttributes, GitIgnore,
        NpmIgnore, PackageJson, ReleaseWorkflow, SampleIndex, SampleTest, SynthInput, TsConfigDev,
        UpgradeWorkflow,
    },
    targets::PublishTarget,
};

/// Turns a validated descriptor and its resolved inputs into files.
///
/// Performs no semantic validation. The only failure is a file that cannot
/// be serialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer;

impl Synthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(
        &self,
        descriptor: &ProjectDescriptor,
        dependencies: &DependencySet,
        targets: &[PublishTarget],
    ) -> Result<SynthOutput> {
        let input = SynthInput::new(descriptor, dependencies, targets);
        let features = &descriptor.features;

        let mut generators: Vec<Box<dyn GeneratedFile + '_>> = vec![
            Box::new(PackageJson::new(input)),
            Box::new(GitIgnore::new(input)),
            Box::new(NpmIgnore),
            Box::new(BuildWorkflow::new(input)),
            Box::new(ReleaseWorkflow::new(input)),
        ];
        if features.deps_upgrade {
            generators.push(Box::new(UpgradeWorkflow::new(input)));
        }
        if features.typescript_dev_config {
            generators.push(Box::new(TsConfigDev));
        }
        generators.push(Box::new(DepsManifest::new(dependencies)));

        let tracked: Vec<String> = generators
            .iter()
            .map(|g| g.path().to_string())
            .chain([".gitattributes".to_string(), FILES_PATH.to_string()])
            .collect();
        generators.push(Box::new(GitAttributes::new(tracked.clone())));
        generators.push(Box::new(FilesManifest::new(tracked)));

        if features.sample_code {
            generators.push(Box::new(SampleIndex));
            generators.push(Box::new(SampleTest));
        }

        let mut output = SynthOutput::default();
        for generator in &generators {
            let path = generator.path();
            let file = generator
                .to_file()
                .map_err(|e| Error::synthesis(path, e.to_string()))?;
            output.files.insert(path.to_string(), file);
        }

        tracing::debug!(files = output.len(), "synthesized project files");
        Ok(output)
    }
}

/// Rendered files keyed by path relative to the project root, in
/// generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthOutput {
    files: IndexMap<String, File>,
}

impl SynthOutput {
    pub fn get(&self, path: &str) -> Option<&File> {
        self.files.get(path)
    }

    /// Content of the file at `path`.
    pub fn content(&self, path: &str) -> Option<&str> {
        self.get(path).map(File::content)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Paths rewritten on every run.
    pub fn generated_paths(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|(_, f)| f.rules().overwrite == Overwrite::Always)
            .map(|(p, _)| p.as_str())
    }

    /// Paths written only when missing.
    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|(_, f)| f.rules().overwrite == Overwrite::IfMissing)
            .map(|(p, _)| p.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &File> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Commit the whole set below `root` and delete files a previous run
    /// generated that this run no longer does.
    pub fn write(&self, root: &Path) -> Result<WriteSummary> {
        let stale = tracked_files(root)?;
        let files: Vec<File> = self.files.values().cloned().collect();
        let summary = OutputWriter::new(root).commit(&files, &stale)?;

        tracing::info!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            removed = summary.removed.len(),
            "wrote project files"
        );
        Ok(summary)
    }
}

/// Paths recorded in `.kiln/files.json` below `root`.
///
/// A missing manifest yields no paths. An unreadable one is logged and
/// treated the same, so a corrupted manifest never blocks regeneration.
pub fn tracked_files(root: &Path) -> Result<Vec<PathBuf>> {
    let path = root.join(FILES_PATH);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(Error::Io {
                action: "read",
                path,
                source,
            });
        }
    };

    match FilesManifest::parse(&content) {
        Ok(manifest) => Ok(manifest.files.into_iter().map(PathBuf::from).collect()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed file manifest");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use kiln_manifest::Features;

    use super::*;
    use crate::files::{HASH_HEADER, testing};

    fn synthesize(descriptor: &ProjectDescriptor) -> SynthOutput {
        let (deps, targets) = testing::resolve(descriptor);
        Synthesizer::new()
            .synthesize(descriptor, &deps, &targets)
            .unwrap()
    }

    #[test]
    fn test_file_set() {
        let output = synthesize(&testing::descriptor());

        assert_eq!(
            output.paths().collect::<Vec<_>>(),
            vec![
                "package.json",
                ".gitignore",
                ".npmignore",
                ".github/workflows/build.yml",
                ".github/workflows/release.yml",
                ".github/workflows/upgrade-main.yml",
                ".kiln/deps.json",
                ".gitattributes",
                ".kiln/files.json",
                "src/index.ts",
                "test/hello.test.ts",
            ]
        );
        assert_eq!(
            output.samples().collect::<Vec<_>>(),
            vec!["src/index.ts", "test/hello.test.ts"]
        );
    }

    #[test]
    fn test_features_gate_files() {
        let mut descriptor = testing::descriptor();
        descriptor.features = Features {
            deps_upgrade: false,
            typescript_dev_config: true,
            sample_code: false,
        };
        let output = synthesize(&descriptor);

        assert!(output.get(".github/workflows/upgrade-main.yml").is_none());
        assert!(output.get("tsconfig.dev.json").is_some());
        assert_eq!(output.samples().count(), 0);
    }

    #[test]
    fn test_tracked_files_list_generated_paths() {
        let output = synthesize(&testing::descriptor());
        let manifest = FilesManifest::parse(output.content(FILES_PATH).unwrap()).unwrap();

        let mut expected: Vec<&str> = output.generated_paths().collect();
        expected.sort();
        assert_eq!(manifest.files, expected);
    }

    #[test]
    fn test_headers_on_comment_capable_files() {
        let output = synthesize(&testing::descriptor());

        assert!(output.content(".gitignore").unwrap().starts_with(HASH_HEADER));
        assert!(
            output
                .content(".github/workflows/release.yml")
                .unwrap()
                .starts_with(HASH_HEADER)
        );
        assert!(output.content("package.json").unwrap().starts_with('{'));
    }

    #[test]
    fn test_tracked_files_missing_and_malformed() {
        let temp = tempfile::tempdir().unwrap();
        assert!(tracked_files(temp.path()).unwrap().is_empty());

        std::fs::create_dir_all(temp.path().join(".kiln")).unwrap();
        std::fs::write(temp.path().join(FILES_PATH), "not json").unwrap();
        assert!(tracked_files(temp.path()).unwrap().is_empty());
    }
}
