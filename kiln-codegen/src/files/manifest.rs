//! Bookkeeping files under `.kiln/`.

use kiln_core::{FileRules, GeneratedFile};
use serde::{Deserialize, Serialize};

use super::{MARKER, to_json};
use crate::deps::{DependencySet, DependencySpec};

pub const DEPS_PATH: &str = ".kiln/deps.json";
pub const FILES_PATH: &str = ".kiln/files.json";

/// `.kiln/deps.json`: the classified dependency list.
pub struct DepsManifest<'a> {
    dependencies: &'a DependencySet,
}

impl<'a> DepsManifest<'a> {
    pub fn new(dependencies: &'a DependencySet) -> Self {
        Self { dependencies }
    }
}

#[derive(Serialize)]
struct DepsDocument<'a> {
    dependencies: Vec<&'a DependencySpec>,
    #[serde(rename = "//")]
    marker: &'static str,
}

impl GeneratedFile for DepsManifest<'_> {
    fn path(&self) -> &str {
        DEPS_PATH
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> eyre::Result<String> {
        to_json(&DepsDocument {
            dependencies: self.dependencies.iter().collect(),
            marker: MARKER,
        })
    }
}

/// `.kiln/files.json`: every generated path, read back on the next run to
/// find stale files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilesManifest {
    pub files: Vec<String>,
}

#[derive(Serialize)]
struct FilesDocument<'a> {
    files: &'a [String],
    #[serde(rename = "//")]
    marker: &'static str,
}

impl FilesManifest {
    /// `files` is stored sorted.
    pub fn new(files: impl IntoIterator<Item = String>) -> Self {
        let mut files: Vec<String> = files.into_iter().collect();
        files.sort();
        files.dedup();
        Self { files }
    }

    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

impl GeneratedFile for FilesManifest {
    fn path(&self) -> &str {
        FILES_PATH
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> eyre::Result<String> {
        to_json(&FilesDocument {
            files: &self.files,
            marker: MARKER,
        })
    }
}
