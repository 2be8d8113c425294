use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the project root
    fn path(&self) -> &str;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body (without the generated-file header)
    fn render(&self) -> Result<String>;

    /// Render the full file content, header included
    fn contents(&self) -> Result<String> {
        let body = self.render()?;
        Ok(match self.rules().header {
            Some(header) => format!("{}\n{}", header, body),
            None => body,
        })
    }

    /// Render into an in-memory [`File`]
    fn to_file(&self) -> Result<File> {
        Ok(File::new(self.path(), self.contents()?).with_rules(self.rules()))
    }

    /// Write the file below `base`
    fn write(&self, base: &Path) -> Result<WriteResult> {
        self.to_file()?.write(base)
    }
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A rendered file, addressed relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the relative file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the write rules
    pub fn rules(&self) -> &FileRules {
        &self.rules
    }

    /// Check if the file already exists below `base`
    pub fn exists_in(&self, base: &Path) -> bool {
        base.join(&self.path).exists()
    }

    /// Write the file below `base` according to its rules
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        if self.rules.overwrite == Overwrite::IfMissing && self.exists_in(base) {
            return Ok(WriteResult::Skipped);
        }
        write_file(&base.join(&self.path), &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Marker line prepended to the rendered body
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for user-owned starter files
    pub fn sample() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated files)
    Always,
    /// Only create if file doesn't exist (samples)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
