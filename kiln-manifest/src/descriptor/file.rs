use std::path::{Path, PathBuf};

use super::ProjectDescriptor;
use crate::Result;

/// Represents a kiln.toml file with both raw content and parsed descriptor.
pub struct KilnToml {
    path: PathBuf,
    content: String,
    descriptor: ProjectDescriptor,
}

impl KilnToml {
    /// Open and parse a kiln.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| crate::Error::io(&path, e))?;
        let filename = path.display().to_string();
        let descriptor = ProjectDescriptor::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            descriptor,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed descriptor.
    pub fn descriptor(&self) -> &ProjectDescriptor {
        &self.descriptor
    }

    /// Directory holding the descriptor, used as the default output root.
    pub fn project_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kiln.toml");
        std::fs::write(
            &path,
            r#"[project]
name = "lib"
author = "Acme"
description = "A library"
repository_url = "https://github.com/acme/lib.git"
"#,
        )
        .unwrap();

        let kiln_toml = KilnToml::open(&path).unwrap();

        assert_eq!(kiln_toml.descriptor().name(), "lib");
        assert!(kiln_toml.content().starts_with("[project]"));
        assert_eq!(kiln_toml.project_dir(), temp.path());
    }

    #[test]
    fn test_project_dir_for_bare_filename() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kiln.toml");
        std::fs::write(
            &path,
            r#"[project]
name = "lib"
author = "Acme"
description = "A library"
repository_url = "https://github.com/acme/lib.git"
"#,
        )
        .unwrap();
        let mut kiln_toml = KilnToml::open(&path).unwrap();
        kiln_toml.path = PathBuf::from("kiln.toml");

        assert_eq!(kiln_toml.project_dir(), Path::new("."));
    }
}
