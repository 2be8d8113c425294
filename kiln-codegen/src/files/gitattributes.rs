//! `.gitattributes` generator.

use kiln_core::{FileRules, GeneratedFile};

use super::commented;
use crate::builder::CodeBuilder;

/// Marks every generated file as `linguist-generated`.
pub struct GitAttributes {
    paths: Vec<String>,
}

impl GitAttributes {
    /// `paths` are the generated paths, sorted on render.
    pub fn new(paths: impl IntoIterator<Item = String>) -> Self {
        let mut paths: Vec<String> = paths.into_iter().collect();
        paths.sort();
        paths.dedup();
        Self { paths }
    }
}

impl GeneratedFile for GitAttributes {
    fn path(&self) -> &str {
        ".gitattributes"
    }

    fn rules(&self) -> FileRules {
        commented()
    }

    fn render(&self) -> eyre::Result<String> {
        let mut builder = CodeBuilder::flat();
        builder.push_blank();
        for path in &self.paths {
            builder.push_line(&format!("/{} linguist-generated", path));
        }
        Ok(builder.build())
    }
}
