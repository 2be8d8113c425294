//! Init operation - write a starter descriptor.

use std::path::Path;

use eyre::{Context, Result};
use kiln_codegen::files::StarterDescriptor;
use kiln_core::{GeneratedFile, WriteResult};

use crate::reports::InitReport;

/// Execute the init operation.
///
/// An existing descriptor is never overwritten.
pub fn init(starter: &StarterDescriptor, output_dir: &Path) -> Result<InitReport> {
    let result = starter
        .write(output_dir)
        .wrap_err_with(|| format!("Failed to write {}", starter.path()))?;

    if result == WriteResult::Skipped {
        tracing::warn!(path = %starter.path(), "descriptor exists, left unchanged");
    }

    Ok(InitReport {
        name: starter.name.clone(),
        path: output_dir.join(starter.path()),
        created: result == WriteResult::Written,
    })
}

#[cfg(test)]
mod tests {
    use kiln_manifest::ProjectDescriptor;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_writes_parseable_descriptor() {
        let dir = TempDir::new().unwrap();
        let starter = StarterDescriptor::new("my-construct").with_author("Acme");

        let report = init(&starter, dir.path()).unwrap();

        assert!(report.created);
        let descriptor = ProjectDescriptor::from_file(&report.path).unwrap();
        assert_eq!(descriptor.name(), "my-construct");
    }

    #[test]
    fn test_init_keeps_existing_descriptor() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kiln.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let report = init(&StarterDescriptor::new("lib"), dir.path()).unwrap();

        assert!(!report.created);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# mine\n");
    }
}
