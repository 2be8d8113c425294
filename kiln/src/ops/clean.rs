//! Clean operation - remove previously generated files.

use std::path::{Path, PathBuf};

use kiln_codegen::{Result, files::FILES_PATH, synth::tracked_files};
use kiln_core::OutputWriter;

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Project root containing generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes every file listed in the file manifest, then the manifest itself.
/// Sample files are never listed and are left alone.
pub fn clean(opts: CleanOptions) -> Result<CleanReport> {
    let mut tracked = tracked_files(opts.output_dir)?;
    let manifest = PathBuf::from(FILES_PATH);
    if !tracked.contains(&manifest) {
        tracked.push(manifest);
    }

    let deleted = if opts.dry_run {
        tracked
            .into_iter()
            .filter(|p| opts.output_dir.join(p).is_file())
            .collect()
    } else {
        OutputWriter::new(opts.output_dir).remove(&tracked)?
    };

    tracing::info!(
        root = %opts.output_dir.display(),
        dry_run = opts.dry_run,
        files = deleted.len(),
        "cleaned generated files"
    );

    Ok(CleanReport {
        dry_run: opts.dry_run,
        deleted: deleted.iter().map(|p| p.display().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::ops::{self, synth::SynthOptions, testing};

    fn synthesized() -> TempDir {
        let dir = TempDir::new().unwrap();
        ops::synth(
            &testing::descriptor(),
            SynthOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_clean_removes_generated_files() {
        let dir = synthesized();

        let report = clean(CleanOptions {
            output_dir: dir.path(),
            dry_run: false,
        })
        .unwrap();

        assert!(report.deleted.iter().any(|p| p == "package.json"));
        assert!(!dir.path().join("package.json").exists());
        assert!(!dir.path().join(FILES_PATH).exists());
        assert!(dir.path().join("src/index.ts").exists());
    }

    #[test]
    fn test_dry_run_keeps_files() {
        let dir = synthesized();

        let report = clean(CleanOptions {
            output_dir: dir.path(),
            dry_run: true,
        })
        .unwrap();

        assert!(report.has_deletions());
        assert!(dir.path().join("package.json").exists());
    }

    #[test]
    fn test_nothing_to_clean() {
        let dir = TempDir::new().unwrap();

        let report = clean(CleanOptions {
            output_dir: dir.path(),
            dry_run: false,
        })
        .unwrap();

        assert!(!report.has_deletions());
    }
}
