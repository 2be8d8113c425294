//! Synth operation - run the pipeline and write the project files.

use std::path::Path;

use kiln_codegen::{
    Result,
    pipeline::{Pipeline, TracingPlugin},
};
use kiln_manifest::ProjectDescriptor;

use crate::reports::{PreviewFile, SynthReport, SynthResult, WrittenResult};

/// Options for the synth operation.
pub struct SynthOptions<'a> {
    /// Project root to write into.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the synth operation.
///
/// Either every file is written or none is.
pub fn synth(descriptor: &ProjectDescriptor, opts: SynthOptions) -> Result<SynthReport> {
    let mut ctx = Pipeline::new()
        .plugin(TracingPlugin)
        .run(descriptor.clone())?;

    let warnings = ctx.warnings().cloned().collect();
    let output = ctx.take_output()?;

    let result = if opts.dry_run {
        tracing::info!(files = output.len(), "dry run, nothing written");
        SynthResult::Preview(
            output
                .iter()
                .map(|f| PreviewFile {
                    path: f.path().display().to_string(),
                    content: f.content().to_string(),
                })
                .collect(),
        )
    } else {
        let summary = output.write(opts.output_dir).inspect_err(|e| {
            tracing::error!(
                error = %e,
                output_dir = %opts.output_dir.display(),
                "write failed, project left unchanged"
            );
        })?;
        SynthResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            summary,
        })
    };

    Ok(SynthReport {
        name: descriptor.name().to_string(),
        version: descriptor.project.version.to_string(),
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::ops::testing;

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let report = synth(
            &testing::descriptor(),
            SynthOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        match report.result {
            SynthResult::Preview(files) => {
                assert!(files.iter().any(|f| f.path == "package.json"));
            }
            SynthResult::Written(_) => panic!("expected a preview"),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_writes_project() {
        let dir = TempDir::new().unwrap();
        let report = synth(
            &testing::descriptor(),
            SynthOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(matches!(report.result, SynthResult::Written(_)));
        assert!(dir.path().join("package.json").is_file());
        assert!(dir.path().join(".kiln/files.json").is_file());
    }

    #[test]
    fn test_conflict_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let descriptor = ProjectDescriptor::builder("lib")
            .author("Acme")
            .description("A construct library")
            .repository_url("https://github.com/acme/lib.git")
            .runtime(["constructs"])
            .peer(["constructs"])
            .build()
            .unwrap();

        let result = synth(
            &descriptor,
            SynthOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        );

        assert!(matches!(result, Err(kiln_codegen::Error::Conflict { .. })));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_blocked_write_reports_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("package.json")).unwrap();

        let result = synth(
            &testing::descriptor(),
            SynthOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        );

        assert!(result.is_err());
        assert!(dir.path().join("package.json").is_dir());
        assert!(!dir.path().join(".kiln").exists());
    }
}
