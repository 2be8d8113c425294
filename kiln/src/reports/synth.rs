//! Synth command report data structures.

use std::path::PathBuf;

use kiln_codegen::pipeline::Diagnostic;
use kiln_core::WriteSummary;

use super::output::{Mark, Output, Report};

/// Report data from a synthesis run.
#[derive(Debug)]
pub struct SynthReport {
    /// Package name from the descriptor.
    pub name: String,
    /// Package version from the descriptor.
    pub version: String,
    /// Warnings recorded by the pipeline.
    pub warnings: Vec<Diagnostic>,
    /// Files written or previewed.
    pub result: SynthResult,
}

/// Result of synthesis.
#[derive(Debug)]
pub enum SynthResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Project root.
    pub output_dir: PathBuf,
    /// What the writer did.
    pub summary: WriteSummary,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for SynthReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(warning);
        }

        match &self.result {
            SynthResult::Written(written) => self.render_written(out, written),
            SynthResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl SynthReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        let summary = &written.summary;

        out.title(&format!("{} v{}", self.name, self.version));
        out.key_value("Project", &written.output_dir.display().to_string());
        out.newline();

        if !summary.written.is_empty() {
            out.section(&format!("Written ({})", summary.written.len()));
            for path in &summary.written {
                out.item(Mark::Added, &path.display().to_string());
            }
        }

        if !summary.skipped.is_empty() {
            out.newline();
            out.section("Kept (already present)");
            for path in &summary.skipped {
                out.item(Mark::Bullet, &path.display().to_string());
            }
        }

        if !summary.removed.is_empty() {
            out.newline();
            out.section("Removed (no longer generated)");
            for path in &summary.removed {
                out.item(Mark::Removed, &path.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.file(&file.path, &file.content);
        }
        out.line(&format!("{} files would be generated", files.len()));
    }
}
