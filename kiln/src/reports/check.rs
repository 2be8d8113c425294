//! Result of `kiln check`.

use std::path::PathBuf;

use kiln_codegen::pipeline::{Diagnostic, Severity};

use super::output::{Output, Report};

#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    /// Every finding, errors first, in the order they were recorded.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn new(config_path: impl Into<PathBuf>, mut diagnostics: Vec<Diagnostic>) -> Self {
        diagnostics.sort_by_key(|d| d.severity);
        Self {
            config_path: config_path.into(),
            diagnostics,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            out.diagnostic(diagnostic);
        }
        if self.diagnostics.iter().any(|d| d.severity != Severity::Info) {
            out.newline();
        }

        let path = self.config_path.display();
        match self.errors().count() {
            0 => out.line(&format!("✓ {path} is valid")),
            1 => out.line(&format!("✗ {path} has 1 error")),
            n => out.line(&format!("✗ {path} has {n} errors")),
        }
    }
}
