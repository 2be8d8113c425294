//! Result of `kiln init`.

use std::path::PathBuf;

use kiln_codegen::pipeline::Diagnostic;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InitReport {
    pub name: String,
    /// Path of the descriptor.
    pub path: PathBuf,
    /// False when a descriptor already existed.
    pub created: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if self.created {
            out.line(&format!("Created {} for {}", self.path.display(), self.name));
        } else {
            out.diagnostic(&Diagnostic::warning(
                "init",
                format!("{} already exists, leaving it untouched", self.path.display()),
            ));
        }
    }
}
