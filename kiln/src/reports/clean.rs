//! Result of `kiln clean`.

use super::output::{Mark, Output, Report};

#[derive(Debug)]
pub struct CleanReport {
    pub dry_run: bool,
    /// Removed (or, on a dry run, removable) paths relative to the project root.
    pub deleted: Vec<String>,
}

impl CleanReport {
    pub fn has_deletions(&self) -> bool {
        !self.deleted.is_empty()
    }
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.has_deletions() {
            out.line("Nothing to clean: no tracked files on disk.");
            return;
        }

        let verb = if self.dry_run { "Would remove" } else { "Removed" };
        out.section(&format!("{} {} file(s)", verb, self.deleted.len()));
        self.deleted.iter().for_each(|path| out.item(Mark::Removed, path));
        out.newline();
        out.line("Sample files are never removed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_dry_run_heading() {
        let report = CleanReport {
            dry_run: true,
            deleted: vec!["package.json".to_string(), ".kiln/files.json".to_string()],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.text().contains("Would remove 2 file(s)"));
        assert!(out.text().contains("package.json"));
    }

    #[test]
    fn test_nothing_to_clean() {
        let report = CleanReport {
            dry_run: false,
            deleted: Vec::new(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.has_deletions());
        assert!(out.text().starts_with("Nothing to clean"));
    }
}
