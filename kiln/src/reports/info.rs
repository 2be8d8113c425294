//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Mark, Output, Report};

/// Report data from project info.
#[derive(Debug)]
pub struct InfoReport {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Author, with the email address when known.
    pub author: String,
    pub license: String,
    pub repository: String,
    /// Config file path.
    pub config_path: PathBuf,
    /// Classified dependencies in declaration order.
    pub dependencies: Vec<DependencyInfo>,
    /// Enabled publish targets.
    pub targets: Vec<TargetInfo>,
    /// Keys of publish blocks that are present but disabled.
    pub disabled_targets: Vec<String>,
    /// Paths rewritten on every synth.
    pub generated: Vec<String>,
    /// Paths written only when missing.
    pub samples: Vec<String>,
    /// Pipeline phases in run order.
    pub phases: Vec<StepInfo>,
    pub lints: Vec<StepInfo>,
}

#[derive(Debug)]
pub struct DependencyInfo {
    pub name: String,
    pub range: String,
    pub classification: String,
}

/// A named pipeline phase or lint.
#[derive(Debug)]
pub struct StepInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct TargetInfo {
    /// Ecosystem label (e.g. "PyPI").
    pub ecosystem: String,
    pub detail: String,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("{} v{}", self.name, self.version));
        out.line(&self.description);
        out.newline();

        out.key_value("Author", &self.author);
        out.key_value("License", &self.license);
        out.key_value("Repository", &self.repository);
        out.key_value("Config", &self.config_path.display().to_string());
        out.newline();

        out.section(&format!("Dependencies ({})", self.dependencies.len()));
        for dep in &self.dependencies {
            out.item(Mark::Bullet, &format!(
                "{} {} [{}]",
                dep.name, dep.range, dep.classification
            ));
        }
        out.newline();

        out.section("Publish targets");
        for target in &self.targets {
            out.item(Mark::Bullet, &format!("{}: {}", target.ecosystem, target.detail));
        }
        for key in &self.disabled_targets {
            out.item(Mark::Bullet, &format!("{}: disabled", key));
        }
        out.newline();

        out.section(&format!("Generated files ({})", self.generated.len()));
        for path in &self.generated {
            out.item(Mark::Bullet, path);
        }

        if !self.samples.is_empty() {
            out.newline();
            out.section("Sample files");
            for path in &self.samples {
                out.item(Mark::Bullet, path);
            }
        }

        out.newline();
        out.section("Pipeline");
        for phase in &self.phases {
            out.key_value(phase.name, phase.description);
        }
        out.section(&format!("Lints ({})", self.lints.len()));
        for lint in &self.lints {
            out.item(Mark::Bullet, &format!("{}: {}", lint.name, lint.description));
        }
    }
}
