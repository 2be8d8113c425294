//! Rendering targets for command reports.

use kiln_codegen::pipeline::{Diagnostic, Severity};

/// How a list entry relates to the project on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bullet,
    Added,
    Removed,
}

impl Mark {
    fn symbol(self) -> char {
        match self {
            Mark::Bullet | Mark::Removed => '-',
            Mark::Added => '+',
        }
    }
}

/// Where a report is rendered.
///
/// Reports say what to show; implementations decide how.
pub trait Output {
    /// Heading for the whole report.
    fn title(&mut self, text: &str);

    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn item(&mut self, mark: Mark, text: &str);

    /// A pipeline finding, with the descriptor field it points at.
    fn diagnostic(&mut self, diagnostic: &Diagnostic);

    /// A generated file shown in full, as on a dry run.
    fn file(&mut self, path: &str, content: &str);

    fn line(&mut self, text: &str);

    fn newline(&mut self);
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain terminal output. Errors and warnings go to stderr.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{text}\n{}", "─".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        println!("{name}:");
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("  {key:<12}{value}");
    }

    fn item(&mut self, mark: Mark, text: &str) {
        println!("  {} {text}", mark.symbol());
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        let rendered = render_diagnostic(diagnostic);
        match diagnostic.severity {
            Severity::Info => println!("{rendered}"),
            Severity::Error | Severity::Warning => eprintln!("{rendered}"),
        }
    }

    fn file(&mut self, path: &str, content: &str) {
        println!("── {path} ──\n{content}");
    }

    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn newline(&mut self) {
        println!();
    }
}

/// `severity: message`, then an arrow to the field when there is one.
fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    match &diagnostic.field {
        Some(field) => format!(
            "{}: {}\n  --> {}",
            diagnostic.severity, diagnostic.message, field
        ),
        None => format!("{}: {}", diagnostic.severity, diagnostic.message),
    }
}
