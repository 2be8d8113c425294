//! Findings recorded while a descriptor moves through the pipeline.

use std::fmt;

use serde::Serialize;

/// How serious a finding is.
///
/// Only [`Severity::Error`] halts the pipeline; the others are reported and
/// synthesis carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn is_error(&self) -> bool {
        *self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finding from a phase or lint, optionally tied to a descriptor field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the phase that recorded it.
    pub phase: String,
    pub message: String,
    /// Dotted descriptor path, e.g. `project.keywords`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, phase.into(), message.into())
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, phase.into(), message.into())
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, phase.into(), message.into())
    }

    fn with_severity(severity: Severity, phase: String, message: String) -> Self {
        Self {
            severity,
            phase,
            message,
            field: None,
        }
    }

    /// Point this finding at a descriptor field.
    pub fn at(self, field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..self
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}: {}", self.severity, field, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        assert!(Diagnostic::error("validate", "missing author").severity.is_error());
        assert_eq!(Diagnostic::warning("validate", "x").severity, Severity::Warning);
        assert_eq!(Diagnostic::info("resolve", "x").phase, "resolve");
    }

    #[test]
    fn test_display_names_field() {
        let diag = Diagnostic::warning("validate", "duplicate keyword 'cdk'").at("project.keywords");
        assert_eq!(
            diag.to_string(),
            "warning: project.keywords: duplicate keyword 'cdk'"
        );
        assert_eq!(
            Diagnostic::error("classify", "conflict").to_string(),
            "error: conflict"
        );
    }

    #[test]
    fn test_severity_order() {
        let mut severities = vec![Severity::Info, Severity::Error, Severity::Warning];
        severities.sort();
        assert_eq!(severities, vec![Severity::Error, Severity::Warning, Severity::Info]);
    }
}
