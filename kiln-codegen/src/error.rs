use std::path::PathBuf;

use kiln_core::WriteError;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a synthesis run. Every variant halts the pipeline.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid '{field}': {message}")]
    #[diagnostic(code(kiln::validation_error))]
    Validation { field: String, message: String },

    #[error("dependency '{name}' {message}")]
    #[diagnostic(code(kiln::dependency_conflict))]
    Conflict {
        name: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("unsupported publish target '{key}'")]
    #[diagnostic(code(kiln::unsupported_target), help("supported targets are: {supported}"))]
    UnsupportedTarget { key: String, supported: String },

    #[error("failed to render '{path}': {message}")]
    #[diagnostic(code(kiln::synthesis_error))]
    Synthesis { path: String, message: String },

    #[error("failed to {action} '{}'", path.display())]
    #[diagnostic(code(kiln::io_error))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn conflict(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Conflict {
            name: name.into(),
            message: message.into(),
            help: None,
        }
    }

    pub fn synthesis(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Synthesis {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<WriteError> for Error {
    fn from(e: WriteError) -> Self {
        Error::Io {
            action: e.action,
            path: e.path,
            source: e.source,
        }
    }
}
