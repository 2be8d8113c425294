//! Descriptor errors, rendered by miette with the offending source.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors are boxed: the miette source makes the enum large.
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read descriptor '{}'", path.display())]
    #[diagnostic(
        code(kiln::io),
        help("run 'kiln init <name>' to create a new descriptor")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("kiln.toml is not a valid descriptor")]
    #[diagnostic(code(kiln::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} {message}")]
    #[diagnostic(code(kiln::invalid_field))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        field: String,
        message: String,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Dotted path of the rejected field, for validation errors.
    pub fn field(&self) -> Option<&str> {
        if let Error::Validation { field, .. } = self {
            Some(field)
        } else {
            None
        }
    }
}

/// The descriptor text an error points into.
#[derive(Debug, Clone)]
pub struct SourceContext {
    name: String,
    text: String,
}

impl SourceContext {
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.text
    }

    fn named(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    /// A validation error, labelled at `span` when the field was located.
    pub fn validation_error(
        &self,
        field: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named(),
            span,
            field: field.into(),
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = SourceContext::new("", "kiln.toml").validation_error(
            "project.author",
            "must not be empty",
            None,
        );

        assert_eq!(err.to_string(), "project.author must not be empty");
        assert_eq!(err.field(), Some("project.author"));
    }

    #[test]
    fn test_parse_error_carries_span() {
        let src = "[project\n";
        let toml_err = toml::from_str::<toml::Table>(src).unwrap_err();
        let err = SourceContext::new(src, "kiln.toml").parse_error(toml_err);

        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
        assert_eq!(err.field(), None);
    }
}
