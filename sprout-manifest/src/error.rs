use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for sprout-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'sprout init' to create a starter sprout.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sprout.toml")]
    #[diagnostic(code(sprout::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(sprout::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },

    #[error("invalid {context} '{name}'")]
    #[diagnostic(
        code(sprout::invalid_identifier),
        help("{reason}")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate field '{name}'")]
    #[diagnostic(
        code(sprout::duplicate_field),
        help("field names must be unique; remove or rename one of the declarations")
    )]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        name: String,
    },

    #[error("multiple fields are marked 'id = true'")]
    #[diagnostic(
        code(sprout::multiple_ids),
        help("at most one field may carry the identifier marker")
    )]
    MultipleIdMarkers {
        #[source_code]
        src: NamedSource<String>,
    },
}

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            message: message.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn duplicate_field_error(&self, name: impl Into<String>) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            name: name.into(),
        })
    }

    pub fn multiple_id_markers_error(&self) -> Box<Error> {
        Box::new(Error::MultipleIdMarkers {
            src: self.named_source(),
        })
    }
}
