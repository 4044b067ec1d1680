use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename of the document being parsed.
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

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a syntax error from a serde_json error, pointing at its line and column.
    pub fn syntax_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Syntax {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line/column pair, if it falls inside `src`.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(eventmill::io),
        help("check that the file exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event model JSON")]
    #[diagnostic(code(eventmill::syntax))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected {expected}, found {found}")]
    #[diagnostic(
        code(eventmill::root_shape),
        help("the document root must be an object with an 'event-model' object inside")
    )]
    UnexpectedRootShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing required field '{field}' in {location}")]
    #[diagnostic(code(eventmill::missing_field))]
    MissingField { field: String, location: String },

    #[error("field '{field}' in {location} must be {expected}")]
    #[diagnostic(code(eventmill::invalid_field))]
    InvalidField {
        field: String,
        location: String,
        expected: &'static str,
    },

    #[error("invalid identifier '{value}' in {location}")]
    #[diagnostic(
        code(eventmill::invalid_uuid),
        help("identifiers must be UUIDs, e.g. 'e3b0c442-98fc-1c14-9afb-4c8996fb9242'")
    )]
    InvalidUuid {
        value: String,
        location: String,
        #[source]
        source: uuid::Error,
    },
}

impl Error {
    pub fn missing_field(field: impl Into<String>, location: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingField {
            field: field.into(),
            location: location.into(),
        })
    }

    pub fn invalid_field(
        field: impl Into<String>,
        location: impl Into<String>,
        expected: &'static str,
    ) -> Box<Self> {
        Box::new(Error::InvalidField {
            field: field.into(),
            location: location.into(),
            expected,
        })
    }

    pub fn invalid_uuid(
        value: impl Into<String>,
        location: impl Into<String>,
        source: uuid::Error,
    ) -> Box<Self> {
        Box::new(Error::InvalidUuid {
            value: value.into(),
            location: location.into(),
            source,
        })
    }
}
