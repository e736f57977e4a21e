//! Error taxonomy for parsing, path lookup and output formatting.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DotcatError>;

/// Errors produced while reading a document, walking a dotted path or
/// rendering the resolved value.
#[derive(Debug, Error)]
pub enum DotcatError {
    /// The input file could not be read.
    #[error("could not read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown file extension or output format name.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File content is malformed for its detected format.
    #[error("could not parse {format}: {source}")]
    Parse {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("dotted path is empty")]
    EmptyPath,

    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("cannot access key '{0}' in non-map structure")]
    NotAMapping(String),

    #[error("key '{0}' is not a list")]
    NotASequence(String),

    #[error("invalid list index: {0}")]
    InvalidIndex(String),

    #[error("index out of bounds: {index} (length {len})")]
    IndexOutOfBounds { index: i64, len: usize },

    /// The value cannot be represented at the top level of the output format.
    #[error("{0} output requires a map structure")]
    UnsupportedShape(&'static str),

    /// An INI section value is not itself a mapping.
    #[error("INI section '{0}' must be a map")]
    InvalidSectionShape(String),

    /// The serializer rejected a value nested inside the document.
    #[error("could not format to {format}: {source}")]
    Serialize {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DotcatError {
    pub(crate) fn parse(
        format: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Parse { format, source: Box::new(source) }
    }

    pub(crate) fn serialize(
        format: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Serialize { format, source: Box::new(source) }
    }
}
