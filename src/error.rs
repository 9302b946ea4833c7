//! Error types for configuration, column resolution, and streaming.

use std::io;
use thiserror::Error;

/// Fatal errors surfaced to the operator.
///
/// Every variant terminates processing; there is no retry or partial-result
/// mode. Output lines written before a mid-stream error stand.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer than two positional arguments were given.
    #[error("Missing arguments")]
    MissingArguments,

    /// No-header mode requires the filter field to be a numeric index.
    #[error("Field must be a number")]
    InvalidFilterField,

    /// No-header mode requires every projection selector to be numeric.
    #[error("Selection can only contain numbers")]
    InvalidSelection,

    /// The delimiter is restricted to one ASCII character by the tokenizer.
    #[error("Delimiter must be a single ASCII character")]
    InvalidDelimiter,

    /// Header mode, but no header cell matched the filter field name.
    #[error("No column named '{0}' in header row")]
    UnresolvedField(String),

    /// Strict selection mode, and a selector matched no header cell.
    #[error("No column named '{0}' in header row (strict selection)")]
    UnresolvedSelection(String),

    /// Header mode on an input with no records at all.
    #[error("Input is empty; expected a header row")]
    MissingHeader,

    /// The input file could not be opened.
    #[error("Cannot open '{path}': {source}")]
    SourceOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The tokenizer hit malformed content mid-stream.
    #[error("Read error: {0}")]
    Read(#[from] csv::Error),

    /// Writing to the output sink failed.
    #[error("Write error: {0}")]
    Io(#[from] io::Error),
}
