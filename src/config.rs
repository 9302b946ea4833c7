//! Run configuration.
//!
//! A `Config` is built once by the CLI (or a test) and passed by reference
//! into column resolution and the streaming engine. Nothing mutates it after
//! construction.

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Immutable configuration for one run.
///
/// `field` and `selection` hold the user's raw selectors: symbolic column
/// names in header mode, decimal indices in no-header mode. Translation to
/// concrete indices happens in [`resolve`](crate::resolve).
#[derive(Debug, Clone)]
pub struct Config {
    /// Field delimiter, a single ASCII byte.
    pub delimiter: u8,
    /// When set, the first record is data, and selectors are numeric indices.
    pub no_headers: bool,
    /// Selector for the column tested against `pattern`.
    pub field: String,
    /// Substring a row's filter field must contain to match.
    pub pattern: String,
    /// Ordered projection selectors; duplicates and reordering are honored.
    pub selection: Vec<String>,
    /// Fail on projection selectors absent from the header row instead of
    /// silently dropping them.
    pub strict_selection: bool,
}

impl Config {
    /// Config with the given filter field and substring; comma delimiter,
    /// header mode, empty selection, lenient selection matching.
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            no_headers: false,
            field: field.into(),
            pattern: pattern.into(),
            selection: Vec::new(),
            strict_selection: false,
        }
    }

    /// Parse a `-s` style comma-separated selector list.
    ///
    /// An empty string means an empty selection, not one empty selector.
    /// The list is always comma-separated, independent of the delimiter.
    pub fn parse_selection(list: &str) -> Vec<String> {
        if list.is_empty() {
            Vec::new()
        } else {
            list.split(',').map(str::to_string).collect()
        }
    }
}
