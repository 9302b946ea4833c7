//! Column resolution: translating user-facing selectors into record indices.
//!
//! Two modes:
//! - No-header mode: selectors are decimal indices and only need parsing.
//! - Header mode: selectors are column names, resolved against the header
//!   row (the first record of the input).
//!
//! Resolution runs exactly once per invocation; the resulting [`Bindings`]
//! are read-only for the remainder of the stream.

use csv::StringRecord;

use crate::config::Config;
use crate::error::Error;

/// Concrete column indices derived from a [`Config`] and (in header mode)
/// the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    /// Index of the column tested for substring containment.
    pub filter_index: usize,
    /// Indices emitted for each matching row, in output order.
    pub projection: Vec<usize>,
}

/// Resolve selectors in no-header mode by parsing them as indices.
///
/// The filter selector must be a non-negative integer, and so must every
/// projection selector. Either failure is fatal before any row is read.
pub fn resolve_no_headers(config: &Config) -> Result<Bindings, Error> {
    let filter_index: usize = config
        .field
        .parse()
        .map_err(|_| Error::InvalidFilterField)?;

    let mut projection = Vec::with_capacity(config.selection.len());
    for selector in &config.selection {
        let index: usize = selector.parse().map_err(|_| Error::InvalidSelection)?;
        projection.push(index);
    }

    Ok(Bindings {
        filter_index,
        projection,
    })
}

/// Resolve selectors in header mode against the header row.
///
/// Filter field: header cells are scanned left to right and each match
/// overwrites the previous binding, so with duplicate header names the last
/// position wins. A filter name absent from the header is a fatal error.
///
/// Projection: for each selector, in the order given, collect every header
/// position whose cell equals the selector, in header-position order. This
/// honors the user's output order first, and header order within one
/// selector. A selector matching nothing contributes no index; under
/// `strict_selection` it is a fatal error instead.
pub fn resolve_with_headers(config: &Config, header: &StringRecord) -> Result<Bindings, Error> {
    let mut filter_index = None;
    for (n, cell) in header.iter().enumerate() {
        if cell == config.field {
            filter_index = Some(n);
        }
    }
    let filter_index =
        filter_index.ok_or_else(|| Error::UnresolvedField(config.field.clone()))?;

    let mut projection = Vec::with_capacity(config.selection.len());
    for selector in &config.selection {
        let before = projection.len();
        for (n, cell) in header.iter().enumerate() {
            if cell == selector {
                projection.push(n);
            }
        }
        if config.strict_selection && projection.len() == before {
            return Err(Error::UnresolvedSelection(selector.clone()));
        }
    }

    Ok(Bindings {
        filter_index,
        projection,
    })
}
