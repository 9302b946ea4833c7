//! # csvsift
//!
//! A streaming filter for delimited tabular text: keep rows whose value in a
//! designated field contains a substring, and emit selected columns of each
//! match, tab-joined, one row per line.
//!
//! It is a Unix-pipeline filter. Input comes from a file or stdin, matches go
//! to stdout in input order, and the stream is processed in a single pass
//! without loading it into memory.
//!
//! ## Overview
//!
//! A run has three phases:
//! - **Configuration**: an immutable [`Config`] built once up front.
//! - **Column resolution**: user-facing selectors (header names, or numeric
//!   indices under `no_headers`) become concrete column indices. Runs once,
//!   consuming the header row in header mode.
//! - **Streaming**: each remaining record is tested for substring containment
//!   in the filter field; matches are projected and written immediately.
//!
//! ## Example
//!
//! ```
//! use csvsift::{Config, run};
//!
//! let mut config = Config::new("age", "30");
//! config.selection = Config::parse_selection("name");
//!
//! let input = "name,age\nalice,30\nbob,25\ncarol,30\n";
//! let mut matches = Vec::new();
//! let stats = run(&config, input.as_bytes(), &mut matches).unwrap();
//!
//! assert_eq!(matches, b"alice\ncarol\n");
//! assert_eq!(stats.records_matched, 2);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod resolve;

pub use config::{Config, DEFAULT_DELIMITER};
pub use engine::{RunStats, run};
pub use error::Error;
pub use resolve::{Bindings, resolve_no_headers, resolve_with_headers};
