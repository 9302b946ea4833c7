//! Streaming row filter and projector.
//!
//! Consumes records one at a time from the tokenizer, tests the filter field
//! for substring containment, and writes the projected fields of matching
//! rows tab-joined to the sink. One pass, input order preserved, no row is
//! retained after it is written or discarded.

use std::io::{BufWriter, Read, Write};

use csv::{ReaderBuilder, StringRecord};

use crate::config::Config;
use crate::error::Error;
use crate::resolve::{resolve_no_headers, resolve_with_headers};

/// Record counters for one run, reported under `--verbose`.
///
/// `records_read` excludes the header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub records_read: usize,
    pub records_matched: usize,
}

/// Run the filter/projector over `input`, writing matches to `output`.
///
/// In header mode the first record is consumed for column resolution before
/// any filtering begins; an input with no records at all is an error there.
/// Ragged rows are tolerated: an index past the end of a record reads as the
/// empty string, for the filter field and projected fields alike.
///
/// Matching is plain substring containment, case-sensitive; the empty
/// pattern matches every record. Exhausting the source is the sole normal
/// termination, zero matches included.
pub fn run<R: Read, W: Write>(config: &Config, input: R, output: W) -> Result<RunStats, Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    // The same record buffer is reused for every read.
    let mut record = StringRecord::new();

    let bindings = if config.no_headers {
        resolve_no_headers(config)?
    } else {
        if !reader.read_record(&mut record)? {
            return Err(Error::MissingHeader);
        }
        resolve_with_headers(config, &record)?
    };

    let mut out = BufWriter::new(output);
    let mut stats = RunStats::default();
    let mut line = String::new();

    while reader.read_record(&mut record)? {
        stats.records_read += 1;
        if !field_at(&record, bindings.filter_index).contains(&config.pattern) {
            continue;
        }

        line.clear();
        for (rank, &index) in bindings.projection.iter().enumerate() {
            if rank > 0 {
                line.push('\t');
            }
            line.push_str(field_at(&record, index));
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
        stats.records_matched += 1;
    }

    out.flush()?;
    Ok(stats)
}

/// Field at `index`, or the empty string when the row is too short.
fn field_at(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run over a string input and return (stdout text, stats).
    fn sift(config: &Config, input: &str) -> (String, RunStats) {
        let mut out = Vec::new();
        let stats = run(config, input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    fn with_selection(field: &str, pattern: &str, selection: &[&str]) -> Config {
        let mut config = Config::new(field, pattern);
        config.selection = selection.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn test_header_mode_filter_and_project() {
        let config = with_selection("age", "30", &["name"]);
        let input = "name,age\nalice,30\nbob,25\ncarol,30\n";
        let (output, stats) = sift(&config, input);
        assert_eq!(output, "alice\ncarol\n");
        assert_eq!(stats.records_read, 3);
        assert_eq!(stats.records_matched, 2);
    }

    #[test]
    fn test_no_headers_numeric_selectors() {
        let mut config = with_selection("0", "4", &["1", "2"]);
        config.no_headers = true;
        let (output, _) = sift(&config, "1,2,3\n4,5,6\n");
        assert_eq!(output, "5\t6\n");
    }

    #[test]
    fn test_projection_in_selector_order() {
        let config = with_selection("a", "x", &["c", "a"]);
        let (output, _) = sift(&config, "a,b,c\nx,y,z\n");
        assert_eq!(output, "z\tx\n");
    }

    #[test]
    fn test_custom_delimiter() {
        let mut config = with_selection("a", "1", &["b"]);
        config.delimiter = b';';
        let (output, _) = sift(&config, "a;b\n1;1x\n");
        assert_eq!(output, "1x\n");
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let config = with_selection("name", "", &["name"]);
        let (output, stats) = sift(&config, "name\na\nb\nc\n");
        assert_eq!(output, "a\nb\nc\n");
        assert_eq!(stats.records_matched, 3);
    }

    #[test]
    fn test_zero_matches_is_clean() {
        let config = with_selection("name", "zzz", &["name"]);
        let (output, stats) = sift(&config, "name\na\nb\n");
        assert_eq!(output, "");
        assert_eq!(stats.records_read, 2);
        assert_eq!(stats.records_matched, 0);
    }

    #[test]
    fn test_empty_selection_writes_blank_lines() {
        // Joining zero fields still emits one line per match.
        let config = with_selection("name", "a", &[]);
        let (output, _) = sift(&config, "name\na\nxa\nb\n");
        assert_eq!(output, "\n\n");
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let config = with_selection("v", "1", &["v"]);
        let (output, _) = sift(&config, "v\n31\n12\n01\n");
        assert_eq!(output, "31\n12\n01\n");
    }

    #[test]
    fn test_full_projection_round_trips_fields() {
        let config = with_selection("b", "y", &["a", "b", "c"]);
        let (output, _) = sift(&config, "a,b,c\nx,y,z\nq,r,s\n");
        assert_eq!(output, "x\ty\tz\n");
    }

    #[test]
    fn test_ragged_row_projects_empty_strings() {
        let config = with_selection("a", "", &["a", "c"]);
        let (output, _) = sift(&config, "a,b,c\n1\n2,3,4\n");
        assert_eq!(output, "1\t\n2\t4\n");
    }

    #[test]
    fn test_ragged_row_short_of_filter_field_never_matches() {
        // Missing filter field reads as "", which only the empty pattern hits.
        let config = with_selection("c", "x", &["a"]);
        let (output, _) = sift(&config, "a,b,c\n1\n2,3,x\n");
        assert_eq!(output, "2\n");
    }

    #[test]
    fn test_quoted_fields_with_embedded_delimiter() {
        let config = with_selection("name", "li", &["note", "name"]);
        let input = "name,note\nalice,\"hi, there\"\nbob,\"he said \"\"no\"\"\"\n";
        let (output, _) = sift(&config, input);
        assert_eq!(output, "hi, there\talice\n");
    }

    #[test]
    fn test_substring_is_case_sensitive() {
        let config = with_selection("name", "AL", &["name"]);
        let (output, _) = sift(&config, "name\nalice\nALICE\n");
        assert_eq!(output, "ALICE\n");
    }

    #[test]
    fn test_empty_input_in_header_mode_is_fatal() {
        let config = Config::new("name", "a");
        let mut out = Vec::new();
        let err = run(&config, "".as_bytes(), &mut out).unwrap_err();
        assert!(matches!(err, Error::MissingHeader));
    }

    #[test]
    fn test_empty_input_without_headers_is_clean() {
        let mut config = Config::new("0", "a");
        config.no_headers = true;
        let mut out = Vec::new();
        let stats = run(&config, "".as_bytes(), &mut out).unwrap();
        assert_eq!(stats, RunStats::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let mut config = Config::new("0", "a");
        config.no_headers = true;
        let input: &[u8] = b"ok,row\n\xff\xfe,bad\n";
        let mut out = Vec::new();
        let err = run(&config, input, &mut out).unwrap_err();
        assert!(matches!(err, Error::Read(_)));
    }

    #[test]
    fn test_idempotent_across_runs() {
        let config = with_selection("age", "3", &["name", "age"]);
        let input = "name,age\nalice,30\nbob,25\ncarol,35\n";
        let first = sift(&config, input);
        let second = sift(&config, input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolution_errors_surface_before_any_output() {
        let config = with_selection("missing", "x", &["name"]);
        let mut out = Vec::new();
        let err = run(&config, "name\nalice\n".as_bytes(), &mut out).unwrap_err();
        assert!(matches!(err, Error::UnresolvedField(_)));
        assert!(out.is_empty());
    }
}
