//! CLI for csvsift: filter delimited text by field substring, project columns.

use clap::Parser;
use csvsift::{Config, Error, run};
use std::fs::File;
use std::io::{self, Read};
use std::process;

/// Keep rows whose field contains a substring; print selected columns.
///
/// With two positional arguments (<field> <substring>), reads stdin. With
/// three, the first is an input file path. Matches go to stdout, one row per
/// line, selected fields tab-joined, in input order.
#[derive(Parser)]
#[command(name = "csvsift")]
struct Cli {
    /// [input-file] <field> <substring>
    #[arg(value_name = "ARGS")]
    args: Vec<String>,

    /// Field delimiter character
    #[arg(short = 'd', default_value = ",", value_name = "CHAR")]
    delimiter: char,

    /// Input has no header row; field and selection are numeric indices
    #[arg(long)]
    no_headers: bool,

    /// Fields to output (comma separated)
    #[arg(short = 's', default_value = "", value_name = "LIST")]
    select: String,

    /// Fail when a selected column is absent from the header row
    #[arg(long)]
    strict_selection: bool,

    /// Show input source and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.args.len() < 2 {
        eprintln!("{}", Error::MissingArguments);
        process::exit(1);
    }
    if cli.args.len() > 3 {
        eprintln!("Warning: ignoring extra arguments: {}", cli.args[3..].join(" "));
    }
    if !cli.delimiter.is_ascii() {
        eprintln!("{}", Error::InvalidDelimiter);
        process::exit(1);
    }

    let (source, field, pattern) = if cli.args.len() == 2 {
        (None, cli.args[0].clone(), cli.args[1].clone())
    } else {
        (
            Some(cli.args[0].clone()),
            cli.args[1].clone(),
            cli.args[2].clone(),
        )
    };

    let config = Config {
        delimiter: cli.delimiter as u8,
        no_headers: cli.no_headers,
        field,
        pattern,
        selection: Config::parse_selection(&cli.select),
        strict_selection: cli.strict_selection,
    };

    if cli.verbose {
        eprintln!("Input:     {}", source.as_deref().unwrap_or("(stdin)"));
        eprintln!("Delimiter: '{}'", cli.delimiter);
        eprintln!(
            "Mode:      {}",
            if cli.no_headers { "no headers" } else { "headers" }
        );
    }

    let input: Box<dyn Read> = match &source {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!(
                    "{}",
                    Error::SourceOpen {
                        path: path.clone(),
                        source: e,
                    }
                );
                process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    match run(&config, input, stdout.lock()) {
        Ok(stats) => {
            if cli.verbose {
                eprintln!(
                    "Records:   {} read -> {} matched",
                    stats.records_read, stats.records_matched
                );
            }
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
