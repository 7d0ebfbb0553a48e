//! `strprofile` - identify who a DNA sequence belongs to.
//!
//! # Usage
//!
//! ```bash
//! strprofile databases/large.csv sequences/5.txt
//! strprofile -d '\t' -n person --trim all profiles.tsv sample.txt
//! RUST_LOG=strprofile=debug strprofile --counts small.csv 1.txt
//! ```
//!
//! Prints the matching name, or `No match`. Exits 0 whenever the comparison
//! ran, 1 when an input could not be read, 2 on bad arguments.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use strprofile::prelude::*;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "strprofile",
    version,
    about = "Identify an individual from a DNA sequence by STR counts"
)]
struct Cli {
    /// Profile database: a name column plus one repeat-count column per STR.
    #[arg(value_name = "DATABASE")]
    database: PathBuf,

    /// Text file holding the DNA sequence.
    #[arg(value_name = "SEQUENCE")]
    sequence: PathBuf,

    /// Field delimiter of the database (a single character, `\t` for tab).
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// Header of the name column (default: the first column).
    #[arg(short, long, value_name = "NAME")]
    name_field: Option<String>,

    /// Whitespace handling for the sequence: none, ends or all.
    #[arg(long, default_value_t = Trim::Ends)]
    trim: Trim,

    /// Print the observed repeat count of every STR before the result.
    #[arg(long)]
    counts: bool,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut builder = DatabaseBuilder::new();
    builder.delimiter(parse_delimiter(&cli.delimiter)?);
    if let Some(name_field) = &cli.name_field {
        builder.name_field(name_field);
    }
    let database = builder
        .from_path(&cli.database)
        .with_context(|| format!("reading profile database {}", cli.database.display()))?;

    let sequence = read_sequence_path(&cli.sequence, cli.trim)
        .with_context(|| format!("reading sequence {}", cli.sequence.display()))?;

    let observed = observe(&sequence, database.loci())?;
    if cli.counts {
        for (locus, count) in observed.iter() {
            println!("{}\t{}", locus, count);
        }
    }

    match database.find_match(&observed)? {
        Some(profile) => println!("{}", profile.name()),
        None => println!("No match"),
    }
    Ok(())
}

fn parse_delimiter(delimiter: &str) -> Result<u8> {
    match delimiter {
        "\\t" | "tab" => Ok(b'\t'),
        d if d.len() == 1 => Ok(d.as_bytes()[0]),
        d => bail!("delimiter must be a single byte, got {:?}", d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\t").unwrap(), b'\t');
        assert!(parse_delimiter(";;").is_err());
    }

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::try_parse_from(&["strprofile", "db.csv", "seq.txt"]).unwrap();
        assert_eq!(cli.delimiter, ",");
        assert_eq!(cli.trim, Trim::Ends);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.counts);
    }

    #[test]
    fn test_cli_requires_both_inputs() {
        assert!(Cli::try_parse_from(&["strprofile", "db.csv"]).is_err());
    }
}
