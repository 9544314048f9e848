//! The command-line interface for `gradec`.
//!
//! Usage (as with any other [`argh`] interface) involves first invoking [`argh::from_env()`], and
//! then processing the resulting data (in this case an instance of [`Cli`]).

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, io::Read, path::PathBuf, str::FromStr};

use anyhow::Context;
use argh::FromArgs;
use num_bigint::BigUint;
use tracing::debug;

use crate::{
    grammar::{parse_record, parse_record_as},
    int::Natural,
    record::Record,
};

/// The record parsed by the `demo` subcommand.
pub const EXAMPLE: &str = r#"{"name":guy,"id":12345,"grades":[100,90,80,100,96,10]}"#;

/// Printed in place of a record when the input does not parse.
pub const FAILED_PARSING: &str = "Failed Parsing";

/// Parses student records with a small backtracking parser-combinator engine.
#[derive(Debug, Clone, FromArgs)]
pub struct Cli {
    #[argh(subcommand)]
    cmd: CliSubCommand,
}

impl Cli {
    /// Consumes `self` and processes the given subcommand.
    pub fn handle(self) -> anyhow::Result<()> {
        match self.cmd {
            CliSubCommand::Parse(args) => match args.bigint {
                true => args.run::<BigUint>(),
                false => args.run::<u64>(),
            },
            CliSubCommand::Demo(_) => {
                println!("{}", render(parse_record(EXAMPLE).as_ref()));
                Ok(())
            }
        }
    }
}

/// The set of the distinct subcommands available to be passed to the [`Cli`].
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand)]
enum CliSubCommand {
    Parse(Parse),
    Demo(Demo),
}

/// Parses a record from a file, or from stdin if no file is given, and prints it.
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand, name = "parse")]
struct Parse {
    /// use arbitrary-precision integers for the id and grades
    #[argh(switch)]
    bigint: bool,

    /// reject input that continues past the closing brace
    #[argh(switch)]
    strict: bool,

    /// a path to a file containing the record
    #[argh(positional)]
    file: Option<PathBuf>,
}

impl Parse {
    /// Consumes `self`, reads the source and prints the parsed record.
    fn run<N: Natural + Display>(self) -> anyhow::Result<()> {
        let source = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("could not read stdin")?;
                buf
            }
        };

        debug!(bytes = source.len(), strict = self.strict, "read source");
        println!("{}", self.evaluate::<N>(&source));
        Ok(())
    }

    /// Parses `source` according to the flags on `self` and renders the result.
    fn evaluate<N: Natural + Display>(&self, source: &str) -> String {
        let record = if self.strict {
            match Record::<N>::from_str(source) {
                Ok(record) => Some(record),
                Err(err) => {
                    debug!(%err, "rejected input");
                    None
                }
            }
        } else {
            parse_record_as::<N>(source)
        };

        render(record.as_ref())
    }
}

/// Parses the built-in example record and prints it.
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand, name = "demo")]
struct Demo {}

/// Renders a parse result the way the driver prints it.
pub fn render<N: Display>(record: Option<&Record<N>>) -> String {
    match record {
        Some(record) => record.to_string(),
        None => String::from(FAILED_PARSING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(strict: bool) -> Parse {
        Parse {
            bigint: false,
            strict,
            file: None,
        }
    }

    #[test]
    fn demo_renders_example() {
        assert_eq!(
            render(parse_record(EXAMPLE).as_ref()),
            "name: guy id: 12345 grades: [100,90,80,100,96,10]"
        );
    }

    #[test]
    fn failures_render_fixed_message() {
        assert_eq!(render::<u64>(None), "Failed Parsing");
        assert_eq!(parse_args(false).evaluate::<u64>("{name:guy}"), FAILED_PARSING);
    }

    #[test]
    fn strict_mode_rejects_trailing_input() {
        let source = format!("{EXAMPLE}\n");
        let expected = "name: guy id: 12345 grades: [100,90,80,100,96,10]";
        assert_eq!(parse_args(true).evaluate::<u64>(&source), expected);

        let source = format!("{EXAMPLE}{EXAMPLE}");
        assert_eq!(parse_args(false).evaluate::<u64>(&source), expected);
        assert_eq!(parse_args(true).evaluate::<u64>(&source), FAILED_PARSING);
    }

    #[test]
    fn bigint_ids_render_in_full() {
        let source = r#"{"name":ada,"id":123456789012345678901234567890,"grades":[1]}"#;
        assert_eq!(parse_args(false).evaluate::<u64>(source), FAILED_PARSING);
        assert_eq!(
            parse_args(false).evaluate::<BigUint>(source),
            "name: ada id: 123456789012345678901234567890 grades: [1]"
        );
    }

    #[test]
    fn subcommands_parse_from_args() {
        let cli = Cli::from_args(&["gradec"], &["parse", "--strict", "record.txt"]).unwrap();
        match cli.cmd {
            CliSubCommand::Parse(args) => {
                assert!(args.strict);
                assert!(!args.bigint);
                assert_eq!(args.file, Some(PathBuf::from("record.txt")));
            }
            CliSubCommand::Demo(_) => panic!("expected the parse subcommand"),
        }

        assert!(Cli::from_args(&["gradec"], &["demo"]).is_ok());
    }
}
