//! Command-line runner for the cardinal number queries.
//!
//! Reads a fixed count of non-negative integers from standard input and prints
//! a report covering:
//! - Shortest and longest number
//! - Numbers sorted by ascending and descending length
//! - Median length and the numbers shorter and longer than it
//! - First number with the minimal set of different digits
//! - Numbers made only of even digits, and numbers with as many even as odd digits
//! - First number with ascending digits and first with descending digits
//! - First number composed of unique digits
//! - Second (or only) palindrome
//!
//! # Usage
//!
//! ```sh
//! echo "12 3 4567 89 5" | cargo run -- --no-prompt
//! ```
//!
//! Read a different number of entries:
//!
//! ```sh
//! cargo run -- --count 8
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG`:
//!
//! ```sh
//! RUST_LOG=debug cargo run
//! ```

use std::{
    io::{self, Write},
    process::ExitCode,
};

use cardinal_core::NumberSequence;
use clap::{Parser, builder::RangedU64ValueParser};

use crate::report::ReportError;

mod report;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Quantity of numbers to read.
    #[arg(
        short = 'n',
        long,
        value_name = "COUNT",
        default_value_t = 5,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    count: usize,

    /// Do not ask for input before reading.
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::debug!("starting with {args:?}");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ReportError> {
    let mut seq = NumberSequence::new(args.count);
    let mut stdout = io::stdout().lock();

    let prompt: Option<&mut dyn Write> = if args.no_prompt {
        None
    } else {
        Some(&mut stdout)
    };
    seq.read(io::stdin().lock(), prompt)?;

    report::write_report(&mut stdout, &seq)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();

        let args = Args::try_parse_from(["cardinal"]).unwrap();
        assert_eq!(args.count, 5);
        assert!(!args.no_prompt);

        let args = Args::try_parse_from(["cardinal", "-n", "3", "--no-prompt"]).unwrap();
        assert_eq!(args.count, 3);
        assert!(args.no_prompt);

        assert!(Args::try_parse_from(["cardinal", "--count", "0"]).is_err());
        assert!(Args::try_parse_from(["cardinal", "--count", "-1"]).is_err());
    }
}
