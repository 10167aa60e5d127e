//! This module holds the Command Line Interface design.

use std::path::PathBuf;

// non-std crates
use clap::{value_parser, Arg, Command};

/// Builds and returns the Command Line Interface's argument parsing object.
pub fn get_arg_parser() -> Command {
    Command::new("style50")
        .about("Check the style of a file with pylint and print the diagnostics as JSON.")
        .arg(
            Arg::new("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The file to check.")
                .long_help(
                    "The file to check. The path is handed to the linter exactly as given;
it is not resolved or normalized.

The linter can be changed with the ``STYLE50_LINTER`` environment variable
(a name found on ``PATH`` or a path to an executable).
",
                ),
        )
}
