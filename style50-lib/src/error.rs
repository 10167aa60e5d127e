//! The errors that can end a style50 run.

use std::{io, path::PathBuf, string::FromUtf8Error};

// non-std crates
use thiserror::Error;

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The file to check does not exist. Detected before the linter is spawned.
    #[error("File {} does not exist.", .0.display())]
    FileNotFound(PathBuf),

    /// The linter executable is not installed (nor present in `$PATH`).
    #[error("Could not find linter `{name}`; is it installed and on PATH? ({source})")]
    LinterNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("Failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Linter output is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    /// The linter ran but reported a failure of its own (not a style message).
    #[error("{} failed: {reason}", .program.display())]
    LinterFailed { program: PathBuf, reason: String },

    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
}
