//! Settings taken from the environment.
//!
//! The command line only accepts the file to check, so anything else that can be
//! tweaked comes from environment variables.

use std::env;

// non-std crates
use log::LevelFilter;

// project-specific modules/crates
use crate::linter::pylint::PYLINT;

/// The name (or path) of the linter executable to run.
pub const LINTER_ENV: &str = "STYLE50_LINTER";

/// The log verbosity (`off`, `error`, `warn`, `info`, `debug` or `trace`).
pub const VERBOSITY_ENV: &str = "STYLE50_VERBOSITY";

#[derive(Debug, PartialEq)]
pub struct Settings {
    /// A bare name sought in `$PATH`, or a path to an executable.
    pub linter: String,

    /// The maximum level of messages printed to stderr.
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            linter: PYLINT.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Read [`LINTER_ENV`] and [`VERBOSITY_ENV`], falling back to the defaults for
    /// any that are unset, blank or unrecognized.
    pub fn from_env() -> Self {
        Self::from_values(env::var(LINTER_ENV).ok(), env::var(VERBOSITY_ENV).ok())
    }

    fn from_values(linter: Option<String>, verbosity: Option<String>) -> Self {
        let defaults = Settings::default();
        Settings {
            linter: linter
                .map(|val| val.trim().to_string())
                .filter(|val| !val.is_empty())
                .unwrap_or(defaults.linter),
            log_level: verbosity
                .and_then(|val| val.trim().parse::<LevelFilter>().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
