//! The `style50` binary executable's entrypoint.
use std::{env, ffi::OsString, process};

use style50_lib::run::run_main;

/// This function simply forwards CLI args to [`run_main()`].
pub fn main() {
    process::exit(run_main(env::args_os().collect::<Vec<OsString>>()));
}
