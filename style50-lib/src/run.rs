//! This module is the native backend of the style50 package written in Rust.
//!
//! In python, this module is exposed as `style50.run` that has 1 function exposed:
//! [`run_main()`].

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

// non-std crates
use log::set_max_level;

// project specific modules/crates
use crate::cli::get_arg_parser;
use crate::config::Settings;
use crate::linter::lint_file;
use crate::logger;

/// This is the backend entry point for console applications.
///
/// The `args` are expected to start with the program's name, which is what both
/// [`std::env::args_os`] (in the `style50` binary) and python's `sys.argv` (in the
/// python binding) provide. They are OS strings so that a path which is not valid
/// UTF-8 still reaches the linter unchanged.
///
/// Returns the process' exit code: `0` when the linter's output was relayed and the
/// linter did not fail, `1` otherwise. Invalid arguments make the parser exit the
/// process (with code `2`) before anything is spawned.
pub fn run_main(args: Vec<OsString>) -> i32 {
    let arg_parser = get_arg_parser();
    let args = arg_parser.get_matches_from(args);

    let settings = Settings::from_env();
    // the python binding may call this more than once per process
    if logger::init().is_err() {
        log::debug!("Logger already initialized");
    }
    set_max_level(settings.log_level);

    let Some(file) = args.get_one::<PathBuf>("FILE") else {
        return 2;
    };
    match lint_file(file, &settings.linter, &mut io::stdout().lock()) {
        Ok(status) => {
            log::debug!("{} finished with {}", settings.linter, status);
            0
        }
        Err(e) => {
            log::error!("{e}");
            1
        }
    }
}

#[cfg(test)]
mod test {
    use std::ffi::OsString;

    use super::run_main;
    use crate::logger::LOG_LOCK;

    #[test]
    fn missing_file_fails() {
        let _guard = LOG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let exit_code = run_main(vec![
            OsString::from("style50"),
            OsString::from("tests/no_such_dir/bad.py"),
        ]);
        assert_eq!(exit_code, 1);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_missing_file_fails() {
        use std::os::unix::ffi::OsStringExt;

        let _guard = LOG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let exit_code = run_main(vec![
            OsString::from("style50"),
            OsString::from_vec(b"tests/no_such_dir/bad\xff.py".to_vec()),
        ]);
        assert_eq!(exit_code, 1);
    }
}
