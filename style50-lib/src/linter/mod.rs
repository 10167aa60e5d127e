//! This module holds the functionality related to finding and running the linter.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

// non-std crates
use which::which;

// project-specific modules/crates
use crate::error::{Error, Result};
pub mod pylint;
use pylint::{PylintStatus, JSON_FORMAT_ARGS};

/// Everything the linter left behind after a single run.
#[derive(Debug)]
pub struct LintReport {
    /// The linter's stdout, decoded as UTF-8 but otherwise untouched.
    pub stdout: String,

    /// The linter's stderr (lossily decoded). Only ever logged.
    pub stderr: String,

    pub status: ExitStatus,
}

/// Fetch the path to the linter by `name`.
///
/// `name` may be a bare executable name (sought in the `$PATH` environment variable)
/// or a path to the executable itself.
///
/// The only reason this function would return an error is if the specified linter is
/// not installed or present on the system.
pub fn get_linter_exe(name: &str) -> Result<PathBuf> {
    which(name).map_err(|source| Error::LinterNotFound {
        name: name.to_string(),
        source,
    })
}

/// Run the linter `cmd` on `file`, asking for JSON output, and wait until it exits.
///
/// All of the child's stdout is read into memory. The child is reaped before this
/// returns, whether or not it succeeded.
pub fn capture_linter_output(cmd: &mut Command, file: &Path) -> Result<LintReport> {
    cmd.args(JSON_FORMAT_ARGS).arg(file);
    log::debug!(
        "Running \"{} {}\"",
        cmd.get_program().to_string_lossy(),
        cmd.get_args()
            .map(|x| x.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );
    let output = cmd.output().map_err(|source| Error::Spawn {
        program: PathBuf::from(cmd.get_program()),
        source,
    })?;
    Ok(LintReport {
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        status: output.status,
    })
}

/// Lint `file` with the `linter` and write its output to `out` verbatim.
///
/// The output is relayed even when the linter fails; the failure is reported
/// afterwards as [`Error::LinterFailed`]. Style messages in the output are not
/// failures.
pub fn lint_file(file: &Path, linter: &str, out: &mut dyn Write) -> Result<PylintStatus> {
    if !file.exists() {
        return Err(Error::FileNotFound(file.to_path_buf()));
    }
    let exe = get_linter_exe(linter)?;
    let report = capture_linter_output(&mut Command::new(&exe), file)?;

    out.write_all(report.stdout.as_bytes())?;
    out.flush()?;

    let status = PylintStatus::from_exit(report.status);
    let failed = status.map_or(true, |status| status.is_failure());
    if !report.stderr.is_empty() {
        if failed {
            log::error!("{} raised the following errors:\n{}", exe.display(), report.stderr);
        } else {
            log::debug!("{} raised the following errors:\n{}", exe.display(), report.stderr);
        }
    }
    match status {
        Some(status) if !failed => Ok(status),
        Some(status) => Err(Error::LinterFailed {
            program: exe,
            reason: status.to_string(),
        }),
        None => Err(Error::LinterFailed {
            program: exe,
            reason: String::from("terminated by a signal"),
        }),
    }
}
