//! This module holds functionality specific to running pylint and reading its exit
//! status.

use std::{fmt, process::ExitStatus};

/// The default linter executable's name.
pub const PYLINT: &str = "pylint";

/// The arguments that make pylint print its messages as a JSON array.
pub const JSON_FORMAT_ARGS: [&str; 2] = ["-f", "json"];

/// pylint's exit code, which is a bit field rather than a plain success/failure value.
///
/// Bits 2, 4, 8 and 16 only say which categories of messages were issued, so a
/// file with style problems exits non-zero even though pylint did its job. Only
/// [`PylintStatus::FATAL`], [`PylintStatus::USAGE_ERROR`] (or a code pylint never
/// documents) mean that the run itself went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PylintStatus(i32);

impl PylintStatus {
    pub const FATAL: i32 = 1;
    pub const ERROR: i32 = 2;
    pub const WARNING: i32 = 4;
    pub const REFACTOR: i32 = 8;
    pub const CONVENTION: i32 = 16;
    pub const USAGE_ERROR: i32 = 32;

    const MESSAGES: i32 = Self::ERROR | Self::WARNING | Self::REFACTOR | Self::CONVENTION;
    const KNOWN: i32 = Self::FATAL | Self::MESSAGES | Self::USAGE_ERROR;

    const NAMES: [(i32, &'static str); 6] = [
        (Self::FATAL, "fatal message issued"),
        (Self::ERROR, "error message issued"),
        (Self::WARNING, "warning message issued"),
        (Self::REFACTOR, "refactor message issued"),
        (Self::CONVENTION, "convention message issued"),
        (Self::USAGE_ERROR, "usage error"),
    ];

    pub fn from_code(code: i32) -> Self {
        PylintStatus(code)
    }

    /// Returns [`None`] if the process was terminated by a signal.
    pub fn from_exit(status: ExitStatus) -> Option<Self> {
        status.code().map(PylintStatus)
    }

    pub fn code(&self) -> i32 {
        self.0
    }

    /// Did pylint fail to lint the file?
    pub fn is_failure(&self) -> bool {
        self.0 & (Self::FATAL | Self::USAGE_ERROR) != 0 || self.0 & !Self::KNOWN != 0
    }

    /// Did pylint report any error/warning/refactor/convention messages?
    pub fn issued_messages(&self) -> bool {
        self.0 & Self::MESSAGES != 0
    }
}

impl fmt::Display for PylintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "exit code 0 (no messages)");
        }
        let mut reasons = Self::NAMES
            .iter()
            .filter(|(bit, _)| self.0 & bit != 0)
            .map(|(_, name)| *name)
            .collect::<Vec<&str>>();
        if self.0 & !Self::KNOWN != 0 {
            reasons.push("unexpected exit code");
        }
        write!(f, "exit code {} ({})", self.0, reasons.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::PylintStatus;

    #[test]
    fn clean() {
        let status = PylintStatus::from_code(0);
        assert!(!status.is_failure());
        assert!(!status.issued_messages());
        assert_eq!(status.to_string(), "exit code 0 (no messages)");
    }

    #[test]
    fn messages_are_not_failures() {
        // convention + warning, eg. a missing docstring and an unused import
        let status = PylintStatus::from_code(20);
        assert!(!status.is_failure());
        assert!(status.issued_messages());
        assert_eq!(
            status.to_string(),
            "exit code 20 (warning message issued, convention message issued)"
        );
    }

    #[test]
    fn fatal() {
        let status = PylintStatus::from_code(PylintStatus::FATAL | PylintStatus::CONVENTION);
        assert!(status.is_failure());
        assert!(status.issued_messages());
    }

    #[test]
    fn usage_error() {
        let status = PylintStatus::from_code(32);
        assert!(status.is_failure());
        assert_eq!(status.to_string(), "exit code 32 (usage error)");
    }

    #[test]
    fn unknown_code() {
        // eg. a python traceback or "command not found" from a wrapper script
        let status = PylintStatus::from_code(127);
        assert!(status.is_failure());
        assert!(status.to_string().ends_with("unexpected exit code)"));
    }
}
