//! A module to initialize and customize the logger object used for diagnostics.
//!
//! Standard output is reserved for the linter's JSON, so everything logged here is
//! printed to standard error, prefixed with the program's name.

// non-std crates
use log::{LevelFilter, Metadata, Record, SetLoggerError};

struct StderrLogger {
    prefix: &'static str,
}

impl log::Log for StderrLogger {
    /// Defers to [`log::max_level`], so every level from `error` to `trace` can be
    /// selected at runtime.
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}: {}: {}",
                self.prefix,
                record.level().to_string().to_lowercase(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger { prefix: "style50" };

/// Install the stderr logger.
///
/// The logging level defaults to [`LevelFilter::Info`].
/// Returns a [`SetLoggerError`] if a logger is already installed.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Info))
}

/// Held by tests that change the global max level.
#[cfg(test)]
pub(crate) static LOG_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use log::{Level, LevelFilter, Log, Metadata};

    use super::{init, LOGGER, LOG_LOCK};

    fn enabled_at(level: Level) -> bool {
        LOGGER.enabled(&Metadata::builder().level(level).build())
    }

    #[test]
    fn second_init_is_rejected() {
        let _guard = LOG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // another test may have installed the logger already
        let _ = init();
        assert!(init().is_err());
        log::info!("logged to stderr");
    }

    #[test]
    fn follows_max_level() {
        let _guard = LOG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        log::set_max_level(LevelFilter::Trace);
        assert!(enabled_at(Level::Trace));

        log::set_max_level(LevelFilter::Warn);
        assert!(enabled_at(Level::Error));
        assert!(!enabled_at(Level::Info));

        log::set_max_level(LevelFilter::Off);
        assert!(!enabled_at(Level::Error));
        log::set_max_level(LevelFilter::Info);
    }
}
