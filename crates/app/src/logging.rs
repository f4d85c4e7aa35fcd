//! Minimal stderr backend for the `log` facade.
//!
//! The level comes from `HUFFPACK_LOG` (`error`, `warn`, `info`, `debug`,
//! `trace` or `off`) when set, otherwise from the `-v` count.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable that overrides the `-v` level.
pub const LOG_ENV: &str = "HUFFPACK_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Map a `-v` count to a level.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init(verbosity: u8) {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or_else(|| level_for(verbosity));

    // Err only means a logger is already installed
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn test_env_values_parse() {
        assert_eq!("debug".parse::<LevelFilter>().ok(), Some(LevelFilter::Debug));
        assert_eq!("off".parse::<LevelFilter>().ok(), Some(LevelFilter::Off));
        assert!("loud".parse::<LevelFilter>().is_err());
    }
}
