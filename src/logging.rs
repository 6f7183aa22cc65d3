#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Writes `LEVEL - message` lines to stderr. Stdout carries the game
/// transcript, and the `sim` binary's JSON must stay parseable there.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            log::Level::Debug | log::Level::Trace => {
                eprintln!("{} [{}] - {}", record.level(), record.target(), record.args())
            }
            level => eprintln!("{} - {}", level, record.args()),
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger, filtered by `ALEXANDRIA_LOG` (`error` through
/// `trace`, or `off`). Unset or unparsable values fall back to `warn`, which
/// only surfaces turn-limit stops. Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = env::var("ALEXANDRIA_LOG")
        .ok()
        .and_then(|lvl| lvl.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
