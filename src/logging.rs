#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;
use std::sync::OnceLock;
use std::time::Instant;

/// Writes this crate's records to stderr, stamped with the time since
/// [`init_logging`]. Records from other crates are dropped.
struct MatchLogger {
    started: OnceLock<Instant>,
}

impl MatchLogger {
    fn elapsed_ms(&self) -> u128 {
        self.started.get_or_init(Instant::now).elapsed().as_millis()
    }
}

impl log::Log for MatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && is_own_target(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{:>6}ms {:<5} {}: {}",
                self.elapsed_ms(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: MatchLogger = MatchLogger {
    started: OnceLock::new(),
};

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "BROADSIDE_LOG";

fn is_own_target(target: &str) -> bool {
    target == "broadside" || target.starts_with("broadside::")
}

/// Level named by `value`; `info` when absent or unparsable.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with a level taken from [`LOG_ENV`].
/// Calling it again is harmless.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    LOGGER.started.get_or_init(Instant::now);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
