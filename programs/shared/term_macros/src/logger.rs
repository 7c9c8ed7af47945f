use log::{Level, LevelFilter, Log, Metadata, Record};
use crate::paint;
use owo_colors::Style;

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let (tag, style) = match record.level() {
            Level::Error => ("ERROR", Style::new().red().bold()),
            Level::Warn => (" WARN", Style::new().yellow().bold()),
            Level::Info => (" INFO", Style::new().green()),
            Level::Debug => ("DEBUG", Style::new().blue()),
            Level::Trace => ("TRACE", Style::new().dimmed()),
        };
        eprintln!(
            "{} {} {}",
            paint(&tag, style),
            paint(&record.target(), Style::new().dimmed()),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Installs the stderr logger. The level comes from `RUST_LOG` and defaults to
/// `warn`. Calling it twice is harmless.
pub fn init_logger() {
    let level = level_from(std::env::var("RUST_LOG").ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_warn() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn level_is_case_insensitive() {
        assert_eq!(level_from(Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" off ")), LevelFilter::Off);
    }
}
