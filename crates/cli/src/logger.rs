use std::{
    fmt,
    io::{self, Write},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level_filter(verbosity)))
}

#[must_use]
pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub struct Entry {
    pub time: String,
    pub level: Level,
    pub message: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:<5} {}", self.time, self.level, self.message)
    }
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let entry = Entry {
                time: Local::now().format("%b %d %H:%M:%S").to_string(),
                level: record.level(),
                message: record.args().to_string(),
            };
            let _ = writeln!(io::stderr().lock(), "{entry}");
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, LevelFilter::Warn)]
    #[case(1, LevelFilter::Info)]
    #[case(2, LevelFilter::Debug)]
    #[case(3, LevelFilter::Trace)]
    #[case(10, LevelFilter::Trace)]
    fn test_level_filter(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_filter(verbosity), expected);
    }

    #[rstest]
    #[case(Level::Warn, "Oct 17 08:15:00 WARN  foo")]
    #[case(Level::Debug, "Oct 17 08:15:00 DEBUG foo")]
    fn test_entry_display(#[case] level: Level, #[case] expected: &str) {
        let entry = Entry {
            time: String::from("Oct 17 08:15:00"),
            level,
            message: String::from("foo"),
        };
        assert_eq!(entry.to_string(), expected);
    }
}
