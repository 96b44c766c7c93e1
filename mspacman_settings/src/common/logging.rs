//! Utilities for configuring logging
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::Once;

use colored::*;
use env_logger::Logger;
use log::LevelFilter;
use log::Log;
use log::Record;

static ONCE_INIT: Once = Once::new();

/// Environment variable holding env_logger style filters, e.g. `MSPACMAN_LOG=debug,reward=trace`
pub const LOG_ENV_VAR: &str = "MSPACMAN_LOG";

const TRACE_CONTEXT_LINES: usize = 32;

/// Logger that uses env_logger for filtering and prints a compact one-letter level prefix.
///
/// Per-frame trace records are kept in a ring buffer instead of being printed. They are
/// printed as context once a record of a higher level arrives, so a warning about a mode
/// change or a reward anomaly comes with the frames that led up to it.
struct SettingsLogger {
    trace_logs: Mutex<VecDeque<String>>,
    logger: Logger,
}

impl SettingsLogger {
    fn new(logger: Logger) -> Self {
        Self {
            trace_logs: Mutex::new(VecDeque::new()),
            logger,
        }
    }

    fn format_record(&self, record: &Record) -> String {
        match record.level() {
            log::Level::Error => {
                format!("{} {}", "E".red().bold(), record.args().to_string().red())
            }
            log::Level::Warn => format!(
                "{} {}",
                "W".yellow().bold(),
                record.args().to_string().yellow()
            ),
            log::Level::Info => format!("{} {}", "I".blue().bold(), record.args()),
            log::Level::Debug => format!("{} {}", "D".blue(), record.args()),
            log::Level::Trace => format!(
                "{} {}",
                record.target().dimmed(),
                record.args().to_string().dimmed()
            ),
        }
    }
}

impl Log for SettingsLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.logger.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.logger.matches(record) {
            return;
        }
        let record_str = self.format_record(record);
        let Ok(mut trace_logs) = self.trace_logs.lock() else {
            return;
        };
        if record.level() == LevelFilter::Trace {
            trace_logs.push_front(record_str);
            trace_logs.truncate(TRACE_CONTEXT_LINES);
        } else {
            if trace_logs.len() == TRACE_CONTEXT_LINES {
                eprintln!("{}", "...".dimmed());
            }
            for log in trace_logs.drain(..).rev() {
                eprintln!("{}", log);
            }
            eprintln!("{}", record_str);
        }
    }

    fn flush(&self) {}
}

fn install(filter_config: &str) {
    let filter = env_logger::builder().parse_filters(filter_config).build();
    let max_level = filter.filter();
    if log::set_boxed_logger(Box::new(SettingsLogger::new(filter))).is_ok() {
        log::set_max_level(max_level);
    }
}

/// Installs the logger. Filters are read from `MSPACMAN_LOG` and default to `error`.
pub fn init() {
    ONCE_INIT.call_once(|| {
        install(&std::env::var(LOG_ENV_VAR).unwrap_or("error".to_string()));
    });
}

pub fn test_init(verbose: bool) {
    ONCE_INIT.call_once(|| {
        install(
            &std::env::var(LOG_ENV_VAR)
                .unwrap_or(if verbose { "debug,reward=trace" } else { "warn" }.to_string()),
        );
    });
}
