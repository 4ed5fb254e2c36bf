use crate::error::GameError;
use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Debug topics understood by `--debug-filter`.
pub const DEBUG_TOPICS: [&str; 4] = ["sim", "spawn", "collision", "input"];

// Custom logger structure
#[derive(Debug)]
struct OxygenMazeLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl OxygenMazeLogger {
    fn topic_allowed(&self, target: &str) -> bool {
        match &self.debug_filters {
            Some(filters) => {
                filters.contains(target) || filters.iter().any(|f| target.starts_with(f.as_str()))
            }
            None => true,
        }
    }
}

impl log::Log for OxygenMazeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Topic filters only narrow the chatty levels
        match metadata.level() {
            log::Level::Debug | log::Level::Trace => self.topic_allowed(metadata.target()),
            _ => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
            level = record.level(),
            target = record.target(),
            message = record.args()
        );
        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        // A closed stdout is not worth crashing the game over
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<OxygenMazeLogger> = OnceLock::new();

/// Parses a `--log-level` value, falling back to `Info` for unknown names.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Splits a comma-separated topic list, dropping blanks.
pub fn parse_debug_filter(filter: &str) -> HashSet<String> {
    filter
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// Initialize the logger with optional debug filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), GameError> {
    let debug_filters = debug_filter.as_deref().map(parse_debug_filter);
    if let Some(filters) = &debug_filters {
        for unknown in filters.iter().filter(|f| !DEBUG_TOPICS.contains(&f.as_str())) {
            eprintln!("Unknown debug topic '{}', known topics: {}", unknown, DEBUG_TOPICS.join(","));
        }
    }

    let logger = LOGGER.get_or_init(|| OxygenMazeLogger {
        level,
        debug_filters,
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

// Helper macros for specific debug topics. Each record carries the tick number.
#[macro_export]
macro_rules! debug_sim {
    ($tick:expr, $($arg:tt)*) => {
        log::debug!(target: "sim", "[T{:05}] {}", $tick, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_spawn {
    ($tick:expr, $($arg:tt)*) => {
        log::debug!(target: "spawn", "[T{:05}] {}", $tick, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_collision {
    ($tick:expr, $($arg:tt)*) => {
        log::debug!(target: "collision", "[T{:05}] {}", $tick, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_input {
    ($tick:expr, $($arg:tt)*) => {
        log::debug!(target: "input", "[T{:05}] {}", $tick, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};

    fn logger(level: LevelFilter, filter: Option<&str>) -> OxygenMazeLogger {
        OxygenMazeLogger {
            level,
            debug_filters: filter.map(parse_debug_filter),
        }
    }

    fn metadata(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }

    #[test]
    fn test_parse_debug_filter() {
        let filters = parse_debug_filter(" sim, collision ,,");
        assert_eq!(filters.len(), 2);
        assert!(filters.contains("sim"));
        assert!(filters.contains("collision"));
    }

    #[test]
    fn test_level_gate() {
        let logger = logger(LevelFilter::Info, None);
        assert!(logger.enabled(&metadata(Level::Warn, "sim")));
        assert!(!logger.enabled(&metadata(Level::Debug, "sim")));
    }

    #[test]
    fn test_topic_filter_only_applies_to_debug() {
        let logger = logger(LevelFilter::Trace, Some("spawn"));
        assert!(logger.enabled(&metadata(Level::Debug, "spawn")));
        assert!(!logger.enabled(&metadata(Level::Debug, "collision")));
        assert!(!logger.enabled(&metadata(Level::Trace, "input")));
        assert!(logger.enabled(&metadata(Level::Info, "collision")));
    }
}
