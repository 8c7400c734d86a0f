/// Structured logging for regulation classification.
///
/// Provides context-rich diagnostics with component tags, timestamps, and
/// severity levels. Logging is opt-in: until `init_logger` is called every
/// log call is a no-op, so library consumers that want silent pure
/// functions get exactly that. Log output never influences results.

use std::fmt;
use std::sync::Mutex;

use chrono::Utc;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline components
// ---------------------------------------------------------------------------

/// Which stage of the classification pipeline emitted a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Coverage,
    Statistic,
    Decision,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Coverage => write!(f, "COVERAGE"),
            Component::Statistic => write!(f, "STATISTIC"),
            Component::Decision => write!(f, "DECISION"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

/// Global logger instance; `None` until initialized.
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to emit.
    min_level: LogLevel,
}

impl Logger {
    /// Initialize the global logger.
    pub fn init(min_level: LogLevel) {
        *LOGGER.lock().unwrap() = Some(Logger { min_level });
    }

    fn log(&self, level: LogLevel, component: Component, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let entry = format!("{} {} {}: {}", timestamp, level, component, message);

        match level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", entry),
            LogLevel::Info | LogLevel::Debug => println!("{}", entry),
        }
    }
}

// ---------------------------------------------------------------------------
// Public logging functions
// ---------------------------------------------------------------------------

/// Initialize the global logger with a minimum level.
pub fn init_logger(min_level: LogLevel) {
    Logger::init(min_level);
}

/// Log an informational message.
pub fn info(component: Component, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, component, message);
    }
}

/// Log a warning message.
pub fn warn(component: Component, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, component, message);
    }
}

/// Log a debug message.
pub fn debug(component: Component, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, component, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_logging_without_init_is_a_no_op() {
        // Must not panic or poison the global lock.
        debug(Component::Coverage, "no logger configured");
        info(Component::Decision, "still no logger configured");
    }
}
