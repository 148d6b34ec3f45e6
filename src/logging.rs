//! Structured logging for the speed tester
//!
//! Console-oriented logger with leveled, timestamped output and a
//! per-session correlation ID so interleaved runs can be told apart in
//! captured output. Verbosity is driven by configuration; nothing is
//! persisted.

use chrono::Utc;
use colored::Colorize;
use uuid::Uuid;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Detailed information for debugging
    Debug = 0,
    /// General application information
    Info = 1,
    /// Potentially harmful situations
    Warn = 2,
    /// Error events; the application can continue
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn colorize(&self, text: &str) -> String {
        match self {
            LogLevel::Debug => text.cyan().to_string(),
            LogLevel::Info => text.green().to_string(),
            LogLevel::Warn => text.yellow().to_string(),
            LogLevel::Error => text.red().to_string(),
        }
    }
}

/// Session-scoped console logger
#[derive(Debug, Clone)]
pub struct SessionLogger {
    session_id: Uuid,
    min_level: LogLevel,
    use_color: bool,
}

impl SessionLogger {
    /// Create a logger for a new session
    pub fn new(verbose: bool, use_color: bool) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            min_level: if verbose { LogLevel::Debug } else { LogLevel::Info },
            use_color,
        }
    }

    /// Correlation ID for this session
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Log a message at the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%H:%M:%S%.3f");
        let short_id = &self.session_id.to_string()[..8];
        let label = if self.use_color {
            self.min_level_label(level)
        } else {
            format!("[{}]", level.as_str())
        };

        eprintln!("{} {} [{}] {}", timestamp, label, short_id, message);
    }

    fn min_level_label(&self, level: LogLevel) -> String {
        level.colorize(&format!("[{}]", level.as_str()))
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
