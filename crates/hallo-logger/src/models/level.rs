use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity tag attached to every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Ready,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// All levels, in the order they are usually introduced
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Ready,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Label printed inside the line
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Ready => "READY",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Terminal color of the label
    pub fn color(self) -> Color {
        match self {
            LogLevel::Ready => Color::Green,
            LogLevel::Info => Color::Magenta,
            LogLevel::Warning => Color::Yellow,
            LogLevel::Error => Color::Red,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ready" => Ok(LogLevel::Ready),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!(
                "Unknown log level: {}. Supported levels: ready, info, warn, error",
                other
            )),
        }
    }
}
