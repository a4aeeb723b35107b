use crate::banner::{self, BannerPrinter};
use crate::clock::Clock;
use crate::format::{Colorizer, Inspector, LineFormatter};
use crate::models::{LogLevel, LogMessage, LoggerConfig, StartupOptions};
use crate::process::ProcessIdentity;
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Leveled console logger.
///
/// Every call writes one record to standard output. There is no level
/// threshold: all four levels always print.
#[derive(Clone)]
pub struct Logger {
    formatter: LineFormatter,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            formatter: LineFormatter::new(config),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.formatter = self.formatter.with_clock(clock);
        self
    }

    pub fn with_process(mut self, process: Arc<dyn ProcessIdentity>) -> Self {
        self.formatter = self.formatter.with_process(process);
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.formatter = self.formatter.with_colors(Colorizer::new(enabled));
        self
    }

    pub fn with_inspector(mut self, inspector: Inspector) -> Self {
        self.formatter = self.formatter.with_inspector(inspector);
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        self.formatter.config()
    }

    pub fn ready(&self, message: impl Into<LogMessage>) {
        self.log(LogLevel::Ready, message);
    }

    pub fn info(&self, message: impl Into<LogMessage>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<LogMessage>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<LogMessage>) {
        self.log(LogLevel::Error, message);
    }

    /// Formats and prints one record
    pub fn log(&self, level: LogLevel, message: impl Into<LogMessage>) {
        let line = self.format(level, &message.into());
        // A closed stdout must not take the caller down with it
        let _ = writeln!(io::stdout().lock(), "{}", line);
    }

    pub fn format(&self, level: LogLevel, message: &LogMessage) -> String {
        self.formatter.format(level, message)
    }

    /// Prints the startup banner in the background using `./package.json`.
    ///
    /// The handle can be dropped; awaiting it reports manifest read or
    /// parse failures. Outside a tokio runtime nothing is spawned and
    /// [`crate::HalloError::NoRuntime`] is returned.
    pub fn app_ready(
        start: DateTime<Local>,
        options: StartupOptions,
    ) -> crate::Result<JoinHandle<crate::Result<()>>> {
        banner::spawn_app_ready(BannerPrinter::default(), start, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::process::FixedProcess;
    use chrono::TimeZone;

    #[test]
    fn test_levels_map_to_labels() {
        let now = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let logger = Logger::new(LoggerConfig::default().with_prefix("api"))
            .with_clock(Arc::new(FixedClock(now)))
            .with_process(Arc::new(FixedProcess(7)))
            .with_colors(false);

        for level in LogLevel::ALL {
            let line = logger.format(level, &LogMessage::from("up"));
            assert_eq!(line, format!("[03:04:05] {} (api/7): up", level.label()));
        }
    }

    #[test]
    fn test_log_methods_do_not_panic() {
        let logger = Logger::default().with_colors(false);
        logger.ready("ready");
        logger.info(String::from("info"));
        logger.warn(serde_json::json!({ "disk": "90%" }));
        logger.error(serde_json::Value::Null);
    }
}
