pub mod colors;
pub mod inspect;

pub use colors::Colorizer;
pub use inspect::Inspector;

use crate::clock::{self, Clock, SystemClock};
use crate::models::{LogLevel, LogMessage, LoggerConfig};
use crate::process::{CurrentProcess, ProcessIdentity};
use std::sync::Arc;

/// Builds the text of a single log record
#[derive(Clone)]
pub struct LineFormatter {
    config: LoggerConfig,
    clock: Arc<dyn Clock>,
    process: Arc<dyn ProcessIdentity>,
    colors: Colorizer,
    inspector: Inspector,
}

impl LineFormatter {
    pub fn new(config: LoggerConfig) -> Self {
        let colors = Colorizer::default();
        Self {
            config,
            clock: Arc::new(SystemClock),
            process: Arc::new(CurrentProcess),
            colors,
            inspector: Inspector::new(colors),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_process(mut self, process: Arc<dyn ProcessIdentity>) -> Self {
        self.process = process;
        self
    }

    pub fn with_colors(mut self, colors: Colorizer) -> Self {
        self.colors = colors;
        self.inspector = self.inspector.with_colors(colors);
        self
    }

    pub fn with_inspector(mut self, inspector: Inspector) -> Self {
        self.inspector = inspector.with_colors(self.colors);
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// `<prefix>/<pid>` or just `<pid>`
    pub fn suffix(&self) -> String {
        let pid = self.process.pid();
        match self.config.effective_prefix() {
            Some(prefix) => format!("{}/{}", prefix, pid),
            None => pid.to_string(),
        }
    }

    /// Header shared by both paths: `[<time>] <label> (<suffix>):`
    fn header(&self, level: LogLevel) -> String {
        let time = clock::format_time(&self.clock.now(), self.config.with_date);
        format!(
            "[{}] {} ({}):",
            time,
            self.colors.paint(level.label(), level.color()),
            self.suffix()
        )
    }

    /// Formats one record.
    ///
    /// Objects and arrays get the header on its own line followed by the
    /// dump, each dump line indented by one space. Everything else,
    /// including null, is printed inline after the header.
    pub fn format(&self, level: LogLevel, message: &LogMessage) -> String {
        let header = self.header(level);
        match message.as_container() {
            Some(value) => {
                let body = self
                    .inspector
                    .inspect(value)
                    .lines()
                    .map(|line| format!(" {}", line))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{}\n{}", header, body)
            }
            None => format!("{} {}", header, message.display_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::process::FixedProcess;
    use chrono::{Local, TimeZone};
    use serde_json::json;

    fn formatter(config: LoggerConfig) -> LineFormatter {
        let now = Local.with_ymd_and_hms(2024, 5, 17, 14, 3, 9).unwrap();
        LineFormatter::new(config)
            .with_clock(Arc::new(FixedClock(now)))
            .with_process(Arc::new(FixedProcess(4242)))
            .with_colors(Colorizer::plain())
    }

    #[test]
    fn test_text_line_without_prefix() {
        let line = formatter(LoggerConfig::default())
            .format(LogLevel::Info, &LogMessage::from("listening"));
        assert_eq!(line, "[14:03:09] INFO (4242): listening");
    }

    #[test]
    fn test_text_line_with_prefix_and_date() {
        let config = LoggerConfig::default().with_prefix("worker").with_date(true);
        let line = formatter(config).format(LogLevel::Warning, &LogMessage::from("slow"));
        assert_eq!(line, "[2024-05-17 14:03:09] WARNING (worker/4242): slow");
    }

    #[test]
    fn test_empty_prefix_is_ignored() {
        let config = LoggerConfig::default().with_prefix("");
        assert_eq!(formatter(config).suffix(), "4242");
    }

    #[test]
    fn test_object_goes_below_header() {
        let message = LogMessage::from(json!({ "user": "ada", "id": 1 }));
        let line = formatter(LoggerConfig::default()).format(LogLevel::Ready, &message);
        assert_eq!(line, "[14:03:09] READY (4242):\n { user: 'ada', id: 1 }");
    }

    #[test]
    fn test_every_body_line_is_indented_and_header_has_no_trailing_space() {
        let message = LogMessage::from(json!({ "user": "ada", "roles": ["admin", "ops"] }));
        let output = formatter(LoggerConfig::default())
            .with_inspector(Inspector::default().with_break_width(10))
            .format(LogLevel::Info, &message);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "[14:03:09] INFO (4242):");
        assert_eq!(
            &lines[1..],
            [
                " {",
                "   user: 'ada',",
                "   roles: [",
                "     'admin',",
                "     'ops'",
                "   ]",
                " }",
            ]
        );
    }

    #[test]
    fn test_null_takes_text_path() {
        let message = LogMessage::from(serde_json::Value::Null);
        let line = formatter(LoggerConfig::default()).format(LogLevel::Error, &message);
        assert_eq!(line, "[14:03:09] ERROR (4242): null");
    }
}
