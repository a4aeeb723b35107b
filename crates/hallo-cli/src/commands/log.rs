use crate::config::Config;
use anyhow::{Context, Result};
use hallo_logger::{LogLevel, LogMessage, Logger};

/// Overrides given on the command line for a single `hallo log` call
#[derive(Debug, Default, Clone)]
pub struct LogOverrides {
    pub prefix: Option<String>,
    pub with_date: bool,
    pub no_color: bool,
}

/// Builds the logger from the config file plus command line overrides
pub fn build_logger(config: &Config, overrides: &LogOverrides) -> Logger {
    let mut logger_config = config.logger_config();
    if let Some(ref prefix) = overrides.prefix {
        logger_config.prefix = Some(prefix.clone());
    }
    if overrides.with_date {
        logger_config.with_date = true;
    }

    let colors = !overrides.no_color && config.color.unwrap_or(true);
    Logger::new(logger_config).with_colors(colors)
}

/// Turns the message words into a log message; `json` parses them as a value
pub fn build_message(words: &[String], json: bool) -> Result<LogMessage> {
    let text = words.join(" ");
    if !json {
        return Ok(LogMessage::Text(text));
    }
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse message as JSON: {}", text))?;
    Ok(LogMessage::Structured(value))
}

/// Prints a single log record
pub fn execute_log(
    config: &Config,
    level: LogLevel,
    words: &[String],
    json: bool,
    overrides: &LogOverrides,
) -> Result<()> {
    let message = build_message(words, json)?;
    build_logger(config, overrides).log(level, message);
    Ok(())
}
