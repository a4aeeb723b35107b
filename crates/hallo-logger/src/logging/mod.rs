//! Internal diagnostics via `tracing`.
//!
//! Diagnostics go to stderr so that stdout carries only log records and
//! banners.

pub mod config;

use anyhow::Result;
use config::LoggingConfig;

const DEFAULT_LEVEL: &str = "warn";

/// Initialize diagnostics with the given configuration
pub fn init(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_new(&config.level)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_ansi(config.ansi),
        )
        .try_init()?;

    Ok(())
}

/// Initialize diagnostics with default configuration
pub fn init_default() -> Result<()> {
    init(LoggingConfig::default())
}

/// Picks the filter: `--verbose`, then `--log-level`, then `RUST_LOG`
pub fn resolve_level(log_level: Option<String>, verbose: bool, env: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    log_level
        .or(env)
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Initialize diagnostics from CLI arguments
pub fn init_from_args(log_level: Option<String>, verbose: bool, no_color: bool) -> Result<()> {
    let level = resolve_level(log_level, verbose, std::env::var("RUST_LOG").ok());
    init(LoggingConfig::new(level, !no_color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_wins_over_everything() {
        let level = resolve_level(Some("error".into()), true, Some("trace".into()));
        assert_eq!(level, "debug");
    }

    #[test]
    fn test_cli_level_wins_over_rust_log() {
        let level = resolve_level(Some("info".into()), false, Some("trace".into()));
        assert_eq!(level, "info");
    }

    #[test]
    fn test_rust_log_then_default() {
        assert_eq!(resolve_level(None, false, Some("trace".into())), "trace");
        assert_eq!(resolve_level(None, false, None), "warn");
    }
}
