/// Configuration for the internal diagnostics (tracing) output
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive (error, warn, info, debug, trace)
    pub level: String,
    /// Emit ANSI colors on stderr
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: super::resolve_level(None, false, std::env::var("RUST_LOG").ok()),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new(level: String, ansi: bool) -> Self {
        Self { level, ansi }
    }
}
