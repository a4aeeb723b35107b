use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-logger settings, fixed for the lifetime of the logger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Short name of the logical sub-process, shown before the pid
    pub prefix: Option<String>,
    /// Include the date in the timestamp
    pub with_date: bool,
}

impl LoggerConfig {
    pub fn new(prefix: Option<String>, with_date: bool) -> Self {
        Self { prefix, with_date }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_date(mut self, with_date: bool) -> Self {
        self.with_date = with_date;
        self
    }

    /// Prefix to print, treating an empty string as absent
    pub fn effective_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }
}

/// Ordered option name to display value mapping shown in the banner
pub type StartupOptions = IndexMap<String, String>;
