use anyhow::{Context, Result};
use hallo_logger::{LoggerConfig, StartupOptions};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG: &str = "hallo.toml";

/// CLI configuration
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Prefix shown before the pid in every line
    pub prefix: Option<String>,
    /// Include the date in timestamps
    #[serde(default)]
    pub with_date: bool,
    /// Force colors on or off (None = let the terminal decide)
    pub color: Option<bool>,
    /// Manifest read by the banner (relative to the config file)
    pub manifest: Option<String>,
    /// Banner options, printed in file order
    #[serde(default)]
    pub options: StartupOptions,
}

impl Config {
    /// Loads configuration from a file.
    ///
    /// A relative `manifest` is resolved against the config file directory.
    pub fn load(path: &str) -> Result<Self> {
        let config_path = Path::new(path);
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        let base = config_path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_relative_paths(base);

        config.validate()?;
        Ok(config)
    }

    /// Loads the explicit config, or `hallo.toml` if present, or defaults
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        if Path::new(DEFAULT_CONFIG).is_file() {
            return Self::load(DEFAULT_CONFIG);
        }
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref prefix) = self.prefix {
            if prefix.chars().any(|c| c.is_whitespace() || c == '/') {
                anyhow::bail!(
                    "Invalid prefix: {:?}. Prefix cannot contain whitespace or '/'",
                    prefix
                );
            }
        }

        if let Some(ref manifest) = self.manifest {
            if manifest.is_empty() {
                anyhow::bail!("manifest cannot be empty");
            }
        }

        for key in self.options.keys() {
            if key.is_empty() {
                anyhow::bail!("options cannot contain an empty key");
            }
        }

        Ok(())
    }

    /// Logger settings described by this config
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::new(self.prefix.clone(), self.with_date)
    }

    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(ref manifest) = self.manifest {
            if !manifest.is_empty() && !Path::new(manifest).is_absolute() {
                self.manifest = Some(base.join(manifest).to_string_lossy().to_string());
            }
        }
    }
}
