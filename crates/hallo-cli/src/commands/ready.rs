use crate::config::Config;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use hallo_logger::banner::{self, BannerPrinter, DEFAULT_MANIFEST};
use hallo_logger::StartupOptions;

/// Parses `key=value` pairs into banner options, keeping their order
pub fn parse_options(pairs: &[String]) -> Result<StartupOptions> {
    let mut options = StartupOptions::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Invalid option {:?}, expected key=value", pair))?;
        let key = key.trim();
        if key.is_empty() {
            anyhow::bail!("Invalid option {:?}, key cannot be empty", pair);
        }
        options.insert(key.to_string(), value.trim().to_string());
    }
    Ok(options)
}

/// Options from the config file, overridden by command line options.
///
/// A key given on both keeps its config position with the new value.
pub fn merge_options(config: &Config, cli: StartupOptions) -> StartupOptions {
    let mut options = config.options.clone();
    options.extend(cli);
    options
}

/// Prints the startup banner and waits for it to finish
pub async fn execute_ready(
    config: &Config,
    start: DateTime<Local>,
    manifest: Option<String>,
    pairs: &[String],
    no_color: bool,
) -> Result<()> {
    let options = merge_options(config, parse_options(pairs)?);
    let manifest = manifest
        .or_else(|| config.manifest.clone())
        .unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    let colors = !no_color && config.color.unwrap_or(true);
    let printer = BannerPrinter::new(&manifest).with_colors(colors);

    let context = || format!("Failed to print startup banner from {}", manifest);
    let handle = banner::spawn_app_ready(printer, start, options).with_context(context)?;
    banner::join(handle).await.with_context(context)
}
