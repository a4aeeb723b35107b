pub mod manifest;

pub use manifest::PackageMetadata;

use crate::clock::{self, Clock, SystemClock};
use crate::error::{HalloError, Result};
use crate::format::Colorizer;
use crate::models::StartupOptions;
use chrono::{DateTime, Local};
use colored::Color;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Manifest read when no path is given, relative to the working directory
pub const DEFAULT_MANIFEST: &str = "package.json";

const MARGIN: &str = "    ";
/// Spaces between the longest option key and its value
const KEY_GAP: usize = 4;

/// Renders the banner text.
///
/// Option keys are padded to the widest key so the values line up.
pub fn render(
    metadata: &PackageMetadata,
    elapsed_ms: i64,
    options: &StartupOptions,
    colors: Colorizer,
) -> String {
    let title = format!(
        "{} {} {} {}",
        colors.paint_bold(&metadata.name, Color::Green),
        colors.paint(&format!("v{}", metadata.version), Color::Green),
        colors.dim("ready in"),
        colors.paint(&format!("{} ms", elapsed_ms), Color::White),
    );

    let mut banner = format!("\n{}{}\n", MARGIN, title);
    if options.is_empty() {
        return banner;
    }

    let longest = options
        .keys()
        .map(|key| key.chars().count())
        .max()
        .unwrap_or(0);

    let lines = options
        .iter()
        .map(|(key, value)| {
            let padding = " ".repeat(longest + KEY_GAP - key.chars().count());
            format!(
                "{}{}{}",
                colors.paint_bold(&format!("{}:", key), Color::BrightBlack),
                padding,
                colors.paint_bold(value, Color::White),
            )
        })
        .collect::<Vec<_>>();

    banner.push('\n');
    banner.push_str(MARGIN);
    banner.push_str(&lines.join(&format!("\n{}", MARGIN)));
    banner.push('\n');
    banner
}

/// Prints the one-time startup banner
#[derive(Clone)]
pub struct BannerPrinter {
    manifest: PathBuf,
    clock: Arc<dyn Clock>,
    colors: Colorizer,
}

impl Default for BannerPrinter {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST)
    }
}

impl BannerPrinter {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            clock: Arc::new(SystemClock),
            colors: Colorizer::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = Colorizer::new(enabled);
        self
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    /// Reads the manifest and renders the banner; elapsed time is taken
    /// once the manifest has been read
    pub async fn render(&self, start: DateTime<Local>, options: &StartupOptions) -> Result<String> {
        let metadata = PackageMetadata::load(&self.manifest).await?;
        let elapsed = clock::elapsed_millis(&start, &self.clock.now());
        tracing::debug!(
            name = %metadata.name,
            version = %metadata.version,
            elapsed_ms = elapsed,
            "Rendering startup banner"
        );
        Ok(render(&metadata, elapsed, options, self.colors))
    }

    pub async fn print(&self, start: DateTime<Local>, options: &StartupOptions) -> Result<()> {
        let banner = self.render(start, options).await?;
        let _ = writeln!(io::stdout().lock(), "{}", banner);
        Ok(())
    }
}

/// Prints the banner for `./package.json`
pub async fn app_ready(start: DateTime<Local>, options: StartupOptions) -> Result<()> {
    BannerPrinter::default().print(start, &options).await
}

/// Prints the banner on a background task of the current runtime.
///
/// The handle may be dropped to ignore the outcome. Fails with
/// [`HalloError::NoRuntime`] when called outside a tokio runtime.
pub fn spawn_app_ready(
    printer: BannerPrinter,
    start: DateTime<Local>,
    options: StartupOptions,
) -> Result<JoinHandle<Result<()>>> {
    let runtime = Handle::try_current().map_err(|_| HalloError::NoRuntime)?;
    Ok(runtime.spawn(async move { printer.print(start, &options).await }))
}

/// Waits for a banner spawned with [`spawn_app_ready`]
pub async fn join(handle: JoinHandle<Result<()>>) -> Result<()> {
    handle.await?
}
