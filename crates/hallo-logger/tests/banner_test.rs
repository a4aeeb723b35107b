use std::fs;
use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, Local, TimeZone};
use hallo_logger::banner::{self, BannerPrinter};
use hallo_logger::{FixedClock, HalloError, StartupOptions};

fn write_manifest(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write manifest");
    path
}

fn fixed_printer(manifest: std::path::PathBuf) -> (BannerPrinter, chrono::DateTime<Local>) {
    let now = Local.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
    let printer = BannerPrinter::new(manifest)
        .with_clock(Arc::new(FixedClock(now)))
        .with_colors(false);
    (printer, now)
}

#[tokio::test]
async fn banner_reports_elapsed_millis_and_aligned_options() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let manifest = write_manifest(&dir, "package.json", r#"{"name":"shop","version":"2.3.4"}"#);
    let (printer, now) = fixed_printer(manifest);

    let mut options = StartupOptions::new();
    options.insert("a".to_string(), "1".to_string());
    options.insert("bb".to_string(), "22".to_string());

    let start = now - Duration::milliseconds(1_520);
    let banner = printer.render(start, &options).await?;

    assert!(banner.contains("shop v2.3.4 ready in 1520 ms"));
    let value_columns: Vec<usize> = banner
        .lines()
        .filter(|line| line.contains(':'))
        .map(|line| line.rfind(' ').unwrap() + 1)
        .collect();
    assert_eq!(value_columns.len(), 2);
    assert_eq!(value_columns[0], value_columns[1]);
    assert!(banner.contains("    a:     1"));
    assert!(banner.contains("    bb:    22"));

    Ok(())
}

#[tokio::test]
async fn banner_reads_cargo_manifests() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let manifest = write_manifest(
        &dir,
        "Cargo.toml",
        "[package]\nname = \"relay\"\nversion = \"0.9.0\"\n",
    );
    let (printer, now) = fixed_printer(manifest);

    let banner = printer.render(now, &StartupOptions::new()).await?;
    assert!(banner.contains("relay v0.9.0 ready in 0 ms"));

    Ok(())
}

#[tokio::test]
async fn missing_manifest_surfaces_through_the_handle() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let (printer, now) = fixed_printer(dir.path().join("package.json"));

    let handle = banner::spawn_app_ready(printer, now, StartupOptions::new())?;
    let err = banner::join(handle).await.unwrap_err();

    assert!(matches!(err, HalloError::ManifestRead { .. }), "got: {err}");
    Ok(())
}

#[tokio::test]
async fn malformed_manifest_is_not_recovered() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let manifest = write_manifest(&dir, "package.json", "name = shop");
    let (printer, now) = fixed_printer(manifest);

    let err = printer.print(now, &StartupOptions::new()).await.unwrap_err();
    assert!(matches!(err, HalloError::ManifestJson { .. }), "got: {err}");
    Ok(())
}

#[tokio::test]
async fn spawned_banner_completes_successfully() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let manifest = write_manifest(&dir, "package.json", r#"{"name":"shop","version":"1.0.0"}"#);
    let (printer, now) = fixed_printer(manifest);

    let mut options = StartupOptions::new();
    options.insert("port".to_string(), "8080".to_string());

    banner::join(banner::spawn_app_ready(printer, now, options)?).await?;
    Ok(())
}
