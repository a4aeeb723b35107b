use crate::error::{HalloError, Result};
use serde::Deserialize;
use std::path::Path;

/// Application name and version shown in the banner
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
}

#[derive(Deserialize)]
struct CargoManifest {
    package: Option<PackageMetadata>,
}

impl PackageMetadata {
    /// Reads the manifest at `path` without blocking the runtime
    pub async fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "Reading package manifest");
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| HalloError::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(path, &content)
    }

    /// Parses manifest text; `.toml` files are read as Cargo manifests,
    /// anything else as `package.json`
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            let manifest: CargoManifest =
                toml::from_str(content).map_err(|source| HalloError::ManifestToml {
                    path: path.to_path_buf(),
                    source,
                })?;
            return manifest
                .package
                .ok_or_else(|| HalloError::ManifestMissingPackage {
                    path: path.to_path_buf(),
                });
        }

        serde_json::from_str(content).map_err(|source| HalloError::ManifestJson {
            path: path.to_path_buf(),
            source,
        })
    }
}
