use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the banner and by structured message construction.
///
/// Log calls themselves never fail.
#[derive(Debug, Error)]
pub enum HalloError {
    #[error("failed to read manifest {path:?}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse JSON manifest {path:?}: {source}")]
    ManifestJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse Cargo manifest {path:?}: {source}")]
    ManifestToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cargo manifest {path:?} has no [package] table")]
    ManifestMissingPackage { path: PathBuf },

    #[error("failed to serialize log message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no tokio runtime is running to print the banner")]
    NoRuntime,

    #[error("banner task did not complete: {0}")]
    BannerTask(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, HalloError>;
