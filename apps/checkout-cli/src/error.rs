//! Error types for the checkout CLI.

use std::path::PathBuf;

use checkout_core::CoreError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can stop the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Pricing engine rejected the catalog, a rule or a scan.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}
