//! Errors raised while assembling a [`crate::TaxaConfig`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `--config` path that does not point at a file.
    #[error("taxa config file not found: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },

    /// A TOML source or `TAXA_*` variable could not be read into the config.
    #[error("could not read taxa settings: {0}")]
    Figment(#[from] figment::Error),

    /// A setting parsed but lies outside what the catalog accepts.
    #[error("taxa setting `{field}` rejected: {reason}")]
    InvalidValue { field: String, reason: String },
}
