//! # taxa-config
//!
//! Layered configuration loading for Taxa using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TAXA_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.taxa/config.toml`
//! 4. User-level `~/.config/taxa/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TAXA_CATALOG__CAPACITY` -> `catalog.capacity` and
//! `TAXA_GENERAL__SHOW_BANNER` -> `general.show_banner`.
//!
//! # Usage
//!
//! ```no_run
//! use taxa_config::TaxaConfig;
//!
//! let config = TaxaConfig::load_with_dotenv(None).expect("config");
//! println!("capacity: {}", config.catalog.capacity);
//! ```

mod catalog;
mod error;
mod general;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaxaConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TaxaConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`TaxaConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigFileNotFound`] when the explicit file is
    /// missing, [`ConfigError::Figment`] when a source cannot be parsed, and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::ConfigFileNotFound {
                    path: path.to_path_buf(),
                });
            }
        }

        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`TaxaConfig::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".taxa/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("TAXA_").split("__"))
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taxa").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TaxaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog.capacity, taxa_core::MAX_SPECIES);
        assert!(config.general.show_banner);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: TaxaConfig = TaxaConfig::figment(None).extract()?;
            assert_eq!(config.catalog.capacity, 80);
            assert_eq!(config.general.log_level, "warn");
            Ok(())
        });
    }
}
