//! Catalog sizing configuration.

use serde::{Deserialize, Serialize};
use taxa_core::MAX_SPECIES;

use crate::ConfigError;

const fn default_capacity() -> usize {
    MAX_SPECIES
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Maximum number of species the catalog accepts (1 to 80).
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl CatalogConfig {
    /// Reject capacities outside `1..=MAX_SPECIES`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an out-of-bounds capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=MAX_SPECIES).contains(&self.capacity) {
            return Ok(());
        }

        Err(ConfigError::InvalidValue {
            field: "catalog.capacity".into(),
            reason: format!("must be between 1 and {MAX_SPECIES}, got {}", self.capacity),
        })
    }
}
