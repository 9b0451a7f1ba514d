use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Animal-specific attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FaunaTraits {
    pub is_migratory: bool,
    /// Maximum weight in kilograms.
    pub max_weight: f64,
}
