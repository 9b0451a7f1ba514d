use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Plant-specific attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FloraTraits {
    pub has_flowers: bool,
    pub has_fruits: bool,
    /// Maximum height in meters.
    pub max_height: f64,
}
