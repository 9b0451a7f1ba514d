//! Response types rendered as JSON by the `taxa` client.
//!
//! These structs define the shape of machine-readable output for the species
//! list and the species detail view.

use schemars::JsonSchema;
use serde::Serialize;

use crate::entities::Species;
use crate::enums::SpeciesType;

/// One row of the species list. `position` is 1-based, matching the text listing.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ListEntry {
    pub position: usize,
    pub name: String,
    pub scientific_name: String,
    pub species_type: SpeciesType,
}

/// Detail view of a single species.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpeciesDetail<'a> {
    pub position: usize,
    pub species: &'a Species,
}
