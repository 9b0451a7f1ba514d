//! Error types for the Taxa core.
//!
//! None of these are fatal. The catalog's boolean operations recover them and
//! report `false` (or a sentinel); the typed operations hand them back as `Err`.

use thiserror::Error;

use crate::enums::{SpeciesType, Variant};

/// Errors raised by species construction and catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The species type does not belong to the requested variant.
    #[error("Invalid type for {variant}: {species_type} (expected one of {})", allowed_list(.variant))]
    InvalidType {
        variant: Variant,
        species_type: SpeciesType,
    },

    /// The catalog already holds its maximum number of species.
    #[error("Catalog is full ({capacity} species)")]
    CapacityExceeded { capacity: usize },

    /// No species exists at the given position.
    #[error("No species at index {index} (catalog holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn allowed_list(variant: &Variant) -> String {
    variant
        .allowed_types()
        .iter()
        .map(|species_type| species_type.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
