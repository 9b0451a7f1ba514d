//! Species record types.
//!
//! A [`Species`] carries the shared base (name, scientific name, type tag) and
//! a [`SpeciesTraits`] payload for its variant. All structs derive `Serialize`
//! and `JsonSchema` so the client can emit them as JSON and `taxa schema` can
//! describe them.

mod fauna;
mod flora;
mod species;

pub use fauna::FaunaTraits;
pub use flora::FloraTraits;
pub use species::{Species, SpeciesTraits};
