//! # taxa-core
//!
//! Core types and the catalog controller for Taxa.
//!
//! This crate holds everything with an invariant worth testing:
//! - Species type and variant enums
//! - The species record (shared base plus flora/fauna traits)
//! - Cross-cutting error types
//! - The bounded, order-preserving catalog controller
//! - Response types for machine-readable output
//!
//! It performs no I/O. Rejected operations are logged through `tracing` and
//! reported to the caller as return values.

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

pub use catalog::{Catalog, MAX_SPECIES, SPECIES_NOT_FOUND};
pub use entities::{FaunaTraits, FloraTraits, Species, SpeciesTraits};
pub use enums::{SpeciesType, Variant};
pub use errors::CoreError;
