//! The catalog controller: an ordered, capacity-bounded list of species.
//!
//! Two layers of operations are exposed:
//! - typed operations (`insert`, `rename`, `remove`, `get`) that return
//!   `Result`/`Option` with the reason for a failure;
//! - the client-facing operations (`register_*`, `edit_species`,
//!   `delete_species`, `species_*`) that collapse failures into `false`, a
//!   sentinel string, or `None`, logging the reason.
//!
//! Indices are 0-based. Insertion order is display order, and deletion shifts
//! every later entry left by one.

use crate::entities::Species;
use crate::enums::SpeciesType;
use crate::errors::CoreError;
use crate::responses::ListEntry;

/// Hard upper bound on the number of catalogued species.
pub const MAX_SPECIES: usize = 80;

/// Returned by [`Catalog::species_info`] for an index with no species.
pub const SPECIES_NOT_FOUND: &str = "Species not found";

#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<Species>,
    capacity: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Empty catalog holding up to [`MAX_SPECIES`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_SPECIES)
    }

    /// Empty catalog with a lower bound. Values above [`MAX_SPECIES`] are clamped.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_SPECIES);
        Self {
            species: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.species.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Species> {
        self.species.get(index)
    }

    // -----------------------------------------------------------------------
    // Typed operations
    // -----------------------------------------------------------------------

    /// Append a validated species. Returns its 0-based position.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CapacityExceeded`] when the catalog is full.
    pub fn insert(&mut self, species: Species) -> Result<usize, CoreError> {
        if self.is_full() {
            return Err(CoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.species.push(species);
        let index = self.species.len() - 1;
        tracing::debug!(index, len = self.species.len(), "species registered");
        Ok(index)
    }

    /// Overwrite both names of the species at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] when no species exists at `index`.
    pub fn rename(
        &mut self,
        index: usize,
        name: impl Into<String>,
        scientific_name: impl Into<String>,
    ) -> Result<(), CoreError> {
        let len = self.species.len();
        let species = self
            .species
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })?;

        species.name = name.into();
        species.scientific_name = scientific_name.into();
        tracing::debug!(index, "species renamed");
        Ok(())
    }

    /// Remove the species at `index`, shifting later entries left.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IndexOutOfRange`] when no species exists at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Species, CoreError> {
        let len = self.species.len();
        if index >= len {
            return Err(CoreError::IndexOutOfRange { index, len });
        }

        let removed = self.species.remove(index);
        tracing::debug!(index, len = self.species.len(), "species deleted");
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Client-facing operations
    // -----------------------------------------------------------------------

    /// Register a flora species. Returns `false` when the catalog is full or
    /// the type is not a flora type; the catalog is unchanged in both cases.
    pub fn register_flora(
        &mut self,
        name: &str,
        scientific_name: &str,
        species_type: SpeciesType,
        has_flowers: bool,
        has_fruits: bool,
        max_height: f64,
    ) -> bool {
        if self.reject_when_full() {
            return false;
        }

        self.register(Species::flora(
            name,
            scientific_name,
            species_type,
            has_flowers,
            has_fruits,
            max_height,
        ))
    }

    /// Register a fauna species. Returns `false` when the catalog is full or
    /// the type is not a fauna type; the catalog is unchanged in both cases.
    pub fn register_fauna(
        &mut self,
        name: &str,
        scientific_name: &str,
        species_type: SpeciesType,
        is_migratory: bool,
        max_weight: f64,
    ) -> bool {
        if self.reject_when_full() {
            return false;
        }

        self.register(Species::fauna(
            name,
            scientific_name,
            species_type,
            is_migratory,
            max_weight,
        ))
    }

    /// Overwrite the names at `index`. The caller resolves any
    /// keep-current-value logic beforehand.
    pub fn edit_species(&mut self, index: usize, name: &str, scientific_name: &str) -> bool {
        self.rename(index, name, scientific_name)
            .map_err(|error| tracing::warn!(%error, "species edit rejected"))
            .is_ok()
    }

    pub fn delete_species(&mut self, index: usize) -> bool {
        self.remove(index)
            .map_err(|error| tracing::warn!(%error, "species delete rejected"))
            .is_ok()
    }

    /// Formatted info for the species at `index`, or [`SPECIES_NOT_FOUND`].
    #[must_use]
    pub fn species_info(&self, index: usize) -> String {
        self.get(index)
            .map_or_else(|| SPECIES_NOT_FOUND.to_string(), Species::info)
    }

    /// 1-based listing of names, one per line. Empty string for an empty catalog.
    #[must_use]
    pub fn species_list(&self) -> String {
        self.species
            .iter()
            .enumerate()
            .map(|(index, species)| format!("{}. {}", index + 1, species.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn species_name(&self, index: usize) -> Option<&str> {
        self.get(index).map(|species| species.name.as_str())
    }

    #[must_use]
    pub fn species_scientific_name(&self, index: usize) -> Option<&str> {
        self.get(index)
            .map(|species| species.scientific_name.as_str())
    }

    /// Structured counterpart of [`Catalog::species_list`].
    #[must_use]
    pub fn entries(&self) -> Vec<ListEntry> {
        self.species
            .iter()
            .enumerate()
            .map(|(index, species)| ListEntry {
                position: index + 1,
                name: species.name.clone(),
                scientific_name: species.scientific_name.clone(),
                species_type: species.species_type(),
            })
            .collect()
    }

    fn reject_when_full(&self) -> bool {
        if self.is_full() {
            tracing::warn!(capacity = self.capacity, "catalog is full; registration rejected");
            return true;
        }
        false
    }

    fn register(&mut self, built: Result<Species, CoreError>) -> bool {
        match built.and_then(|species| self.insert(species)) {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(%error, "species registration rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ceiba() -> Species {
        Species::flora("Ceiba", "Ceiba pentandra", SpeciesType::LandFlora, true, true, 70.0)
            .unwrap()
    }

    fn tucan() -> Species {
        Species::fauna("Tucán", "Ramphastos", SpeciesType::Bird, false, 0.6).unwrap()
    }

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.capacity(), MAX_SPECIES);
        assert_eq!(catalog.species_list(), "");
    }

    #[test]
    fn capacity_is_clamped_to_maximum() {
        assert_eq!(Catalog::with_capacity(500).capacity(), MAX_SPECIES);
        assert_eq!(Catalog::with_capacity(3).capacity(), 3);
    }

    #[test]
    fn insert_returns_position() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.insert(ceiba()), Ok(0));
        assert_eq!(catalog.insert(tucan()), Ok(1));
    }

    #[test]
    fn insert_into_full_catalog_fails() {
        let mut catalog = Catalog::with_capacity(1);
        catalog.insert(ceiba()).unwrap();
        assert_eq!(
            catalog.insert(tucan()),
            Err(CoreError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn rename_out_of_range_reports_len() {
        let mut catalog = Catalog::new();
        catalog.insert(ceiba()).unwrap();
        assert_eq!(
            catalog.rename(3, "x", "y"),
            Err(CoreError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn remove_hands_back_the_record() {
        let mut catalog = Catalog::new();
        catalog.insert(ceiba()).unwrap();
        catalog.insert(tucan()).unwrap();

        let removed = catalog.remove(0).unwrap();
        assert_eq!(removed.name, "Ceiba");
        assert_eq!(catalog.species_name(0), Some("Tucán"));
    }

    #[test]
    fn species_info_sentinel_for_missing_index() {
        let catalog = Catalog::new();
        assert_eq!(catalog.species_info(0), SPECIES_NOT_FOUND);
    }

    #[test]
    fn entries_are_one_based() {
        let mut catalog = Catalog::new();
        catalog.insert(ceiba()).unwrap();
        catalog.insert(tucan()).unwrap();

        let entries = catalog.entries();
        assert_eq!(
            entries,
            vec![
                ListEntry {
                    position: 1,
                    name: "Ceiba".into(),
                    scientific_name: "Ceiba pentandra".into(),
                    species_type: SpeciesType::LandFlora,
                },
                ListEntry {
                    position: 2,
                    name: "Tucán".into(),
                    scientific_name: "Ramphastos".into(),
                    species_type: SpeciesType::Bird,
                },
            ]
        );
    }

    #[test]
    fn full_catalog_skips_type_validation() {
        let mut catalog = Catalog::with_capacity(0);
        assert!(!catalog.register_flora("x", "y", SpeciesType::Bird, false, false, 1.0));
        assert!(catalog.is_empty());
    }
}
