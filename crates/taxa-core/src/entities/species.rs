use std::fmt::Write as _;

use schemars::JsonSchema;
use serde::Serialize;

use crate::enums::{SpeciesType, Variant};
use crate::errors::CoreError;

use super::{FaunaTraits, FloraTraits};

/// Variant payload of a species record.
#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum SpeciesTraits {
    Flora(FloraTraits),
    Fauna(FaunaTraits),
}

impl SpeciesTraits {
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Flora(_) => Variant::Flora,
            Self::Fauna(_) => Variant::Fauna,
        }
    }
}

/// One catalogued species.
///
/// `species_type` always belongs to the variant of `traits`; both are fixed at
/// construction. The names are plain fields and may be edited in place.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq)]
pub struct Species {
    pub name: String,
    pub scientific_name: String,
    species_type: SpeciesType,
    traits: SpeciesTraits,
}

impl Species {
    /// Build a species, checking that `species_type` matches the traits' variant.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidType`] when the type belongs to the other variant.
    pub fn new(
        name: impl Into<String>,
        scientific_name: impl Into<String>,
        species_type: SpeciesType,
        traits: SpeciesTraits,
    ) -> Result<Self, CoreError> {
        let variant = traits.variant();
        if !variant.accepts(species_type) {
            return Err(CoreError::InvalidType {
                variant,
                species_type,
            });
        }

        Ok(Self {
            name: name.into(),
            scientific_name: scientific_name.into(),
            species_type,
            traits,
        })
    }

    /// Build a flora record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidType`] unless `species_type` is a flora type.
    pub fn flora(
        name: impl Into<String>,
        scientific_name: impl Into<String>,
        species_type: SpeciesType,
        has_flowers: bool,
        has_fruits: bool,
        max_height: f64,
    ) -> Result<Self, CoreError> {
        Self::new(
            name,
            scientific_name,
            species_type,
            SpeciesTraits::Flora(FloraTraits {
                has_flowers,
                has_fruits,
                max_height,
            }),
        )
    }

    /// Build a fauna record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidType`] unless `species_type` is a fauna type.
    pub fn fauna(
        name: impl Into<String>,
        scientific_name: impl Into<String>,
        species_type: SpeciesType,
        is_migratory: bool,
        max_weight: f64,
    ) -> Result<Self, CoreError> {
        Self::new(
            name,
            scientific_name,
            species_type,
            SpeciesTraits::Fauna(FaunaTraits {
                is_migratory,
                max_weight,
            }),
        )
    }

    #[must_use]
    pub const fn species_type(&self) -> SpeciesType {
        self.species_type
    }

    #[must_use]
    pub const fn traits(&self) -> &SpeciesTraits {
        &self.traits
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.traits.variant()
    }

    /// Multi-line description of the record, including every variant field.
    ///
    /// Heights use two decimals; weights are printed as plain decimals (`1.2`, `3.0`).
    #[must_use]
    pub fn info(&self) -> String {
        let mut out = format!(
            "{} - Type: {}\nName: {}\nScientific Name: {}",
            self.variant().label(),
            self.species_type.label(),
            self.name,
            self.scientific_name
        );

        // Writing to a String cannot fail.
        let _ = match self.traits {
            SpeciesTraits::Flora(flora) => write!(
                out,
                "\nHas Flowers: {}\nHas Fruits: {}\nMax Height: {:.2} meters",
                flora.has_flowers, flora.has_fruits, flora.max_height
            ),
            SpeciesTraits::Fauna(fauna) => write!(
                out,
                "\nIs Migratory: {}\nMax Weight: {} kg",
                fauna.is_migratory,
                plain_decimal(fauna.max_weight)
            ),
        };

        out
    }
}

/// Positional notation with at least one fractional digit, never exponent form.
fn plain_decimal(value: f64) -> String {
    let digits = value.to_string();
    if value.is_finite() && !digits.contains('.') {
        digits + ".0"
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(SpeciesType::LandFlora)]
    #[case(SpeciesType::AquaticFlora)]
    fn flora_accepts_flora_types(#[case] species_type: SpeciesType) {
        let species = Species::flora("Ceiba", "Ceiba pentandra", species_type, true, true, 70.0)
            .expect("flora type should be accepted");
        assert_eq!(species.species_type(), species_type);
        assert_eq!(species.variant(), Variant::Flora);
    }

    #[rstest]
    #[case(SpeciesType::Bird)]
    #[case(SpeciesType::Mammal)]
    #[case(SpeciesType::AquaticFauna)]
    fn flora_rejects_fauna_types(#[case] species_type: SpeciesType) {
        let err = Species::flora("Ceiba", "Ceiba pentandra", species_type, true, true, 70.0)
            .expect_err("fauna type should be rejected");
        assert_eq!(
            err,
            CoreError::InvalidType {
                variant: Variant::Flora,
                species_type,
            }
        );
    }

    #[rstest]
    #[case(SpeciesType::LandFlora)]
    #[case(SpeciesType::AquaticFlora)]
    fn fauna_rejects_flora_types(#[case] species_type: SpeciesType) {
        let result = Species::fauna("Tucán", "Ramphastos", species_type, false, 0.6);
        assert!(matches!(
            result,
            Err(CoreError::InvalidType {
                variant: Variant::Fauna,
                ..
            })
        ));
    }

    #[test]
    fn flora_info_uses_two_decimal_height() {
        let species = Species::flora(
            "Ceiba",
            "Ceiba pentandra",
            SpeciesType::LandFlora,
            true,
            false,
            70.0,
        )
        .unwrap();

        assert_eq!(
            species.info(),
            "Flora - Type: Land Flora\n\
             Name: Ceiba\n\
             Scientific Name: Ceiba pentandra\n\
             Has Flowers: true\n\
             Has Fruits: false\n\
             Max Height: 70.00 meters"
        );
    }

    #[test]
    fn fauna_info_lists_every_field() {
        let species =
            Species::fauna("Gavilán", "Buteo sp.", SpeciesType::Bird, true, 1.2).unwrap();

        assert_eq!(
            species.info(),
            "Fauna - Type: Bird\n\
             Name: Gavilán\n\
             Scientific Name: Buteo sp.\n\
             Is Migratory: true\n\
             Max Weight: 1.2 kg"
        );
    }

    #[test]
    fn whole_weights_keep_a_decimal() {
        let species = Species::fauna("Danta", "Tapirus", SpeciesType::Mammal, false, 300.0).unwrap();
        assert!(species.info().ends_with("Max Weight: 300.0 kg"));
    }

    #[test]
    fn extreme_weights_stay_positional() {
        let heavy = Species::fauna("Ballena", "Balaenoptera", SpeciesType::Mammal, true, 1.5e17)
            .unwrap();
        assert!(heavy.info().ends_with("Max Weight: 150000000000000000.0 kg"));

        let light = Species::fauna("Mosquito", "Culex", SpeciesType::Bird, false, 2e-5).unwrap();
        assert!(light.info().ends_with("Max Weight: 0.00002 kg"));
    }

    #[test]
    fn names_are_editable_in_place() {
        let mut species =
            Species::fauna("Garza", "Ardea alba", SpeciesType::Bird, true, 1.0).unwrap();
        species.name = "Garza real".into();
        species.scientific_name = "Ardea alba egretta".into();
        assert!(species.info().contains("Name: Garza real"));
        assert!(species.info().contains("Scientific Name: Ardea alba egretta"));
        assert_eq!(species.species_type(), SpeciesType::Bird);
    }

    #[test]
    fn serializes_with_tagged_traits() {
        let species = Species::flora(
            "Lirio",
            "Eichhornia crassipes",
            SpeciesType::AquaticFlora,
            true,
            false,
            0.5,
        )
        .unwrap();

        let value = serde_json::to_value(&species).unwrap();
        assert_eq!(value["species_type"], "aquatic_flora");
        assert_eq!(value["traits"]["variant"], "flora");
        assert_eq!(value["traits"]["has_flowers"], true);
        assert_eq!(value["traits"]["max_height"], 0.5);
    }
}
