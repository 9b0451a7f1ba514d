//! Species type and variant enums for Taxa.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Every [`SpeciesType`] belongs to exactly one [`Variant`]; construction of a
//! species checks that relation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// The two concrete shapes a species record can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Flora,
    Fauna,
}

impl Variant {
    /// Species types accepted by this variant.
    #[must_use]
    pub const fn allowed_types(self) -> &'static [SpeciesType] {
        match self {
            Self::Flora => &[SpeciesType::LandFlora, SpeciesType::AquaticFlora],
            Self::Fauna => &[
                SpeciesType::Bird,
                SpeciesType::Mammal,
                SpeciesType::AquaticFauna,
            ],
        }
    }

    /// Check whether `species_type` may be used with this variant.
    #[must_use]
    pub fn accepts(self, species_type: SpeciesType) -> bool {
        self.allowed_types().contains(&species_type)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flora => "flora",
            Self::Fauna => "fauna",
        }
    }

    /// Capitalized name used as the heading of an info block.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flora => "Flora",
            Self::Fauna => "Fauna",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SpeciesType
// ---------------------------------------------------------------------------

/// Subcategory of a species.
///
/// ```text
/// flora: land_flora, aquatic_flora
/// fauna: bird, mammal, aquatic_fauna
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SpeciesType {
    LandFlora,
    AquaticFlora,
    Bird,
    Mammal,
    AquaticFauna,
}

impl SpeciesType {
    /// Every type, in menu order.
    pub const ALL: [Self; 5] = [
        Self::LandFlora,
        Self::AquaticFlora,
        Self::Bird,
        Self::Mammal,
        Self::AquaticFauna,
    ];

    /// The variant this type belongs to.
    #[must_use]
    pub const fn variant(self) -> Variant {
        match self {
            Self::LandFlora | Self::AquaticFlora => Variant::Flora,
            Self::Bird | Self::Mammal | Self::AquaticFauna => Variant::Fauna,
        }
    }

    /// Map a 1-based menu choice to a type. Returns `None` outside `1..=5`.
    #[must_use]
    pub fn from_menu_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LandFlora => "land_flora",
            Self::AquaticFlora => "aquatic_flora",
            Self::Bird => "bird",
            Self::Mammal => "mammal",
            Self::AquaticFauna => "aquatic_fauna",
        }
    }

    /// Human-readable label for menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LandFlora => "Land Flora",
            Self::AquaticFlora => "Aquatic Flora",
            Self::Bird => "Bird",
            Self::Mammal => "Mammal",
            Self::AquaticFauna => "Aquatic Fauna",
        }
    }
}

impl fmt::Display for SpeciesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
