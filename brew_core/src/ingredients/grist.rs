//! Grist (fermentable ingredient) records
//!
//! A grist is anything that contributes extract to the wort: malts, mash tun
//! adjuncts, malt extracts and copper sugars. Only the `mashable` flag and
//! the numeric fields are read by the formulas; the metadata is for display.

use serde::{Deserialize, Serialize};

use crate::errors::{BrewError, BrewResult};
use crate::units::{Grams, Kilograms};

/// Grist categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GristType {
    PrimaryMalt,
    SecondaryMalt,
    MashTunAdjunct,
    CanBeSteeped,
    /// Non-mashable
    MaltExtract,
    /// Non-mashable
    CopperSugar,
}

/// Grist types that bypass the mash and convert at full potential
pub const NON_MASHABLES: [GristType; 2] = [GristType::MaltExtract, GristType::CopperSugar];

impl GristType {
    /// All grist type variants for UI selection
    pub const ALL: [GristType; 6] = [
        GristType::PrimaryMalt,
        GristType::SecondaryMalt,
        GristType::MashTunAdjunct,
        GristType::CanBeSteeped,
        GristType::MaltExtract,
        GristType::CopperSugar,
    ];

    /// Whether mash efficiency applies to this category
    pub fn is_mashable(&self) -> bool {
        !NON_MASHABLES.contains(self)
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> BrewResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "_").as_str() {
            "PRIMARY_MALT" | "PRIMARY" | "BASE_MALT" => Ok(GristType::PrimaryMalt),
            "SECONDARY_MALT" | "SECONDARY" | "SPECIALITY_MALT" | "SPECIALTY_MALT" => {
                Ok(GristType::SecondaryMalt)
            }
            "MASH_TUN_ADJUNCT" | "ADJUNCT" => Ok(GristType::MashTunAdjunct),
            "CAN_BE_STEEPED" | "STEEPED" => Ok(GristType::CanBeSteeped),
            "MALT_EXTRACT" | "EXTRACT" => Ok(GristType::MaltExtract),
            "COPPER_SUGAR" | "SUGAR" => Ok(GristType::CopperSugar),
            _ => Err(BrewError::invalid_input("grist_type", s, "Unknown grist type")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GristType::PrimaryMalt => "Primary Malt",
            GristType::SecondaryMalt => "Secondary Malt",
            GristType::MashTunAdjunct => "Mash Tun Adjunct",
            GristType::CanBeSteeped => "Can Be Steeped",
            GristType::MaltExtract => "Malt Extract",
            GristType::CopperSugar => "Copper Sugar",
        }
    }
}

impl std::fmt::Display for GristType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How much of a grist's extract ferments out.
///
/// Serializes as `null` for [`Fermentability::UseAttenuation`] and as a bare
/// number for [`Fermentability::Fixed`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Fermentability {
    /// Not known for this grist; the recipe's default attenuation applies
    #[default]
    UseAttenuation,
    /// Fraction of extract that ferments (0.0 - 1.0, sugars are 1.0)
    Fixed(f64),
}

impl Fermentability {
    /// Effective attenuation for this grist given the recipe default
    pub fn resolve(self, default_attenuation: f64) -> f64 {
        match self {
            Fermentability::UseAttenuation => default_attenuation,
            Fermentability::Fixed(value) => value,
        }
    }
}

impl From<Option<f64>> for Fermentability {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Fermentability::UseAttenuation, Fermentability::Fixed)
    }
}

impl From<Fermentability> for Option<f64> {
    fn from(value: Fermentability) -> Self {
        match value {
            Fermentability::UseAttenuation => None,
            Fermentability::Fixed(v) => Some(v),
        }
    }
}

/// Descriptive data carried for display only
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GristMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub grist_type: Option<GristType>,
}

impl GristMetadata {
    /// Metadata with just a name
    pub fn named(name: impl Into<String>) -> Self {
        GristMetadata {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// A grain, malt, extract or sugar in a recipe.
///
/// ## JSON Example
///
/// ```json
/// {
///   "color_ebc": 60.0,
///   "mashable": true,
///   "extract": 265.0,
///   "moisture_percent": 3.0,
///   "fermentability": null,
///   "mass_g": 100.0,
///   "metadata": { "name": "Amber Malt" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grist {
    /// Colour contribution in EBC
    pub color_ebc: f64,

    /// Whether mash efficiency applies (malts) or not (sugars, extracts)
    pub mashable: bool,

    /// Extract potential: degrees per kg per litre at 100% efficiency
    pub extract: f64,

    /// Moisture content (informational)
    pub moisture_percent: f64,

    /// Fermentability, or the recipe default attenuation when unset
    #[serde(default)]
    pub fermentability: Fermentability,

    /// Quantity in the recipe, grams
    #[serde(default)]
    pub mass_g: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GristMetadata>,
}

impl Grist {
    /// Create a grist with an explicit mashable flag and no metadata.
    pub fn new(
        color_ebc: f64,
        mashable: bool,
        extract: f64,
        moisture_percent: f64,
        fermentability: Fermentability,
        mass_g: f64,
    ) -> Self {
        Grist {
            color_ebc,
            mashable,
            extract,
            moisture_percent,
            fermentability,
            mass_g,
            metadata: None,
        }
    }

    /// Create a grist whose `mashable` flag is derived from its category.
    ///
    /// ```rust
    /// use brew_core::ingredients::{Fermentability, Grist, GristType};
    ///
    /// let sugar = Grist::of_type(GristType::CopperSugar, 50.0, 370.0, 30.0, Fermentability::Fixed(1.0), 100.0);
    /// assert!(!sugar.mashable);
    /// ```
    pub fn of_type(
        grist_type: GristType,
        color_ebc: f64,
        extract: f64,
        moisture_percent: f64,
        fermentability: Fermentability,
        mass_g: f64,
    ) -> Self {
        Grist {
            metadata: Some(GristMetadata {
                grist_type: Some(grist_type),
                ..Default::default()
            }),
            ..Grist::new(
                color_ebc,
                grist_type.is_mashable(),
                extract,
                moisture_percent,
                fermentability,
                mass_g,
            )
        }
    }

    /// Builder: attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.metadata.get_or_insert_with(GristMetadata::default).name = Some(name.into());
        self
    }

    /// Builder: set the recipe mass in grams
    pub fn with_mass(mut self, mass_g: f64) -> Self {
        self.mass_g = mass_g;
        self
    }

    /// Display name, if any
    pub fn name(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.name.as_deref())
    }

    /// Recipe mass in kilograms
    pub fn mass_kg(&self) -> f64 {
        Kilograms::from(Grams(self.mass_g)).value()
    }

    /// Conversion multiplier: the mash efficiency for mashables, 1.0 otherwise
    pub fn efficiency_factor(&self, efficiency: f64) -> f64 {
        if self.mashable {
            efficiency
        } else {
            1.0
        }
    }
}
