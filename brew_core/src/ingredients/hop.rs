//! Hop additions

use serde::{Deserialize, Serialize};

/// Descriptive hop data, display only
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HopMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pellet, leaf, plug...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Bittering, aroma, dry hop...
    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// A single hop addition to the boil.
///
/// ## JSON Example
///
/// ```json
/// { "alpha": 0.076, "mass_g": 100.0, "boil_time_min": 90.0, "metadata": { "name": "Challenger" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopAddition {
    /// Alpha acid content as a fraction (0.076 = 7.6%)
    pub alpha: f64,

    /// Mass added, grams
    pub mass_g: f64,

    /// Time in the boil, minutes
    pub boil_time_min: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HopMetadata>,
}

impl HopAddition {
    pub fn new(alpha: f64, mass_g: f64, boil_time_min: f64) -> Self {
        HopAddition {
            alpha,
            mass_g,
            boil_time_min,
            metadata: None,
        }
    }

    /// Builder: attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.metadata.get_or_insert_with(HopMetadata::default).name = Some(name.into());
        self
    }

    /// Display name, if any
    pub fn name(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.name.as_deref())
    }
}
