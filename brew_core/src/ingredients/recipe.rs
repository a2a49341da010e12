//! Recipe aggregate
//!
//! A recipe is just the ordered grist bill plus the ordered hop schedule.
//! It carries no identity and is never persisted by this crate.

use serde::{Deserialize, Serialize};

use super::grist::Grist;
use super::hop::HopAddition;

/// Grist bill and hop schedule
///
/// # Example
/// ```
/// use brew_core::ingredients::{Fermentability, Grist, HopAddition, Recipe};
///
/// let recipe = Recipe::new()
///     .with_grist(Grist::new(60.0, true, 265.0, 3.0, Fermentability::UseAttenuation, 100.0))
///     .with_hop(HopAddition::new(0.076, 100.0, 90.0));
///
/// assert_eq!(recipe.grists.len(), 1);
/// assert_eq!(recipe.hops.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub grists: Vec<Grist>,
    #[serde(default)]
    pub hops: Vec<HopAddition>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a grist
    pub fn with_grist(mut self, grist: Grist) -> Self {
        self.grists.push(grist);
        self
    }

    /// Builder: append a hop addition
    pub fn with_hop(mut self, hop: HopAddition) -> Self {
        self.hops.push(hop);
        self
    }

    /// Parse a recipe from JSON
    pub fn from_json(json: &str) -> crate::BrewResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::Fermentability;

    #[test]
    fn test_builder_preserves_order() {
        let recipe = Recipe::new()
            .with_grist(Grist::new(5.0, true, 300.0, 3.0, Fermentability::UseAttenuation, 4000.0).with_name("Pale"))
            .with_grist(Grist::new(60.0, true, 265.0, 3.0, Fermentability::UseAttenuation, 200.0).with_name("Amber"));
        let names: Vec<_> = recipe.grists.iter().filter_map(|g| g.name()).collect();
        assert_eq!(names, vec!["Pale", "Amber"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "grists": [
                { "color_ebc": 60, "mashable": true, "extract": 265, "moisture_percent": 3,
                  "fermentability": null, "mass_g": 100 }
            ],
            "hops": [ { "alpha": 0.076, "mass_g": 100, "boil_time_min": 90 } ]
        }"#;
        let recipe = Recipe::from_json(json).unwrap();
        assert_eq!(recipe.grists[0].fermentability, Fermentability::UseAttenuation);
        assert_eq!(recipe.hops[0].boil_time_min, 90.0);
    }

    #[test]
    fn test_from_json_reports_serialization_error() {
        let err = Recipe::from_json("{ \"grists\": 3 }").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
